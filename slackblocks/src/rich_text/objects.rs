//! Rich text containers holding the primitives from [`super::elements`].

use super::elements::RichTextElement;
use crate::error::{Result, ValidationError};
use crate::render::kind;
use crate::validation::{Bounds, reject, validate_list};
use serde::Serialize;
use std::str::FromStr;

/// Bullet or numbered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListType {
    Bullet,
    Ordered,
}

impl FromStr for ListType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bullet" => Ok(ListType::Bullet),
            "ordered" => Ok(ListType::Ordered),
            other => {
                Err(reject(ValidationError::not_allowed("style", other, &["bullet", "ordered"])))
            }
        }
    }
}

/// The basic container: one or more primitives rendered inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextSection {
    #[serde(rename = "type")]
    kind: kind::RichTextSection,
    elements: Vec<RichTextElement>,
}

impl RichTextSection {
    pub fn new(elements: Vec<RichTextElement>) -> Result<Self> {
        Ok(Self {
            kind: kind::RichTextSection,
            elements: validate_list(elements, "elements", Bounds::at_least(1))?,
        })
    }
}

/// A list whose items are sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextList {
    #[serde(rename = "type")]
    kind: kind::RichTextList,
    elements: Vec<RichTextSection>,
    style: ListType,
    #[serde(skip_serializing_if = "Option::is_none")]
    indent: Option<u32>,
    offset: u32,
    border: u32,
}

impl RichTextList {
    pub fn new(style: ListType, elements: Vec<RichTextSection>) -> Result<Self> {
        Ok(Self {
            kind: kind::RichTextList,
            elements: validate_list(elements, "elements", Bounds::at_least(1))?,
            style,
            indent: None,
            offset: 0,
            border: 0,
        })
    }

    /// Indent of each item, in pixels.
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Border thickness in pixels.
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }
}

macro_rules! bordered_container {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(rename = "type")]
            kind: kind::$kind,
            elements: Vec<RichTextElement>,
            #[serde(skip_serializing_if = "Option::is_none")]
            border: Option<u32>,
        }

        impl $name {
            pub fn new(elements: Vec<RichTextElement>) -> Result<Self> {
                Ok(Self {
                    kind: kind::$kind,
                    elements: validate_list(elements, "elements", Bounds::at_least(1))?,
                    border: None,
                })
            }

            /// Border thickness in pixels.
            pub fn with_border(mut self, border: u32) -> Self {
                self.border = Some(border);
                self
            }
        }
    };
}

bordered_container!(
    /// A block quote, drawn with a bar down its left side.
    RichTextQuote,
    RichTextQuote
);
bordered_container!(
    /// Monospaced preformatted text, like a fenced code block.
    RichTextCodeBlock,
    RichTextPreformatted
);

/// Any rich text container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RichTextObject {
    Section(RichTextSection),
    List(RichTextList),
    Quote(RichTextQuote),
    CodeBlock(RichTextCodeBlock),
}

impl RichTextObject {
    /// The rendered `type` string.
    pub fn kind(&self) -> &'static str {
        match self {
            RichTextObject::Section(_) => kind::RichTextSection::TAG,
            RichTextObject::List(_) => kind::RichTextList::TAG,
            RichTextObject::Quote(_) => kind::RichTextQuote::TAG,
            RichTextObject::CodeBlock(_) => kind::RichTextPreformatted::TAG,
        }
    }
}

impl From<RichTextSection> for RichTextObject {
    fn from(value: RichTextSection) -> Self {
        RichTextObject::Section(value)
    }
}

impl From<RichTextList> for RichTextObject {
    fn from(value: RichTextList) -> Self {
        RichTextObject::List(value)
    }
}

impl From<RichTextQuote> for RichTextObject {
    fn from(value: RichTextQuote) -> Self {
        RichTextObject::Quote(value)
    }
}

impl From<RichTextCodeBlock> for RichTextObject {
    fn from(value: RichTextCodeBlock) -> Self {
        RichTextObject::CodeBlock(value)
    }
}
