use crate::elements::Element;
use crate::error::{Result, ValidationError};
use crate::ids::default_block_id;
use crate::objects::{Text, TextLike, any_text};
use crate::render::kind;
use crate::validation::{Bounds, reject, validate_list};
use serde::Serialize;

/// Text, up to ten fields in two columns, and an optional accessory element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    kind: kind::Section,
    pub(super) block_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<Text>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessory: Option<Element>,
}

impl SectionBlock {
    /// A section holding `text` (at most 3000 characters, raw strings become
    /// markdown).
    pub fn new(text: impl Into<TextLike>) -> Result<Self> {
        Self::from_parts(Some(text.into()), None)
    }

    /// A section holding only fields.
    pub fn from_fields(fields: Vec<TextLike>) -> Result<Self> {
        Self::from_parts(None, Some(fields))
    }

    /// At least one of `text` and `fields` is required.
    pub fn from_parts(text: Option<TextLike>, fields: Option<Vec<TextLike>>) -> Result<Self> {
        if text.is_none() && fields.is_none() {
            return Err(reject(ValidationError::missing_one_of(&["text", "fields"])));
        }
        let text = text.map(|text| any_text(text, "text", 3000)).transpose()?;
        let fields = fields.map(section_fields).transpose()?;
        Ok(Self {
            kind: kind::Section,
            block_id: default_block_id(),
            text,
            fields,
            accessory: None,
        })
    }

    pub fn with_fields(mut self, fields: Vec<TextLike>) -> Result<Self> {
        self.fields = Some(section_fields(fields)?);
        Ok(self)
    }

    /// Attach an element shown beside the text. Input-only elements (text,
    /// number, file inputs) are rejected.
    pub fn with_accessory(mut self, accessory: impl Into<Element>) -> Result<Self> {
        let accessory = accessory.into();
        let kind = accessory.kind();
        if !kind.is_section_accessory() {
            return Err(reject(ValidationError::invalid_kind(
                "accessory",
                kind.as_str(),
                "not allowed as a section accessory",
            )));
        }
        self.accessory = Some(accessory);
        Ok(self)
    }
}

fn section_fields(fields: Vec<TextLike>) -> Result<Vec<Text>> {
    let fields = validate_list(fields, "fields", Bounds::between(1, 10))?;
    fields.into_iter().map(|field| any_text(field, "fields", 2000)).collect()
}
