//! Legacy secondary attachments.
//!
//! Attachments hold lower priority content shown under a message, with a
//! colored bar down their left edge.

use crate::blocks::Block;
use crate::error::{Result, ValidationError};
use crate::render::impl_render;
use crate::validation::{is_hex, reject};
use serde::Serialize;
use tracing::debug;

/// Named colors for the attachment bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Good,
    Warning,
    Danger,
    Red,
    Blue,
    Yellow,
    Green,
    Orange,
    Purple,
    Black,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Good => "good",
            Color::Warning => "warning",
            Color::Danger => "danger",
            Color::Red => "#ff0000",
            Color::Blue => "#0000ff",
            Color::Yellow => "#ffff00",
            Color::Green => "#00ff00",
            Color::Orange => "#ff8800",
            Color::Purple => "#8800ff",
            Color::Black => "#000000",
        }
    }
}

/// Either a [`Color`] constant or a hex code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorLike {
    Named(Color),
    Hex(String),
}

impl From<Color> for ColorLike {
    fn from(value: Color) -> Self {
        ColorLike::Named(value)
    }
}

impl From<&str> for ColorLike {
    fn from(value: &str) -> Self {
        ColorLike::Hex(value.to_string())
    }
}

impl From<String> for ColorLike {
    fn from(value: String) -> Self {
        ColorLike::Hex(value)
    }
}

/// Normalize a color to the `#rrggbb` form Slack expects.
///
/// Accepts `#rrggbb`, `rrggbb` and the shorthand `rgb`.
pub fn normalize_color(color: impl Into<ColorLike>) -> Result<String> {
    let hex = match color.into() {
        ColorLike::Named(color) => return Ok(color.as_str().to_string()),
        ColorLike::Hex(hex) => hex,
    };
    let normalized = match hex.len() {
        7 if hex.starts_with('#') && is_hex(&hex[1..]) => return Ok(hex),
        6 if is_hex(&hex) => format!("#{}", hex),
        3 if is_hex(&hex) => hex.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        }),
        _ => {
            return Err(reject(ValidationError::invalid(
                "color",
                format!("`{}` is not a hex code such as `#ffffff`", hex),
            )));
        }
    };
    debug!(from = %hex, to = %normalized, "normalized attachment color");
    Ok(normalized)
}

/// A legacy attachment field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Field {
    short: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold heading above the value.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into()).filter(|title: &String| !title.is_empty());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into()).filter(|value: &String| !value.is_empty());
        self
    }

    /// Whether the field is narrow enough to sit beside others.
    pub fn with_short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }
}

/// Secondary content attached to a message.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
}

impl Attachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Fails unless `color` is a [`Color`] or a valid hex code.
    pub fn with_color(mut self, color: impl Into<ColorLike>) -> Result<Self> {
        self.color = Some(normalize_color(color)?);
        Ok(self)
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Plain summary for clients that cannot show the attachment.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl_render!(Attachment, Field);
