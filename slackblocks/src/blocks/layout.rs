use crate::error::Result;
use crate::ids::default_block_id;
use crate::objects::{Text, TextLike, plain_text};
use crate::render::kind;
use serde::Serialize;

/// A horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DividerBlock {
    #[serde(rename = "type")]
    kind: kind::Divider,
    pub(super) block_id: String,
}

impl DividerBlock {
    pub fn new() -> Self {
        Self { kind: kind::Divider, block_id: default_block_id() }
    }
}

impl Default for DividerBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// Large bold text, forced to plain text of at most 150 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    #[serde(rename = "type")]
    kind: kind::Header,
    pub(super) block_id: String,
    text: Text,
}

impl HeaderBlock {
    pub fn new(text: impl Into<TextLike>) -> Result<Self> {
        let text = plain_text(text, "text", 150)?;
        Ok(Self { kind: kind::Header, block_id: default_block_id(), text })
    }

    pub fn text(&self) -> &Text {
        &self.text
    }
}
