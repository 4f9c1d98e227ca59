use crate::error::Result;
use crate::ids::default_block_id;
use crate::render::kind;
use crate::rich_text::RichTextObject;
use crate::validation::{Bounds, validate_list};
use serde::Serialize;

/// Formatted text built from rich text sections, lists, quotes and code
/// blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    kind: kind::RichText,
    pub(super) block_id: String,
    elements: Vec<RichTextObject>,
}

impl RichTextBlock {
    pub fn new(elements: Vec<RichTextObject>) -> Result<Self> {
        Ok(Self {
            kind: kind::RichText,
            block_id: default_block_id(),
            elements: validate_list(elements, "elements", Bounds::at_least(1))?,
        })
    }

    pub fn elements(&self) -> &[RichTextObject] {
        &self.elements
    }
}
