//! Objects used by table blocks.

use crate::error::Result;
use crate::render::kind;
use crate::validation::{Bounds, validate_string};
use serde::Serialize;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
}

/// Display settings for one table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    align: Option<ColumnAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_wrapped: Option<bool>,
}

impl ColumnSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_align(mut self, align: ColumnAlignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_wrapped(mut self, is_wrapped: bool) -> Self {
        self.is_wrapped = Some(is_wrapped);
        self
    }
}

/// Unformatted text for a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawText {
    #[serde(rename = "type")]
    kind: kind::RawText,
    text: String,
}

impl RawText {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Ok(Self { kind: kind::RawText, text: validate_string(text, "text", Bounds::at_least(1))? })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_text() {
        let cell = RawText::new("Data 1A").unwrap();
        assert_eq!(
            serde_json::to_value(&cell).unwrap(),
            json!({"type": "raw_text", "text": "Data 1A"})
        );
        assert!(RawText::new("").is_err());
    }

    #[test]
    fn test_column_settings() {
        let settings = ColumnSettings::new().with_align(ColumnAlignment::Right).with_wrapped(true);
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"align": "right", "is_wrapped": true})
        );
        assert_eq!(serde_json::to_value(ColumnSettings::new()).unwrap(), json!({}));
    }
}
