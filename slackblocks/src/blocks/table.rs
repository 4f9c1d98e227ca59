use super::RichTextBlock;
use crate::error::Result;
use crate::ids::default_block_id;
use crate::objects::{ColumnSettings, RawText};
use crate::render::kind;
use crate::validation::{Bounds, validate_list};
use serde::Serialize;

pub const MAX_TABLE_ROWS: usize = 100;
pub const MAX_TABLE_COLUMNS: usize = 20;

/// One table cell: unformatted text or a rich text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableCell {
    Raw(RawText),
    RichText(RichTextBlock),
}

impl TableCell {
    /// A raw text cell.
    pub fn raw(text: impl Into<String>) -> Result<Self> {
        Ok(TableCell::Raw(RawText::new(text)?))
    }
}

impl From<RawText> for TableCell {
    fn from(value: RawText) -> Self {
        TableCell::Raw(value)
    }
}

impl From<RichTextBlock> for TableCell {
    fn from(value: RichTextBlock) -> Self {
        TableCell::RichText(value)
    }
}

/// A grid of up to 100 rows with up to 20 cells each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    #[serde(rename = "type")]
    kind: kind::Table,
    pub(super) block_id: String,
    rows: Vec<Vec<TableCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_settings: Option<Vec<ColumnSettings>>,
}

impl TableBlock {
    pub fn new(rows: Vec<Vec<TableCell>>) -> Result<Self> {
        let rows = validate_list(rows, "rows", Bounds::between(1, MAX_TABLE_ROWS))?;
        let rows = rows
            .into_iter()
            .map(|row| validate_list(row, "rows", Bounds::between(1, MAX_TABLE_COLUMNS)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { kind: kind::Table, block_id: default_block_id(), rows, column_settings: None })
    }

    /// Per-column alignment and wrapping, in column order.
    pub fn with_column_settings(mut self, settings: Vec<ColumnSettings>) -> Result<Self> {
        self.column_settings =
            Some(validate_list(
                settings,
                "column_settings",
                Bounds::between(1, MAX_TABLE_COLUMNS),
            )?);
        Ok(self)
    }

    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }
}
