//! Options and option groups for menus, checkboxes and radio buttons.

use super::text::{Text, TextLike, any_text, plain_text};
use crate::error::Result;
use crate::validation::{Bounds, validate_list, validate_string};
use serde::Serialize;

/// A single selectable item (an "option" object in Block Kit).
///
/// Named `SelectOption` so it does not shadow [`std::option::Option`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    text: Text,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl SelectOption {
    /// `text` is shown to the user, `value` is sent with the interaction
    /// payload. Both are limited to 75 characters.
    pub fn new(text: impl Into<TextLike>, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            text: any_text(text, "text", 75)?,
            value: validate_string(value, "value", Bounds::at_most(75))?,
            description: None,
            url: None,
        })
    }

    /// An option with a plain text label, as select and overflow menus require.
    pub fn plain(text: impl Into<TextLike>, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            text: plain_text(text, "text", 75)?,
            value: validate_string(value, "value", Bounds::at_most(75))?,
            description: None,
            url: None,
        })
    }

    /// Secondary plain text shown under the label.
    pub fn with_description(mut self, description: impl Into<TextLike>) -> Result<Self> {
        self.description = Some(plain_text(description, "description", 75)?);
        Ok(self)
    }

    /// URL opened when the option is clicked (overflow menus only).
    pub fn with_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.url = Some(validate_string(url, "url", Bounds::at_most(3000))?);
        Ok(self)
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A labelled group of options inside a select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    label: Text,
    options: Vec<SelectOption>,
}

impl OptionGroup {
    pub fn new(label: impl Into<TextLike>, options: Vec<SelectOption>) -> Result<Self> {
        Ok(Self {
            label: plain_text(label, "label", 75)?,
            options: validate_list(options, "options", Bounds::between(1, 100))?,
        })
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}
