//! Confirmation dialogues attached to interactive elements.

use super::text::{Text, TextLike, any_text, plain_text};
use crate::error::{Result, ValidationError};
use crate::validation::reject;
use serde::Serialize;
use std::str::FromStr;

/// Colour scheme of buttons and confirmation dialogues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Slack's default grey; not rendered
    #[default]
    Default,
    Primary,
    Danger,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonStyle::Default => "default",
            ButtonStyle::Primary => "primary",
            ButtonStyle::Danger => "danger",
        }
    }

    /// Style to render, `None` for the default.
    pub(crate) fn rendered(self) -> Option<ButtonStyle> {
        match self {
            ButtonStyle::Default => None,
            style => Some(style),
        }
    }
}

impl FromStr for ButtonStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(ButtonStyle::Default),
            "primary" => Ok(ButtonStyle::Primary),
            "danger" => Ok(ButtonStyle::Danger),
            other => Err(reject(ValidationError::not_allowed(
                "style",
                other,
                &["default", "primary", "danger"],
            ))),
        }
    }
}

/// A dialog asking the user to confirm an action before it is sent.
///
/// Renders as a flat object with no `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationDialogue {
    title: Text,
    text: Text,
    confirm: Text,
    deny: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<ButtonStyle>,
}

/// Shorter name for [`ConfirmationDialogue`].
pub type Confirm = ConfirmationDialogue;

impl ConfirmationDialogue {
    pub fn new(
        title: impl Into<TextLike>,
        text: impl Into<TextLike>,
        confirm: impl Into<TextLike>,
        deny: impl Into<TextLike>,
    ) -> Result<Self> {
        Ok(Self {
            title: plain_text(title, "title", 100)?,
            text: any_text(text, "text", 300)?,
            confirm: plain_text(confirm, "confirm", 30)?,
            deny: plain_text(deny, "deny", 30)?,
            style: None,
        })
    }

    /// Colour the confirm button; `Default` clears it.
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style.rendered();
        self
    }

    pub fn title(&self) -> &Text {
        &self.title
    }
}
