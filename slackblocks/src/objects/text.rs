//! Text composition object.

use crate::error::{Result, ValidationError};
use crate::validation::{Bounds, reject, validate_string};
use serde::Serialize;
use tracing::debug;

/// Maximum length of any text object
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Formatting of a [`Text`] object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextType {
    /// Slack's markdown dialect
    #[serde(rename = "mrkdwn")]
    Markdown,
    /// Unformatted text
    #[serde(rename = "plain_text")]
    Plaintext,
}

impl TextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Markdown => "mrkdwn",
            TextType::Plaintext => "plain_text",
        }
    }
}

/// Text rendered as `plain_text` or `mrkdwn`.
///
/// `emoji` only exists on plain text and `verbatim` only on markdown; a flag
/// is rendered only when it is `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    #[serde(rename = "type")]
    text_type: TextType,
    text: String,
    #[serde(skip_serializing_if = "is_not_true")]
    emoji: Option<bool>,
    #[serde(skip_serializing_if = "is_not_true")]
    verbatim: Option<bool>,
}

fn is_not_true(flag: &Option<bool>) -> bool {
    *flag != Some(true)
}

impl Text {
    /// Create a text object of the given type (1-3000 characters).
    pub fn new(text: impl Into<String>, text_type: TextType) -> Result<Self> {
        let text = validate_string(text, "text", Bounds::between(1, MAX_TEXT_LENGTH))?;
        Ok(Self { text_type, text, emoji: None, verbatim: None })
    }

    pub fn plain(text: impl Into<String>) -> Result<Self> {
        Self::new(text, TextType::Plaintext)
    }

    pub fn markdown(text: impl Into<String>) -> Result<Self> {
        Self::new(text, TextType::Markdown)
    }

    /// Escape emoji into `:colon:` form. Ignored for markdown text.
    pub fn with_emoji(mut self, emoji: bool) -> Self {
        if self.text_type == TextType::Plaintext {
            self.emoji = Some(emoji);
        }
        self
    }

    /// Disable automatic link parsing. Ignored for plain text.
    pub fn with_verbatim(mut self, verbatim: bool) -> Self {
        if self.text_type == TextType::Markdown {
            self.verbatim = Some(verbatim);
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    pub fn emoji(&self) -> Option<bool> {
        self.emoji
    }

    pub fn verbatim(&self) -> Option<bool> {
        self.verbatim
    }

    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Plaintext
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Normalize a raw string or [`Text`] into a [`Text`].
    ///
    /// Raw strings become markdown unless `force_plaintext` is set. A markdown
    /// source forced to plain text loses its `verbatim` flag. When
    /// `max_length` is given the content is checked against it in addition to
    /// the 3000 character limit.
    pub fn to_text(
        value: impl Into<TextLike>,
        force_plaintext: bool,
        max_length: Option<usize>,
    ) -> Result<Text> {
        Self::coerce(value.into(), "text", force_plaintext, max_length)
    }

    /// Like [`Text::to_text`] for values that may be absent.
    pub fn to_optional_text(
        value: Option<TextLike>,
        force_plaintext: bool,
        max_length: Option<usize>,
        allow_none: bool,
    ) -> Result<Option<Text>> {
        match value {
            Some(value) => Self::coerce(value, "text", force_plaintext, max_length).map(Some),
            None if allow_none => Ok(None),
            None => Err(reject(ValidationError::missing("text"))),
        }
    }

    /// Coerce `value`, reporting failures against `field`.
    pub(crate) fn coerce(
        value: TextLike,
        field: &str,
        force_plaintext: bool,
        max_length: Option<usize>,
    ) -> Result<Text> {
        let bounds = Bounds::between(1, max_length.unwrap_or(MAX_TEXT_LENGTH).min(MAX_TEXT_LENGTH));
        match value {
            TextLike::Raw(raw) => {
                let text = validate_string(raw, field, bounds)?;
                let text_type =
                    if force_plaintext { TextType::Plaintext } else { TextType::Markdown };
                Ok(Self { text_type, text, emoji: None, verbatim: None })
            }
            TextLike::Text(source) => {
                validate_string(source.text.as_str(), field, bounds)?;
                if force_plaintext && source.text_type == TextType::Markdown {
                    debug!(field, "coerced mrkdwn text to plain_text");
                    return Ok(Self {
                        text_type: TextType::Plaintext,
                        text: source.text,
                        emoji: source.emoji,
                        verbatim: None,
                    });
                }
                Ok(source)
            }
        }
    }
}

/// Either a raw string or an already built [`Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLike {
    Raw(String),
    Text(Text),
}

impl From<&str> for TextLike {
    fn from(value: &str) -> Self {
        TextLike::Raw(value.to_string())
    }
}

impl From<String> for TextLike {
    fn from(value: String) -> Self {
        TextLike::Raw(value)
    }
}

impl From<&String> for TextLike {
    fn from(value: &String) -> Self {
        TextLike::Raw(value.clone())
    }
}

impl From<Text> for TextLike {
    fn from(value: Text) -> Self {
        TextLike::Text(value)
    }
}

/// Coerce into plain text of at most `max_length` characters.
pub(crate) fn plain_text(
    value: impl Into<TextLike>,
    field: &str,
    max_length: usize,
) -> Result<Text> {
    Text::coerce(value.into(), field, true, Some(max_length))
}

/// Coerce keeping the source type (raw strings become markdown).
pub(crate) fn any_text(value: impl Into<TextLike>, field: &str, max_length: usize) -> Result<Text> {
    Text::coerce(value.into(), field, false, Some(max_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_markdown_renders_without_flags() {
        let text = Text::markdown("hi").unwrap();
        assert_eq!(serde_json::to_value(&text).unwrap(), json!({"type": "mrkdwn", "text": "hi"}));
    }

    #[test]
    fn test_plain_with_emoji() {
        let text = Text::plain("hi").unwrap().with_emoji(true);
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"type": "plain_text", "text": "hi", "emoji": true})
        );
    }

    #[test]
    fn test_false_flag_is_omitted() {
        let text = Text::plain("hi").unwrap().with_emoji(false);
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"type": "plain_text", "text": "hi"})
        );
    }

    #[test]
    fn test_inactive_flag_is_ignored() {
        let text = Text::markdown("hi").unwrap().with_emoji(true);
        assert_eq!(text.emoji(), None);
        let text = Text::plain("hi").unwrap().with_verbatim(true);
        assert_eq!(text.verbatim(), None);
    }

    #[test]
    fn test_length_bounds() {
        assert!(Text::plain("").is_err());
        assert!(Text::plain("a".repeat(3000)).is_ok());
        assert!(Text::plain("a".repeat(3001)).is_err());
    }

    #[test]
    fn test_raw_string_defaults_to_markdown() {
        let text = Text::to_text("hello", false, None).unwrap();
        assert_eq!(text.text_type(), TextType::Markdown);
    }

    #[test]
    fn test_force_plaintext_drops_verbatim() {
        let source = Text::markdown("hello").unwrap().with_verbatim(true);
        let text = Text::to_text(source, true, None).unwrap();
        assert_eq!(text, Text::plain("hello").unwrap());
    }

    #[test]
    fn test_force_plaintext_keeps_emoji() {
        let source = Text::plain("hello").unwrap().with_emoji(true);
        let text = Text::to_text(source.clone(), true, None).unwrap();
        assert_eq!(text, source);
    }

    #[test]
    fn test_max_length_applies_to_text_objects() {
        let source = Text::plain("hello").unwrap();
        let err = Text::to_text(source, false, Some(4)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 4, .. }));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(Text::to_optional_text(None, false, None, true).unwrap(), None);
        assert!(Text::to_optional_text(None, false, None, false).is_err());
    }
}
