//! Rich text primitives: styled runs, mentions, emoji and links.

use crate::error::Result;
use crate::render::kind;
use crate::validation::{Bounds, validate_string};
use serde::Serialize;

/// Visual style of a text run or link. Unset flags are not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
}

impl TextStyle {
    pub fn is_unset(&self) -> bool {
        self.bold.is_none() && self.italic.is_none() && self.strike.is_none() && self.code.is_none()
    }
}

/// Visual style of a channel, user or user group mention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MentionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlink: Option<bool>,
}

impl MentionStyle {
    pub fn is_unset(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.strike.is_none()
            && self.highlight.is_none()
            && self.client_highlight.is_none()
            && self.unlink.is_none()
    }
}

/// A run of text with optional bold/italic/strike/code styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    kind: kind::Text,
    text: String,
    #[serde(skip_serializing_if = "TextStyle::is_unset")]
    style: TextStyle,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { kind: kind::Text, text: text.into(), style: TextStyle::default() }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.style.italic = Some(italic);
        self
    }

    pub fn strike(mut self, strike: bool) -> Self {
        self.style.strike = Some(strike);
        self
    }

    pub fn code(mut self, code: bool) -> Self {
        self.style.code = Some(code);
        self
    }
}

macro_rules! mention {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $id:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(rename = "type")]
            kind: kind::$kind,
            $id: String,
            #[serde(skip_serializing_if = "MentionStyle::is_unset")]
            style: MentionStyle,
        }

        impl $name {
            pub fn new($id: impl Into<String>) -> Self {
                Self { kind: kind::$kind, $id: $id.into(), style: MentionStyle::default() }
            }

            pub fn with_style(mut self, style: MentionStyle) -> Self {
                self.style = style;
                self
            }
        }
    };
}

mention!(
    /// A channel mention, e.g. `#general`.
    RichTextChannel,
    Channel,
    channel_id
);
mention!(
    /// A user mention.
    RichTextUser,
    User,
    user_id
);
mention!(
    /// A user group mention.
    RichTextUserGroup,
    UserGroup,
    user_group_id
);

/// A built-in or custom workspace emoji, by name (e.g. `wave`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextEmoji {
    #[serde(rename = "type")]
    kind: kind::Emoji,
    name: String,
}

impl RichTextEmoji {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self { kind: kind::Emoji, name: validate_string(name, "name", Bounds::at_least(1))? })
    }
}

/// A hyperlink, rendered with `text` when given and the raw URL otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextLink {
    #[serde(rename = "type")]
    kind: kind::Link,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "unsafe", skip_serializing_if = "Option::is_none")]
    unsafe_link: Option<bool>,
    #[serde(skip_serializing_if = "TextStyle::is_unset")]
    style: TextStyle,
}

impl RichTextLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: kind::Link,
            url: url.into(),
            text: None,
            unsafe_link: None,
            style: TextStyle::default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_unsafe(mut self, unsafe_link: bool) -> Self {
        self.unsafe_link = Some(unsafe_link);
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Any rich text primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RichTextElement {
    Text(RichText),
    Channel(RichTextChannel),
    User(RichTextUser),
    UserGroup(RichTextUserGroup),
    Emoji(RichTextEmoji),
    Link(RichTextLink),
}

impl RichTextElement {
    /// The rendered `type` string.
    pub fn kind(&self) -> &'static str {
        match self {
            RichTextElement::Text(_) => kind::Text::TAG,
            RichTextElement::Channel(_) => kind::Channel::TAG,
            RichTextElement::User(_) => kind::User::TAG,
            RichTextElement::UserGroup(_) => kind::UserGroup::TAG,
            RichTextElement::Emoji(_) => kind::Emoji::TAG,
            RichTextElement::Link(_) => kind::Link::TAG,
        }
    }
}

impl From<RichText> for RichTextElement {
    fn from(value: RichText) -> Self {
        RichTextElement::Text(value)
    }
}

impl From<RichTextChannel> for RichTextElement {
    fn from(value: RichTextChannel) -> Self {
        RichTextElement::Channel(value)
    }
}

impl From<RichTextUser> for RichTextElement {
    fn from(value: RichTextUser) -> Self {
        RichTextElement::User(value)
    }
}

impl From<RichTextUserGroup> for RichTextElement {
    fn from(value: RichTextUserGroup) -> Self {
        RichTextElement::UserGroup(value)
    }
}

impl From<RichTextEmoji> for RichTextElement {
    fn from(value: RichTextEmoji) -> Self {
        RichTextElement::Emoji(value)
    }
}

impl From<RichTextLink> for RichTextElement {
    fn from(value: RichTextLink) -> Self {
        RichTextElement::Link(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rich_text_without_style() {
        let text = RichText::new("Hello");
        assert_eq!(serde_json::to_value(&text).unwrap(), json!({"type": "text", "text": "Hello"}));
    }

    #[test]
    fn test_rich_text_style_keeps_false_flags() {
        let text = RichText::new("Hello").bold(true).italic(false);
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"type": "text", "text": "Hello", "style": {"bold": true, "italic": false}})
        );
    }

    #[test]
    fn test_mention_style() {
        let user = RichTextUser::new("U123")
            .with_style(MentionStyle { highlight: Some(true), ..Default::default() });
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"type": "user", "user_id": "U123", "style": {"highlight": true}})
        );
        let group = RichTextUserGroup::new("S123");
        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({"type": "user_group", "user_group_id": "S123"})
        );
    }

    #[test]
    fn test_link_renders_unsafe_key() {
        let link = RichTextLink::new("https://example.com")
            .with_text("example")
            .with_unsafe(true)
            .with_style(TextStyle { code: Some(true), ..Default::default() });
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "type": "link",
                "url": "https://example.com",
                "text": "example",
                "unsafe": true,
                "style": {"code": true}
            })
        );
    }

    #[test]
    fn test_emoji_name_required() {
        assert!(RichTextEmoji::new("").is_err());
        let emoji = RichTextEmoji::new("wave").unwrap();
        assert_eq!(serde_json::to_value(&emoji).unwrap(), json!({"type": "emoji", "name": "wave"}));
    }
}
