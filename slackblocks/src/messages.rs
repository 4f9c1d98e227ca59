//! Messages: channel posts, interaction responses and webhook replies.

use crate::attachments::Attachment;
use crate::blocks::Block;
use crate::error::{Result, ValidationError};
use crate::render::impl_render;
use crate::validation::{Bounds, reject, validate_string};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Content shared by [`Message`] and [`MessageResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
struct MessageBody {
    mrkdwn: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<String>,
    text: String,
}

impl Default for MessageBody {
    fn default() -> Self {
        Self {
            mrkdwn: true,
            blocks: Vec::new(),
            attachments: Vec::new(),
            thread_ts: None,
            text: String::new(),
        }
    }
}

macro_rules! body_setters {
    ($($ty:ty),*) => {
        $(impl $ty {
            /// Fallback text shown in notifications. Defaults to the empty string.
            pub fn with_text(mut self, text: impl Into<String>) -> Self {
                self.body.text = text.into();
                self
            }

            pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
                self.body.blocks = blocks;
                self
            }

            pub fn with_block(mut self, block: impl Into<Block>) -> Self {
                self.body.blocks.push(block.into());
                self
            }

            pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
                self.body.attachments = attachments;
                self
            }

            /// Reply in the thread rooted at `thread_ts`.
            pub fn with_thread_ts(mut self, thread_ts: impl Into<String>) -> Self {
                self.body.thread_ts = Some(thread_ts.into());
                self
            }

            /// Whether `text` is parsed as markdown. Defaults to `true`.
            pub fn with_mrkdwn(mut self, mrkdwn: bool) -> Self {
                self.body.mrkdwn = mrkdwn;
                self
            }

            pub fn blocks(&self) -> &[Block] {
                &self.body.blocks
            }
        })*
    };
}

/// A message posted to a channel with `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    channel: String,
    #[serde(flatten)]
    body: MessageBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unfurl_media: Option<bool>,
}

impl Message {
    /// `channel` is a channel name (`#general`) or id.
    pub fn new(channel: impl Into<String>) -> Result<Self> {
        Ok(Self {
            channel: validate_string(channel, "channel", Bounds::at_least(1))?,
            body: MessageBody::default(),
            unfurl_links: None,
            unfurl_media: None,
        })
    }

    pub fn with_unfurl_links(mut self, unfurl_links: bool) -> Self {
        self.unfurl_links = Some(unfurl_links);
        self
    }

    pub fn with_unfurl_media(mut self, unfurl_media: bool) -> Self {
        self.unfurl_media = Some(unfurl_media);
        self
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

/// Who sees a reply to an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Only the user who triggered the interaction.
    Ephemeral,
    InChannel,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Ephemeral => "ephemeral",
            ResponseType::InChannel => "in_channel",
        }
    }
}

impl FromStr for ResponseType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ephemeral" => Ok(ResponseType::Ephemeral),
            "in_channel" => Ok(ResponseType::InChannel),
            other => Err(reject(ValidationError::not_allowed(
                "response_type",
                other,
                &["ephemeral", "in_channel"],
            ))),
        }
    }
}

/// The immediate reply to an interaction payload, sent to its `response_url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResponse {
    #[serde(flatten)]
    body: MessageBody,
    replace_original: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_type: Option<ResponseType>,
}

impl MessageResponse {
    pub fn new() -> Self {
        Self { body: MessageBody::default(), replace_original: false, response_type: None }
    }

    pub fn with_replace_original(mut self, replace_original: bool) -> Self {
        self.replace_original = replace_original;
        self
    }

    /// Show the reply only to the interacting user.
    pub fn with_ephemeral(mut self, ephemeral: bool) -> Self {
        self.response_type = ephemeral.then_some(ResponseType::Ephemeral);
        self
    }
}

impl Default for MessageResponse {
    fn default() -> Self {
        Self::new()
    }
}

body_setters!(Message, MessageResponse);

/// A message sent to an incoming webhook or `response_url`.
///
/// `headers` travel with the HTTP request and are never part of the body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WebhookMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replace_original: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_original: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unfurl_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(skip)]
    headers: BTreeMap<String, String>,
}

impl WebhookMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Parse `ephemeral` or `in_channel`.
    pub fn with_response_type_str(self, response_type: &str) -> Result<Self> {
        Ok(self.with_response_type(response_type.parse()?))
    }

    /// Fails if `delete_original` is already set to `true`.
    pub fn with_replace_original(mut self, replace_original: bool) -> Result<Self> {
        if replace_original && self.delete_original == Some(true) {
            return Err(reject(ValidationError::conflict("replace_original", "delete_original")));
        }
        self.replace_original = Some(replace_original);
        Ok(self)
    }

    /// Fails if `replace_original` is already set to `true`.
    pub fn with_delete_original(mut self, delete_original: bool) -> Result<Self> {
        if delete_original && self.replace_original == Some(true) {
            return Err(reject(ValidationError::conflict("replace_original", "delete_original")));
        }
        self.delete_original = Some(delete_original);
        Ok(self)
    }

    pub fn with_unfurl_links(mut self, unfurl_links: bool) -> Self {
        self.unfurl_links = Some(unfurl_links);
        self
    }

    pub fn with_unfurl_media(mut self, unfurl_media: bool) -> Self {
        self.unfurl_media = Some(unfurl_media);
        self
    }

    /// Attach event metadata. Must be a JSON object.
    pub fn with_metadata(mut self, metadata: Value) -> Result<Self> {
        if !metadata.is_object() {
            return Err(reject(ValidationError::invalid("metadata", "must be a JSON object")));
        }
        self.metadata = Some(metadata);
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// HTTP headers to send alongside the body.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

impl_render!(Message, MessageResponse, WebhookMessage);
