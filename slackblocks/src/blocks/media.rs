//! Image, video and remote file blocks.

use crate::elements::ImageSource;
use crate::error::Result;
use crate::ids::default_block_id;
use crate::objects::{SlackFile, Text, TextLike, plain_text};
use crate::render::kind;
use crate::validation::{Bounds, validate_string};
use serde::Serialize;

/// A standalone image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    #[serde(rename = "type")]
    kind: kind::Image,
    pub(super) block_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slack_file: Option<SlackFile>,
    alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Text>,
}

impl ImageBlock {
    pub fn new(source: impl Into<ImageSource>, alt_text: impl Into<String>) -> Result<Self> {
        let (image_url, slack_file) = source.into().into_fields()?;
        Ok(Self {
            kind: kind::Image,
            block_id: default_block_id(),
            image_url,
            slack_file,
            alt_text: validate_string(alt_text, "alt_text", Bounds::between(1, 2000))?,
            title: None,
        })
    }

    /// Caption above the image, forced to plain text of at most 2000 characters.
    pub fn with_title(mut self, title: impl Into<TextLike>) -> Result<Self> {
        self.title = Some(plain_text(title, "title", 2000)?);
        Ok(self)
    }
}

/// An embedded video player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoBlock {
    #[serde(rename = "type")]
    kind: kind::Video,
    pub(super) block_id: String,
    alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_name: Option<String>,
    title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_url: Option<String>,
    thumbnail_url: String,
    video_url: String,
}

impl VideoBlock {
    /// `title` is forced to plain text of at most 200 characters.
    pub fn new(
        alt_text: impl Into<String>,
        title: impl Into<TextLike>,
        thumbnail_url: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            kind: kind::Video,
            block_id: default_block_id(),
            alt_text: validate_string(alt_text, "alt_text", Bounds::at_least(1))?,
            author_name: None,
            description: None,
            provider_icon_url: None,
            provider_name: None,
            title: plain_text(title, "title", 200)?,
            title_url: None,
            thumbnail_url: validate_string(thumbnail_url, "thumbnail_url", Bounds::at_least(1))?,
            video_url: validate_string(video_url, "video_url", Bounds::at_least(1))?,
        })
    }

    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Result<Self> {
        self.author_name =
            Some(validate_string(author_name, "author_name", Bounds::between(1, 50))?);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<TextLike>) -> Result<Self> {
        self.description = Some(plain_text(description, "description", 200)?);
        Ok(self)
    }

    pub fn with_provider_icon_url(mut self, url: impl Into<String>) -> Self {
        self.provider_icon_url = Some(url.into());
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    /// Hyperlink for the title. Must be HTTPS in Slack clients.
    pub fn with_title_url(mut self, url: impl Into<String>) -> Self {
        self.title_url = Some(url.into());
        self
    }
}

/// A remote file previously added with `files.remote.add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileBlock {
    #[serde(rename = "type")]
    kind: kind::File,
    pub(super) block_id: String,
    external_id: String,
    source: String,
}

impl FileBlock {
    /// `source` is always `remote` for remote files.
    pub fn new(external_id: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::File,
            block_id: default_block_id(),
            external_id: validate_string(external_id, "external_id", Bounds::at_least(1))?,
            source: validate_string(source, "source", Bounds::at_least(1))?,
        })
    }
}
