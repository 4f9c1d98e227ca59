//! Image elements and their sources.

use crate::error::{Result, ValidationError};
use crate::objects::SlackFile;
use crate::render::kind;
use crate::validation::{Bounds, reject, validate_string};
use serde::Serialize;

/// Where an image is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A publicly hosted URL
    Url(String),
    /// A file uploaded to Slack
    SlackFile(SlackFile),
}

impl From<SlackFile> for ImageSource {
    fn from(value: SlackFile) -> Self {
        ImageSource::SlackFile(value)
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        ImageSource::Url(value.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        ImageSource::Url(value)
    }
}

impl ImageSource {
    /// Split into the mutually exclusive `image_url`/`slack_file` pair.
    pub(crate) fn into_fields(self) -> Result<(Option<String>, Option<SlackFile>)> {
        match self {
            ImageSource::Url(url) => {
                let url = validate_string(url, "image_url", Bounds::between(1, 3000))?;
                Ok((Some(url), None))
            }
            ImageSource::SlackFile(file) => Ok((None, Some(file))),
        }
    }

    /// Build from the raw pair, requiring exactly one of them.
    pub fn from_parts(image_url: Option<String>, slack_file: Option<SlackFile>) -> Result<Self> {
        match (image_url, slack_file) {
            (Some(_), Some(_)) => Err(reject(ValidationError::conflict("image_url", "slack_file"))),
            (Some(url), None) => Ok(ImageSource::Url(url)),
            (None, Some(file)) => Ok(ImageSource::SlackFile(file)),
            (None, None) => {
                Err(reject(ValidationError::missing_one_of(&["image_url", "slack_file"])))
            }
        }
    }
}

/// An image shown inside a section (as accessory) or a context block.
///
/// For a standalone image use [`ImageBlock`](crate::blocks::ImageBlock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    #[serde(rename = "type")]
    kind: kind::Image,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slack_file: Option<SlackFile>,
    alt_text: String,
}

impl Image {
    pub fn new(source: impl Into<ImageSource>, alt_text: impl Into<String>) -> Result<Self> {
        let (image_url, slack_file) = source.into().into_fields()?;
        Ok(Self {
            kind: kind::Image,
            image_url,
            slack_file,
            alt_text: validate_string(alt_text, "alt_text", Bounds::between(1, 2000))?,
        })
    }
}
