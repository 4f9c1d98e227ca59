//! References to images hosted on Slack.

use crate::error::{Result, ValidationError};
use crate::validation::reject;
use serde::Serialize;

/// An image file on Slack, addressed by URL or by file id (never both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl SlackFile {
    pub fn new(url: Option<String>, id: Option<String>) -> Result<Self> {
        let url = url.filter(|url| !url.is_empty());
        let id = id.filter(|id| !id.is_empty());
        match (&url, &id) {
            (Some(_), Some(_)) => Err(reject(ValidationError::conflict("url", "id"))),
            (None, None) => Err(reject(ValidationError::missing_one_of(&["url", "id"]))),
            _ => Ok(Self { url, id }),
        }
    }

    /// A file addressed by its `url_private` or permalink.
    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        Self::new(Some(url.into()), None)
    }

    /// A file addressed by its Slack file id.
    pub fn from_id(id: impl Into<String>) -> Result<Self> {
        Self::new(None, Some(id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exactly_one_reference() {
        assert!(SlackFile::new(Some("u".into()), Some("F1".into())).is_err());
        assert!(SlackFile::new(None, None).is_err());
        let file = SlackFile::from_id("F1").unwrap();
        assert_eq!(serde_json::to_value(file).unwrap(), json!({"id": "F1"}));
    }
}
