//! Buttons: plain interactive buttons and workflow buttons.

use crate::error::Result;
use crate::objects::{ButtonStyle, ConfirmationDialogue, Text, TextLike, Workflow, plain_text};
use crate::render::kind;
use crate::validation::{Bounds, validate_action_id, validate_optional_action_id, validate_string};
use serde::Serialize;

/// An interactive button that sends a `block_actions` payload or opens a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    kind: kind::Button,
    text: Text,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessibility_label: Option<String>,
}

impl Button {
    /// The label is forced to plain text of at most 75 characters.
    pub fn new(text: impl Into<TextLike>, action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::Button,
            text: plain_text(text, "text", 75)?,
            action_id: validate_action_id(action_id)?,
            style: None,
            url: None,
            value: None,
            confirm: None,
            accessibility_label: None,
        })
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style.rendered();
        self
    }

    /// Open `url` in the user's browser when clicked.
    pub fn with_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.url = Some(validate_string(url, "url", Bounds::between(1, 3000))?);
        Ok(self)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Result<Self> {
        self.value = Some(validate_string(value, "value", Bounds::between(1, 2000))?);
        Ok(self)
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialogue) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Label read out by screen readers instead of `text`.
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Result<Self> {
        self.accessibility_label =
            Some(validate_string(label, "accessibility_label", Bounds::between(1, 75))?);
        Ok(self)
    }

    pub fn action_id(&self) -> &str {
        &self.action_id
    }
}

/// A button that starts a workflow from a link trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowButton {
    #[serde(rename = "type")]
    kind: kind::WorkflowButton,
    text: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workflow: Option<Workflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessibility_label: Option<String>,
}

impl WorkflowButton {
    pub fn new(text: impl Into<TextLike>) -> Result<Self> {
        Ok(Self {
            kind: kind::WorkflowButton,
            text: plain_text(text, "text", 75)?,
            action_id: None,
            workflow: None,
            style: None,
            accessibility_label: None,
        })
    }

    pub fn with_action_id(mut self, action_id: impl Into<String>) -> Result<Self> {
        self.action_id = validate_optional_action_id(Some(action_id.into()))?;
        Ok(self)
    }

    pub fn with_workflow(mut self, workflow: Workflow) -> Self {
        self.workflow = Some(workflow);
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style.rendered();
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Result<Self> {
        self.accessibility_label =
            Some(validate_string(label, "accessibility_label", Bounds::between(1, 75))?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{InputParameter, Trigger};
    use serde_json::json;

    #[test]
    fn test_button_basic() {
        let button = Button::new("Click Me", "button").unwrap().with_value("click_me").unwrap();
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({
                "type": "button",
                "text": {"type": "plain_text", "text": "Click Me"},
                "action_id": "button",
                "value": "click_me"
            })
        );
    }

    #[test]
    fn test_button_style_and_link() {
        let button = Button::new("Load", "button")
            .unwrap()
            .with_style(ButtonStyle::Primary)
            .with_url("https://ndl.im/")
            .unwrap();
        let value = serde_json::to_value(&button).unwrap();
        assert_eq!(value["style"], json!("primary"));
        assert_eq!(value["url"], json!("https://ndl.im/"));
    }

    #[test]
    fn test_default_style_is_not_rendered() {
        let button = Button::new("Load", "button").unwrap().with_style(ButtonStyle::Default);
        assert!(serde_json::to_value(&button).unwrap().get("style").is_none());
    }

    #[test]
    fn test_button_bounds() {
        assert!(Button::new("a".repeat(75), "button").is_ok());
        assert!(Button::new("a".repeat(76), "button").is_err());
        assert!(Button::new("ok", "").is_err());
        assert!(Button::new("ok", "b").unwrap().with_value("v".repeat(2001)).is_err());
        assert!(Button::new("ok", "b").unwrap().with_accessibility_label("l".repeat(76)).is_err());
    }

    const SHORTCUT_URL: &str =
        "https://slack.com/shortcuts/Ft012KXZK1MZ/8831723c452aac3e87c6d3219bebd44c";

    #[test]
    fn test_workflow_button() {
        let button = WorkflowButton::new("Run Your Workflow")
            .unwrap()
            .with_workflow(Workflow::new(
                Trigger::new(SHORTCUT_URL)
                    .with_input_parameters(vec![
                        InputParameter::new("name_a", "value_a"),
                        InputParameter::new("name_b", "value_b"),
                    ]),
            ));
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({
                "type": "workflow_button",
                "text": {"type": "plain_text", "text": "Run Your Workflow"},
                "workflow": {
                    "trigger": {
                        "url": SHORTCUT_URL,
                        "customizable_input_parameters": [
                            {"name": "name_a", "value": "value_a"},
                            {"name": "name_b", "value": "value_b"}
                        ]
                    }
                }
            })
        );
    }
}
