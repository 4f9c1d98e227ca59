//! Elements that present a fixed list of options inline.

use crate::error::{Result, ValidationError};
use crate::objects::{ConfirmationDialogue, SelectOption};
use crate::render::kind;
use crate::validation::{Bounds, reject, validate_action_id, validate_list};
use serde::Serialize;

fn ensure_member(option: &SelectOption, options: &[SelectOption], field: &str) -> Result<()> {
    if options.contains(option) {
        Ok(())
    } else {
        Err(reject(ValidationError::invalid(
            field,
            format!("option with value `{}` is not one of `options`", option.value()),
        )))
    }
}

/// A group of checkboxes, 1-10 options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxGroup {
    #[serde(rename = "type")]
    kind: kind::Checkboxes,
    action_id: String,
    options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_options: Option<Vec<SelectOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
}

impl CheckboxGroup {
    pub fn new(action_id: impl Into<String>, options: Vec<SelectOption>) -> Result<Self> {
        Ok(Self {
            kind: kind::Checkboxes,
            action_id: validate_action_id(action_id)?,
            options: validate_list(options, "options", Bounds::between(1, 10))?,
            initial_options: None,
            confirm: None,
            focus_on_load: None,
        })
    }

    /// Pre-checked options; each must be one of `options`.
    pub fn with_initial_options(mut self, initial_options: Vec<SelectOption>) -> Result<Self> {
        let initial_options =
            validate_list(initial_options, "initial_options", Bounds::between(1, 10))?;
        for option in &initial_options {
            ensure_member(option, &self.options, "initial_options")?;
        }
        self.initial_options = Some(initial_options);
        Ok(self)
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialogue) -> Self {
        self.confirm = Some(confirm);
        self
    }

    pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = Some(focus_on_load);
        self
    }
}

/// Radio buttons, 1-10 options, at most one selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioButtonGroup {
    #[serde(rename = "type")]
    kind: kind::RadioButtons,
    action_id: String,
    options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
}

impl RadioButtonGroup {
    pub fn new(action_id: impl Into<String>, options: Vec<SelectOption>) -> Result<Self> {
        Ok(Self {
            kind: kind::RadioButtons,
            action_id: validate_action_id(action_id)?,
            options: validate_list(options, "options", Bounds::between(1, 10))?,
            initial_option: None,
            confirm: None,
            focus_on_load: None,
        })
    }

    /// Pre-selected option; must be one of `options`.
    pub fn with_initial_option(mut self, initial_option: SelectOption) -> Result<Self> {
        ensure_member(&initial_option, &self.options, "initial_option")?;
        self.initial_option = Some(initial_option);
        Ok(self)
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialogue) -> Self {
        self.confirm = Some(confirm);
        self
    }

    pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = Some(focus_on_load);
        self
    }
}

/// A "..." button revealing up to five options. Options may carry a `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowMenu {
    #[serde(rename = "type")]
    kind: kind::Overflow,
    action_id: String,
    options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
}

impl OverflowMenu {
    pub fn new(action_id: impl Into<String>, options: Vec<SelectOption>) -> Result<Self> {
        Ok(Self {
            kind: kind::Overflow,
            action_id: validate_action_id(action_id)?,
            options: validate_list(options, "options", Bounds::between(1, 5))?,
            confirm: None,
        })
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialogue) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Text;
    use serde_json::json;

    fn option(label: &str) -> SelectOption {
        SelectOption::new(Text::plain(label).unwrap(), label).unwrap()
    }

    fn options(n: usize) -> Vec<SelectOption> {
        (0..n).map(|i| option(&format!("option_{}", i))).collect()
    }

    #[test]
    fn test_checkbox_basic() {
        let checkbox = CheckboxGroup::new("and...action", vec![option("A"), option("B")])
            .unwrap()
            .with_initial_options(vec![option("A")])
            .unwrap();
        let a = json!({"text": {"type": "plain_text", "text": "A"}, "value": "A"});
        let b = json!({"text": {"type": "plain_text", "text": "B"}, "value": "B"});
        assert_eq!(
            serde_json::to_value(&checkbox).unwrap(),
            json!({
                "type": "checkboxes",
                "action_id": "and...action",
                "options": [a, b],
                "initial_options": [a]
            })
        );
    }

    #[test]
    fn test_initial_options_must_be_members() {
        let checkbox = CheckboxGroup::new("a", vec![option("A")]).unwrap();
        assert!(checkbox.with_initial_options(vec![option("Z")]).is_err());
        let radio = RadioButtonGroup::new("a", vec![option("A")]).unwrap();
        assert!(radio.with_initial_option(option("Z")).is_err());
    }

    #[test]
    fn test_radio_basic() {
        let radio = RadioButtonGroup::new("radio_buttons", options(3))
            .unwrap()
            .with_initial_option(option("option_0"))
            .unwrap();
        let value = serde_json::to_value(&radio).unwrap();
        assert_eq!(value["type"], json!("radio_buttons"));
        assert_eq!(value["initial_option"]["value"], json!("option_0"));
    }

    #[test]
    fn test_option_count_bounds() {
        assert!(OverflowMenu::new("overflow", options(5)).is_ok());
        assert!(OverflowMenu::new("overflow", options(6)).is_err());
        assert!(OverflowMenu::new("overflow", vec![]).is_err());
        assert!(RadioButtonGroup::new("radio", options(10)).is_ok());
        assert!(RadioButtonGroup::new("radio", options(11)).is_err());
        assert!(CheckboxGroup::new("checkboxes", options(10)).is_ok());
        assert!(CheckboxGroup::new("checkboxes", options(11)).is_err());
    }
}
