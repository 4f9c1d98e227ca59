//! Free-form input elements, usable inside input blocks.

use super::placeholder;
use crate::error::{Result, ValidationError};
use crate::objects::{DispatchActionConfiguration, Text, TextLike};
use crate::render::kind;
use crate::rich_text::RichTextObject;
use crate::validation::{
    Bounds, reject, validate_action_id, validate_int, validate_list, validate_optional_action_id,
};
use serde::Serialize;

/// Single or multi-line plain text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainTextInput {
    #[serde(rename = "type")]
    kind: kind::PlainTextInput,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_action_config: Option<DispatchActionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl PlainTextInput {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::PlainTextInput,
            action_id: validate_action_id(action_id)?,
            initial_value: None,
            multiline: None,
            min_length: None,
            max_length: None,
            dispatch_action_config: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = Some(initial_value.into());
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }

    /// Minimum input length, 0-3000 and no greater than `max_length`.
    pub fn with_min_length(mut self, min_length: u32) -> Result<Self> {
        validate_int(Some(min_length.into()), "min_length", Some(0), Some(3000), false)?;
        self.min_length = Some(min_length);
        self.check_length_order()?;
        Ok(self)
    }

    /// Maximum input length, 1-3000 and no less than `min_length`.
    pub fn with_max_length(mut self, max_length: u32) -> Result<Self> {
        validate_int(Some(max_length.into()), "max_length", Some(1), Some(3000), false)?;
        self.max_length = Some(max_length);
        self.check_length_order()?;
        Ok(self)
    }

    fn check_length_order(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(reject(ValidationError::OutOfRange {
                    field: "min_length".to_string(),
                    value: min.to_string(),
                    reason: format!("greater than `max_length` ({})", max),
                }));
            }
        }
        Ok(())
    }

    pub fn with_dispatch_action_config(mut self, config: DispatchActionConfiguration) -> Self {
        self.dispatch_action_config = Some(config);
        self
    }

    pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = Some(focus_on_load);
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<TextLike>) -> Result<Self> {
        self.placeholder = Some(placeholder(text)?);
        Ok(self)
    }
}

macro_rules! text_like_input {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(rename = "type")]
            kind: kind::$kind,
            action_id: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            initial_value: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            dispatch_action_config: Option<DispatchActionConfiguration>,
            #[serde(skip_serializing_if = "Option::is_none")]
            focus_on_load: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            placeholder: Option<Text>,
        }

        impl $name {
            pub fn new(action_id: impl Into<String>) -> Result<Self> {
                Ok(Self {
                    kind: kind::$kind,
                    action_id: validate_action_id(action_id)?,
                    initial_value: None,
                    dispatch_action_config: None,
                    focus_on_load: None,
                    placeholder: None,
                })
            }

            pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
                self.initial_value = Some(initial_value.into());
                self
            }

            pub fn with_dispatch_action_config(
                mut self,
                config: DispatchActionConfiguration,
            ) -> Self {
                self.dispatch_action_config = Some(config);
                self
            }

            pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
                self.focus_on_load = Some(focus_on_load);
                self
            }

            pub fn with_placeholder(mut self, text: impl Into<TextLike>) -> Result<Self> {
                self.placeholder = Some(placeholder(text)?);
                Ok(self)
            }
        }
    };
}

text_like_input!(
    /// An email address field.
    EmailInput,
    EmailInput
);
text_like_input!(
    /// A URL field.
    UrlInput,
    UrlInput
);

/// A number accepted by [`NumberInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumberValue {
    Int(i64),
    Decimal(f64),
}

impl NumberValue {
    fn as_f64(self) -> f64 {
        match self {
            NumberValue::Int(n) => n as f64,
            NumberValue::Decimal(n) => n,
        }
    }

    /// Integers compare exactly; f64 is only used when a decimal is involved.
    fn greater_than(self, other: NumberValue) -> bool {
        match (self, other) {
            (NumberValue::Int(a), NumberValue::Int(b)) => a > b,
            (a, b) => a.as_f64() > b.as_f64(),
        }
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberValue::Int(n) => write!(f, "{}", n),
            NumberValue::Decimal(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        NumberValue::Int(value)
    }
}

impl From<i32> for NumberValue {
    fn from(value: i32) -> Self {
        NumberValue::Int(value.into())
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        NumberValue::Decimal(value)
    }
}

/// A numeric field. Decimals are only accepted when `is_decimal_allowed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberInput {
    #[serde(rename = "type")]
    kind: kind::NumberInput,
    is_decimal_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<NumberValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_value: Option<NumberValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_value: Option<NumberValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_action_config: Option<DispatchActionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl NumberInput {
    pub fn new(is_decimal_allowed: bool) -> Self {
        Self {
            kind: kind::NumberInput,
            is_decimal_allowed,
            action_id: None,
            initial_value: None,
            min_value: None,
            max_value: None,
            dispatch_action_config: None,
            focus_on_load: None,
            placeholder: None,
        }
    }

    pub fn with_action_id(mut self, action_id: impl Into<String>) -> Result<Self> {
        self.action_id = validate_optional_action_id(Some(action_id.into()))?;
        Ok(self)
    }

    pub fn with_initial_value(mut self, value: impl Into<NumberValue>) -> Result<Self> {
        self.initial_value = Some(self.check_number(value.into(), "initial_value")?);
        Ok(self)
    }

    pub fn with_min_value(mut self, value: impl Into<NumberValue>) -> Result<Self> {
        self.min_value = Some(self.check_number(value.into(), "min_value")?);
        self.check_range()?;
        Ok(self)
    }

    pub fn with_max_value(mut self, value: impl Into<NumberValue>) -> Result<Self> {
        self.max_value = Some(self.check_number(value.into(), "max_value")?);
        self.check_range()?;
        Ok(self)
    }

    fn check_number(&self, value: NumberValue, field: &str) -> Result<NumberValue> {
        if let NumberValue::Decimal(n) = value {
            if !self.is_decimal_allowed {
                return Err(reject(ValidationError::invalid(
                    field,
                    format!("{} is not an integer and `is_decimal_allowed` is false", n),
                )));
            }
            if !n.is_finite() {
                return Err(reject(ValidationError::invalid(field, "must be a finite number")));
            }
        }
        Ok(value)
    }

    fn check_range(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min.greater_than(max) {
                return Err(reject(ValidationError::OutOfRange {
                    field: "min_value".to_string(),
                    value: min.to_string(),
                    reason: format!("greater than `max_value` ({})", max),
                }));
            }
        }
        Ok(())
    }

    pub fn with_dispatch_action_config(mut self, config: DispatchActionConfiguration) -> Self {
        self.dispatch_action_config = Some(config);
        self
    }

    pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = Some(focus_on_load);
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<TextLike>) -> Result<Self> {
        self.placeholder = Some(placeholder(text)?);
        Ok(self)
    }
}

/// Initial content of a rich text input, rendered as a bare `rich_text` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RichTextValue {
    #[serde(rename = "type")]
    kind: kind::RichText,
    elements: Vec<RichTextObject>,
}

/// A field that accepts formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextInput {
    #[serde(rename = "type")]
    kind: kind::RichTextInput,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<RichTextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_action_config: Option<DispatchActionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl RichTextInput {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::RichTextInput,
            action_id: validate_action_id(action_id)?,
            initial_value: None,
            dispatch_action_config: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_value(mut self, elements: Vec<RichTextObject>) -> Result<Self> {
        let elements = validate_list(elements, "initial_value", Bounds::at_least(1))?;
        self.initial_value = Some(RichTextValue { kind: kind::RichText, elements });
        Ok(self)
    }

    pub fn with_dispatch_action_config(mut self, config: DispatchActionConfiguration) -> Self {
        self.dispatch_action_config = Some(config);
        self
    }

    pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = Some(focus_on_load);
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<TextLike>) -> Result<Self> {
        self.placeholder = Some(placeholder(text)?);
        Ok(self)
    }
}

/// A file upload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInput {
    #[serde(rename = "type")]
    kind: kind::FileInput,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    filetypes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_files: Option<u32>,
}

impl FileInput {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::FileInput,
            action_id: validate_action_id(action_id)?,
            filetypes: None,
            max_files: None,
        })
    }

    /// Accepted file extensions, e.g. `["jpg", "png"]`.
    pub fn with_filetypes<I, S>(mut self, filetypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filetypes = Some(filetypes.into_iter().map(Into::into).collect());
        self
    }

    /// Maximum number of files, 1-10.
    pub fn with_max_files(mut self, max_files: u32) -> Result<Self> {
        validate_int(Some(max_files.into()), "max_files", Some(1), Some(10), false)?;
        self.max_files = Some(max_files);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::{RichText, RichTextSection};
    use serde_json::json;

    #[test]
    fn test_plaintext_input_basic() {
        let input = PlainTextInput::new("plaintext_input")
            .unwrap()
            .with_placeholder("Enter your plain text")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "type": "plain_text_input",
                "action_id": "plaintext_input",
                "placeholder": {"type": "plain_text", "text": "Enter your plain text"}
            })
        );
    }

    #[test]
    fn test_plaintext_input_lengths() {
        let input = PlainTextInput::new("input").unwrap();
        assert!(input.clone().with_min_length(0).is_ok());
        assert!(input.clone().with_min_length(3000).is_ok());
        assert!(input.clone().with_min_length(3001).is_err());
        assert!(input.clone().with_max_length(0).is_err());
        assert!(input.clone().with_max_length(3001).is_err());
        assert!(input.clone().with_max_length(10).unwrap().with_min_length(11).is_err());
        assert!(input.with_min_length(5).unwrap().with_max_length(4).is_err());
    }

    #[test]
    fn test_email_and_url_inputs() {
        let email =
            EmailInput::new("email_input").unwrap().with_placeholder("Enter your email").unwrap();
        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({
                "type": "email_text_input",
                "action_id": "email_input",
                "placeholder": {"type": "plain_text", "text": "Enter your email"}
            })
        );
        let url = UrlInput::new("url_text_input").unwrap();
        assert_eq!(
            serde_json::to_value(&url).unwrap(),
            json!({"type": "url_text_input", "action_id": "url_text_input"})
        );
    }

    #[test]
    fn test_number_input_basic() {
        let input = NumberInput::new(false).with_action_id("number_input").unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "type": "number_input",
                "is_decimal_allowed": false,
                "action_id": "number_input"
            })
        );
    }

    #[test]
    fn test_number_input_rejects_decimals() {
        assert!(NumberInput::new(false).with_min_value(1.5).is_err());
        assert!(NumberInput::new(false).with_initial_value(0.5).is_err());
        assert!(NumberInput::new(true).with_max_value(1.5).is_ok());
    }

    #[test]
    fn test_number_input_range() {
        assert!(NumberInput::new(false).with_min_value(5).unwrap().with_max_value(4).is_err());
        assert!(NumberInput::new(false).with_min_value(0).unwrap().with_max_value(0).is_ok());
        let input = NumberInput::new(true).with_min_value(0.5).unwrap().with_max_value(10).unwrap();
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["min_value"], json!(0.5));
        assert_eq!(value["max_value"], json!(10));
    }

    #[test]
    fn test_number_input_range_compares_large_integers_exactly() {
        let above = 9_007_199_254_740_993_i64;
        let below = 9_007_199_254_740_992_i64;
        let err = NumberInput::new(false)
            .with_min_value(above)
            .unwrap()
            .with_max_value(below)
            .unwrap_err();
        assert_eq!(err.field(), "min_value");
        let input = NumberInput::new(false).with_min_value(below).unwrap();
        assert!(input.with_max_value(above).is_ok());
    }

    #[test]
    fn test_rich_text_input_initial_value() {
        let input = RichTextInput::new("action_id")
            .unwrap()
            .with_initial_value(vec![
                RichTextSection::new(vec![RichText::new("I'm rich").into()]).unwrap().into(),
            ])
            .unwrap()
            .with_focus_on_load(false)
            .with_placeholder("Hello")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "type": "rich_text_input",
                "action_id": "action_id",
                "initial_value": {
                    "type": "rich_text",
                    "elements": [
                        {
                            "type": "rich_text_section",
                            "elements": [{"type": "text", "text": "I'm rich"}]
                        }
                    ]
                },
                "focus_on_load": false,
                "placeholder": {"type": "plain_text", "text": "Hello"}
            })
        );
    }

    #[test]
    fn test_file_input() {
        let input = FileInput::new("file_input")
            .unwrap()
            .with_filetypes(["jpg", "png"])
            .with_max_files(10)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "type": "file_input",
                "action_id": "file_input",
                "filetypes": ["jpg", "png"],
                "max_files": 10
            })
        );
        assert!(FileInput::new("file_input").unwrap().with_max_files(0).is_err());
        assert!(FileInput::new("file_input").unwrap().with_max_files(11).is_err());
    }
}
