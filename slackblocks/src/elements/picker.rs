//! Date and time pickers.

use super::placeholder;
use crate::error::{Result, ValidationError};
use crate::objects::{ConfirmationDialogue, Text, TextLike};
use crate::render::kind;
use crate::validation::{reject, validate_action_id};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A calendar picker. `initial_date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    #[serde(rename = "type")]
    kind: kind::DatePicker,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl DatePicker {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::DatePicker,
            action_id: validate_action_id(action_id)?,
            initial_date: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_date(mut self, initial_date: impl AsRef<str>) -> Result<Self> {
        let date = NaiveDate::parse_from_str(initial_date.as_ref(), DATE_FORMAT).map_err(|e| {
            reject(ValidationError::invalid("initial_date", format!("expected YYYY-MM-DD: {}", e)))
        })?;
        self.initial_date = Some(date.format(DATE_FORMAT).to_string());
        Ok(self)
    }

    /// Set the initial date from a [`NaiveDate`].
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialogue) -> Self {
        self.confirm = Some(confirm);
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

/// A clock picker. `initial_time` is `HH:mm` in 24-hour format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePicker {
    #[serde(rename = "type")]
    kind: kind::TimePicker,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
}

impl TimePicker {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::TimePicker,
            action_id: validate_action_id(action_id)?,
            initial_time: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            timezone: None,
        })
    }

    pub fn with_initial_time(mut self, initial_time: impl AsRef<str>) -> Result<Self> {
        let time = NaiveTime::parse_from_str(initial_time.as_ref(), TIME_FORMAT).map_err(|e| {
            reject(ValidationError::invalid("initial_time", format!("expected HH:mm: {}", e)))
        })?;
        self.initial_time = Some(time.format(TIME_FORMAT).to_string());
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

    pub fn with_placeholder(mut self, text: impl Into<TextLike>) -> Result<Self> {
        self.placeholder = Some(placeholder(text)?);
        Ok(self)
    }

    /// IANA timezone name, e.g. `Australia/Sydney`.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// A combined date and time picker. The initial value is a UNIX timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimePicker {
    #[serde(rename = "type")]
    kind: kind::DateTimePicker,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_date_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
}

impl DateTimePicker {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::DateTimePicker,
            action_id: validate_action_id(action_id)?,
            initial_date_time: None,
            confirm: None,
            focus_on_load: None,
        })
    }

    pub fn with_initial_date_time(mut self, timestamp: i64) -> Self {
        self.initial_date_time = Some(timestamp);
        self
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_datepicker_basic() {
        let picker = DatePicker::new("datepicker")
            .unwrap()
            .with_initial_date("1970-01-01")
            .unwrap()
            .with_placeholder("Pick a date")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&picker).unwrap(),
            json!({
                "type": "datepicker",
                "action_id": "datepicker",
                "initial_date": "1970-01-01",
                "placeholder": {"type": "plain_text", "text": "Pick a date"}
            })
        );
    }

    #[test]
    fn test_datepicker_rejects_bad_dates() {
        let picker = DatePicker::new("datepicker").unwrap();
        assert!(picker.clone().with_initial_date("1970-13-01").is_err());
        assert!(picker.with_initial_date("01/01/1970").is_err());
    }

    #[test]
    fn test_timepicker_basic() {
        let picker = TimePicker::new("timepicker")
            .unwrap()
            .with_timezone("Australia/Sydney")
            .with_initial_time("12:00")
            .unwrap()
            .with_placeholder("Select your time")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&picker).unwrap(),
            json!({
                "type": "timepicker",
                "action_id": "timepicker",
                "initial_time": "12:00",
                "placeholder": {"type": "plain_text", "text": "Select your time"},
                "timezone": "Australia/Sydney"
            })
        );
        assert!(TimePicker::new("t").unwrap().with_initial_time("25:00").is_err());
    }

    #[test]
    fn test_datetime_picker_key() {
        let picker =
            DateTimePicker::new("datetime_picker").unwrap().with_initial_date_time(1628633830);
        assert_eq!(
            serde_json::to_value(&picker).unwrap(),
            json!({
                "type": "datetimepicker",
                "action_id": "datetime_picker",
                "initial_date_time": 1628633830
            })
        );
    }

    #[test]
    fn test_placeholder_bound() {
        let picker = DatePicker::new("datepicker").unwrap();
        assert!(picker.clone().with_placeholder("p".repeat(150)).is_ok());
        assert!(picker.with_placeholder("p".repeat(151)).is_err());
    }
}
