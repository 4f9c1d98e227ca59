//! Conversation filters and dispatch action configuration.

use crate::error::{Result, ValidationError};
use crate::validation::{Bounds, reject, validate_list};
use serde::Serialize;
use std::str::FromStr;

/// Kinds of conversation a conversations menu may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    Im,
    Mpim,
    Private,
    Public,
}

impl FromStr for ConversationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "im" => Ok(ConversationType::Im),
            "mpim" => Ok(ConversationType::Mpim),
            "private" => Ok(ConversationType::Private),
            "public" => Ok(ConversationType::Public),
            other => Err(reject(ValidationError::not_allowed(
                "include",
                other,
                &["im", "mpim", "private", "public"],
            ))),
        }
    }
}

/// Narrows the conversations offered by a conversations select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    include: Option<Vec<ConversationType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_external_shared_channels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_bot_users: Option<bool>,
}

impl ConversationFilter {
    /// At least one argument must be given.
    pub fn new(
        include: Option<Vec<ConversationType>>,
        exclude_external_shared_channels: Option<bool>,
        exclude_bot_users: Option<bool>,
    ) -> Result<Self> {
        let include = include.filter(|types| !types.is_empty());
        if include.is_none()
            && exclude_external_shared_channels.is_none()
            && exclude_bot_users.is_none()
        {
            return Err(reject(ValidationError::missing_one_of(&[
                "include",
                "exclude_external_shared_channels",
                "exclude_bot_users",
            ])));
        }
        Ok(Self { include, exclude_external_shared_channels, exclude_bot_users })
    }

    /// Filter on conversation kinds given by name (`im`, `mpim`, `private`,
    /// `public`).
    pub fn including<I, S>(include: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let include = include
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<ConversationType>>>()?;
        Self::new(Some(include), None, None)
    }

    pub fn with_exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = Some(exclude);
        self
    }

    pub fn with_exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = Some(exclude);
        self
    }
}

/// Interactions that make a plain-text input dispatch `block_actions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    OnEnterPressed,
    OnCharacterEntered,
}

impl FromStr for TriggerAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "on_enter_pressed" => Ok(TriggerAction::OnEnterPressed),
            "on_character_entered" => Ok(TriggerAction::OnCharacterEntered),
            other => Err(reject(ValidationError::not_allowed(
                "trigger_actions_on",
                other,
                &["on_enter_pressed", "on_character_entered"],
            ))),
        }
    }
}

/// Determines when a plain-text input returns a `block_actions` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfiguration {
    trigger_actions_on: Vec<TriggerAction>,
}

impl DispatchActionConfiguration {
    /// Duplicates are dropped, first occurrence wins.
    pub fn new(triggers: Vec<TriggerAction>) -> Result<Self> {
        let mut trigger_actions_on = Vec::with_capacity(triggers.len());
        for trigger in triggers {
            if !trigger_actions_on.contains(&trigger) {
                trigger_actions_on.push(trigger);
            }
        }
        let trigger_actions_on =
            validate_list(trigger_actions_on, "trigger_actions_on", Bounds::between(1, 2))?;
        Ok(Self { trigger_actions_on })
    }

    /// Parse trigger names, failing on anything outside the allowed pair.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let triggers = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<TriggerAction>>>()?;
        Self::new(triggers)
    }

    pub fn triggers(&self) -> &[TriggerAction] {
        &self.trigger_actions_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_requires_an_argument() {
        assert!(ConversationFilter::new(None, None, None).is_err());
        assert!(ConversationFilter::new(Some(vec![]), None, None).is_err());
    }

    #[test]
    fn test_filter_renders_set_fields() {
        let filter =
            ConversationFilter::including(["public", "im"]).unwrap().with_exclude_bot_users(true);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"include": ["public", "im"], "exclude_bot_users": true})
        );
    }

    #[test]
    fn test_filter_rejects_unknown_type() {
        assert!(ConversationFilter::including(["group"]).is_err());
    }

    #[test]
    fn test_dispatch_deduplicates() {
        let config = DispatchActionConfiguration::from_names([
            "on_enter_pressed",
            "on_enter_pressed",
            "on_character_entered",
        ])
        .unwrap();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"trigger_actions_on": ["on_enter_pressed", "on_character_entered"]})
        );
    }

    #[test]
    fn test_dispatch_rejects_invalid() {
        assert!(DispatchActionConfiguration::from_names(["on_click"]).is_err());
        assert!(DispatchActionConfiguration::new(vec![]).is_err());
    }
}
