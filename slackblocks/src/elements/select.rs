//! Select menus, single and multi.
//!
//! Static menus draw their choices from either `options` or `option_groups`;
//! the other menus are populated by Slack (users, conversations, channels) or
//! by the app's options load URL (external).

use super::placeholder;
use crate::error::{Result, ValidationError};
use crate::objects::{
    ConfirmationDialogue, ConversationFilter, OptionGroup, SelectOption, Text, TextLike,
};
use crate::render::kind;
use crate::validation::{Bounds, reject, validate_action_id, validate_int, validate_list};
use serde::Serialize;

/// Maximum number of options or option groups in a static menu
pub const MAX_MENU_OPTIONS: usize = 100;

/// An initial selection for a static menu: a plain option when the menu uses
/// `options`, a group when it uses `option_groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InitialOption {
    Option(SelectOption),
    Group(OptionGroup),
}

impl From<SelectOption> for InitialOption {
    fn from(value: SelectOption) -> Self {
        InitialOption::Option(value)
    }
}

impl From<OptionGroup> for InitialOption {
    fn from(value: OptionGroup) -> Self {
        InitialOption::Group(value)
    }
}

/// Validate the `options`/`option_groups` pair of a static menu.
fn static_sources(
    options: Option<Vec<SelectOption>>,
    option_groups: Option<Vec<OptionGroup>>,
) -> Result<(Option<Vec<SelectOption>>, Option<Vec<OptionGroup>>)> {
    let bounds = Bounds::between(1, MAX_MENU_OPTIONS);
    match (options, option_groups) {
        (Some(_), Some(_)) => Err(reject(ValidationError::conflict("options", "option_groups"))),
        (None, None) => Err(reject(ValidationError::missing_one_of(&["options", "option_groups"]))),
        (Some(options), None) => {
            let options = validate_list(options, "options", bounds)?;
            ensure_plain_labels(&options, "options")?;
            Ok((Some(options), None))
        }
        (None, Some(groups)) => {
            let groups = validate_list(groups, "option_groups", bounds)?;
            for group in &groups {
                ensure_plain_labels(group.options(), "option_groups")?;
            }
            Ok((None, Some(groups)))
        }
    }
}

fn ensure_plain_labels(options: &[SelectOption], field: &str) -> Result<()> {
    match options.iter().find(|option| !option.text().is_plain()) {
        Some(option) => Err(reject(ValidationError::invalid_kind(
            field,
            option.text().text_type().as_str(),
            "select menu options must use plain_text labels",
        ))),
        None => Ok(()),
    }
}

/// Check that an initial selection matches the menu's active source.
fn ensure_matching_source(initial: &InitialOption, uses_groups: bool, field: &str) -> Result<()> {
    match (initial, uses_groups) {
        (InitialOption::Option(_), false) | (InitialOption::Group(_), true) => Ok(()),
        (InitialOption::Option(_), true) => Err(reject(ValidationError::invalid_kind(
            field,
            "option",
            "the menu uses `option_groups`",
        ))),
        (InitialOption::Group(_), false) => Err(reject(ValidationError::invalid_kind(
            field,
            "option_group",
            "the menu uses `options`",
        ))),
    }
}

fn validate_max_selected_items(max_selected_items: u32) -> Result<u32> {
    validate_int(Some(max_selected_items.into()), "max_selected_items", Some(1), None, false)?;
    Ok(max_selected_items)
}

/// `with_confirm`, `with_focus_on_load` and `with_placeholder` for menus.
macro_rules! menu_setters {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn with_confirm(mut self, confirm: ConfirmationDialogue) -> Self {
                    self.confirm = Some(confirm);
                    self
                }

                pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
                    self.focus_on_load = Some(focus_on_load);
                    self
                }

                /// Plain text of at most 150 characters shown before a selection.
                pub fn with_placeholder(mut self, text: impl Into<TextLike>) -> Result<Self> {
                    self.placeholder = Some(placeholder(text)?);
                    Ok(self)
                }
            }
        )*
    };
}

/// `with_max_selected_items` for multi-select menus.
macro_rules! multi_setters {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                /// Cap the number of selections (at least 1).
                pub fn with_max_selected_items(mut self, max_selected_items: u32) -> Result<Self> {
                    self.max_selected_items =
                        Some(validate_max_selected_items(max_selected_items)?);
                    Ok(self)
                }
            }
        )*
    };
}

/// A single-choice menu over app-defined options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticSelectMenu {
    #[serde(rename = "type")]
    kind: kind::StaticSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<SelectOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_groups: Option<Vec<OptionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<InitialOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl StaticSelectMenu {
    /// Exactly one of `options` and `option_groups` must be given.
    pub fn new(
        action_id: impl Into<String>,
        options: Option<Vec<SelectOption>>,
        option_groups: Option<Vec<OptionGroup>>,
    ) -> Result<Self> {
        let action_id = validate_action_id(action_id)?;
        let (options, option_groups) = static_sources(options, option_groups)?;
        Ok(Self {
            kind: kind::StaticSelect,
            action_id,
            options,
            option_groups,
            initial_option: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_option(mut self, initial_option: impl Into<InitialOption>) -> Result<Self> {
        let initial_option = initial_option.into();
        ensure_matching_source(&initial_option, self.option_groups.is_some(), "initial_option")?;
        self.initial_option = Some(initial_option);
        Ok(self)
    }
}

/// A multiple-choice menu over app-defined options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticMultiSelectMenu {
    #[serde(rename = "type")]
    kind: kind::MultiStaticSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<SelectOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option_groups: Option<Vec<OptionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_options: Option<Vec<InitialOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl StaticMultiSelectMenu {
    /// Exactly one of `options` and `option_groups` must be given.
    pub fn new(
        action_id: impl Into<String>,
        options: Option<Vec<SelectOption>>,
        option_groups: Option<Vec<OptionGroup>>,
    ) -> Result<Self> {
        let action_id = validate_action_id(action_id)?;
        let (options, option_groups) = static_sources(options, option_groups)?;
        Ok(Self {
            kind: kind::MultiStaticSelect,
            action_id,
            options,
            option_groups,
            initial_options: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_options(mut self, initial_options: Vec<InitialOption>) -> Result<Self> {
        let initial_options = validate_list(
            initial_options,
            "initial_options",
            Bounds::between(1, MAX_MENU_OPTIONS),
        )?;
        let uses_groups = self.option_groups.is_some();
        for initial in &initial_options {
            ensure_matching_source(initial, uses_groups, "initial_options")?;
        }
        self.initial_options = Some(initial_options);
        Ok(self)
    }
}

/// A single-choice menu whose options are loaded from the app's options URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalSelectMenu {
    #[serde(rename = "type")]
    kind: kind::ExternalSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl ExternalSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::ExternalSelect,
            action_id: validate_action_id(action_id)?,
            initial_option: None,
            min_query_length: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_option(mut self, initial_option: SelectOption) -> Self {
        self.initial_option = Some(initial_option);
        self
    }

    /// Characters typed before Slack queries the options URL.
    pub fn with_min_query_length(mut self, min_query_length: u32) -> Self {
        self.min_query_length = Some(min_query_length);
        self
    }
}

/// A multiple-choice menu whose options are loaded from the app's options URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalMultiSelectMenu {
    #[serde(rename = "type")]
    kind: kind::MultiExternalSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_options: Option<Vec<SelectOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl ExternalMultiSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::MultiExternalSelect,
            action_id: validate_action_id(action_id)?,
            min_query_length: None,
            initial_options: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_min_query_length(mut self, min_query_length: u32) -> Self {
        self.min_query_length = Some(min_query_length);
        self
    }

    pub fn with_initial_options(mut self, initial_options: Vec<SelectOption>) -> Result<Self> {
        self.initial_options =
            Some(validate_list(
                initial_options,
                "initial_options",
                Bounds::between(1, MAX_MENU_OPTIONS),
            )?);
        Ok(self)
    }
}

/// A menu listing the workspace's users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSelectMenu {
    #[serde(rename = "type")]
    kind: kind::UsersSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl UserSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::UsersSelect,
            action_id: validate_action_id(action_id)?,
            initial_user: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_user(mut self, user_id: impl Into<String>) -> Self {
        self.initial_user = Some(user_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMultiSelectMenu {
    #[serde(rename = "type")]
    kind: kind::MultiUsersSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl UserMultiSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::MultiUsersSelect,
            action_id: validate_action_id(action_id)?,
            initial_users: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_users<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_users = Some(user_ids.into_iter().map(Into::into).collect());
        self
    }
}

/// A menu listing conversations (channels, DMs and group DMs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSelectMenu {
    #[serde(rename = "type")]
    kind: kind::ConversationsSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_conversation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_to_current_conversation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_url_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl ConversationSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::ConversationsSelect,
            action_id: validate_action_id(action_id)?,
            initial_conversation: None,
            default_to_current_conversation: None,
            confirm: None,
            response_url_enabled: None,
            filter: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.initial_conversation = Some(conversation_id.into());
        self
    }

    pub fn with_default_to_current_conversation(mut self, default: bool) -> Self {
        self.default_to_current_conversation = Some(default);
        self
    }

    /// Only honoured in modals containing an input block.
    pub fn with_response_url_enabled(mut self, enabled: bool) -> Self {
        self.response_url_enabled = Some(enabled);
        self
    }

    pub fn with_filter(mut self, filter: ConversationFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationMultiSelectMenu {
    #[serde(rename = "type")]
    kind: kind::MultiConversationsSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_conversations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_to_current_conversation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl ConversationMultiSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::MultiConversationsSelect,
            action_id: validate_action_id(action_id)?,
            initial_conversations: None,
            default_to_current_conversation: None,
            confirm: None,
            max_selected_items: None,
            filter: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_conversations<I, S>(mut self, conversation_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_conversations = Some(conversation_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default_to_current_conversation(mut self, default: bool) -> Self {
        self.default_to_current_conversation = Some(default);
        self
    }

    pub fn with_filter(mut self, filter: ConversationFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// A menu listing public channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSelectMenu {
    #[serde(rename = "type")]
    kind: kind::ChannelsSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_url_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl ChannelSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::ChannelsSelect,
            action_id: validate_action_id(action_id)?,
            initial_channel: None,
            confirm: None,
            response_url_enabled: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.initial_channel = Some(channel_id.into());
        self
    }

    pub fn with_response_url_enabled(mut self, enabled: bool) -> Self {
        self.response_url_enabled = Some(enabled);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMultiSelectMenu {
    #[serde(rename = "type")]
    kind: kind::MultiChannelsSelect,
    action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

impl ChannelMultiSelectMenu {
    pub fn new(action_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: kind::MultiChannelsSelect,
            action_id: validate_action_id(action_id)?,
            initial_channels: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
        })
    }

    pub fn with_initial_channels<I, S>(mut self, channel_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_channels = Some(channel_ids.into_iter().map(Into::into).collect());
        self
    }
}

menu_setters!(
    StaticSelectMenu,
    StaticMultiSelectMenu,
    ExternalSelectMenu,
    ExternalMultiSelectMenu,
    UserSelectMenu,
    UserMultiSelectMenu,
    ConversationSelectMenu,
    ConversationMultiSelectMenu,
    ChannelSelectMenu,
    ChannelMultiSelectMenu,
);

multi_setters!(
    StaticMultiSelectMenu,
    ExternalMultiSelectMenu,
    UserMultiSelectMenu,
    ConversationMultiSelectMenu,
    ChannelMultiSelectMenu,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn option(label: &str) -> SelectOption {
        SelectOption::new(Text::plain(label).unwrap(), label).unwrap()
    }

    fn three_options() -> Vec<SelectOption> {
        vec![option("A"), option("B"), option("C")]
    }

    #[test]
    fn test_select_menu_static() {
        let menu = StaticSelectMenu::new("static_select", Some(three_options()), None)
            .unwrap()
            .with_placeholder("Select one item")
            .unwrap();
        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value["type"], json!("static_select"));
        assert_eq!(value["options"].as_array().unwrap().len(), 3);
        assert_eq!(value["placeholder"], json!({"type": "plain_text", "text": "Select one item"}));
        assert!(value.get("option_groups").is_none());
    }

    #[test]
    fn test_static_select_source_exclusivity() {
        let group = OptionGroup::new("Group", three_options()).unwrap();
        assert!(StaticSelectMenu::new("s", Some(three_options()), Some(vec![group])).is_err());
        assert!(StaticSelectMenu::new("s", None, None).is_err());
        assert!(StaticMultiSelectMenu::new("s", None, None).is_err());
    }

    #[test]
    fn test_static_select_rejects_markdown_labels() {
        let mut options = three_options();
        options.push(SelectOption::new(Text::markdown("C").unwrap(), "X").unwrap());
        assert!(StaticSelectMenu::new("s", Some(options.clone()), None).is_err());
        assert!(StaticMultiSelectMenu::new("s", Some(options), None).is_err());
    }

    #[test]
    fn test_initial_option_matches_source() {
        let menu = StaticSelectMenu::new("s", Some(three_options()), None).unwrap();
        assert!(menu.clone().with_initial_option(option("A")).is_ok());
        let group = OptionGroup::new("Group", vec![option("A")]).unwrap();
        assert!(menu.with_initial_option(group.clone()).is_err());

        let grouped = StaticMultiSelectMenu::new("s", None, Some(vec![group.clone()])).unwrap();
        assert!(grouped.clone().with_initial_options(vec![group.into()]).is_ok());
        assert!(grouped.with_initial_options(vec![option("A").into()]).is_err());
    }

    #[test]
    fn test_menu_option_bound() {
        let options: Vec<SelectOption> = (0..101).map(|i| option(&i.to_string())).collect();
        assert!(StaticSelectMenu::new("s", Some(options[..100].to_vec()), None).is_ok());
        assert!(StaticSelectMenu::new("s", Some(options), None).is_err());
    }

    #[test]
    fn test_max_selected_items() {
        let menu = UserMultiSelectMenu::new("multi_users_select").unwrap();
        assert!(menu.clone().with_max_selected_items(0).is_err());
        let menu = menu.with_max_selected_items(1).unwrap();
        assert_eq!(serde_json::to_value(&menu).unwrap()["max_selected_items"], json!(1));
    }

    #[test]
    fn test_multi_select_conversation_key() {
        let menu = ConversationMultiSelectMenu::new("multi_conversations_select")
            .unwrap()
            .with_initial_conversations(["C123"])
            .with_placeholder(Text::plain("Select conversations").unwrap())
            .unwrap();
        assert_eq!(
            serde_json::to_value(&menu).unwrap(),
            json!({
                "type": "multi_conversations_select",
                "action_id": "multi_conversations_select",
                "initial_conversations": ["C123"],
                "placeholder": {"type": "plain_text", "text": "Select conversations"}
            })
        );
    }

    #[test]
    fn test_select_menu_external() {
        let menu = ExternalSelectMenu::new("external_select")
            .unwrap()
            .with_placeholder("Select one item")
            .unwrap()
            .with_min_query_length(4);
        assert_eq!(
            serde_json::to_value(&menu).unwrap(),
            json!({
                "type": "external_select",
                "action_id": "external_select",
                "min_query_length": 4,
                "placeholder": {"type": "plain_text", "text": "Select one item"}
            })
        );
    }

    #[test]
    fn test_select_menu_channel() {
        let menu = ChannelSelectMenu::new("channels_select")
            .unwrap()
            .with_placeholder("Select a channel")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&menu).unwrap(),
            json!({
                "type": "channels_select",
                "action_id": "channels_select",
                "placeholder": {"type": "plain_text", "text": "Select a channel"}
            })
        );
    }
}
