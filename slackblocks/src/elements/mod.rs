//! Interactive elements: buttons, menus, pickers and inputs.
//!
//! Every element renders as `{"type": ..., "action_id": ..., ...}` with unset
//! optional fields left out.

mod button;
mod choice;
mod image;
mod input;
mod picker;
mod select;

pub use crate::objects::ButtonStyle;
pub use button::{Button, WorkflowButton};
pub use choice::{CheckboxGroup, OverflowMenu, RadioButtonGroup};
pub use image::{Image, ImageSource};
pub use input::{
    EmailInput, FileInput, NumberInput, NumberValue, PlainTextInput, RichTextInput, UrlInput,
};
pub use picker::{DatePicker, DateTimePicker, TimePicker};
pub use select::{
    ChannelMultiSelectMenu, ChannelSelectMenu, ConversationMultiSelectMenu, ConversationSelectMenu,
    ExternalMultiSelectMenu, ExternalSelectMenu, InitialOption, MAX_MENU_OPTIONS,
    StaticMultiSelectMenu, StaticSelectMenu, UserMultiSelectMenu, UserSelectMenu,
};

use crate::error::Result;
use crate::objects::{Text, TextLike, plain_text};
use crate::render::impl_render;
use serde::Serialize;

/// Placeholders are plain text of at most 150 characters.
pub(crate) fn placeholder(value: impl Into<TextLike>) -> Result<Text> {
    plain_text(value, "placeholder", 150)
}

/// Identifies the kind of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Button,
    Checkboxes,
    DatePicker,
    DateTimePicker,
    EmailInput,
    FileInput,
    Image,
    MultiStaticSelect,
    MultiExternalSelect,
    MultiUsersSelect,
    MultiConversationsSelect,
    MultiChannelsSelect,
    NumberInput,
    Overflow,
    PlainTextInput,
    RadioButtons,
    RichTextInput,
    StaticSelect,
    ExternalSelect,
    UsersSelect,
    ConversationsSelect,
    ChannelsSelect,
    TimePicker,
    UrlInput,
    WorkflowButton,
}

impl ElementType {
    /// The `type` string Slack expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Checkboxes => "checkboxes",
            ElementType::DatePicker => "datepicker",
            ElementType::DateTimePicker => "datetimepicker",
            ElementType::EmailInput => "email_text_input",
            ElementType::FileInput => "file_input",
            ElementType::Image => "image",
            ElementType::MultiStaticSelect => "multi_static_select",
            ElementType::MultiExternalSelect => "multi_external_select",
            ElementType::MultiUsersSelect => "multi_users_select",
            ElementType::MultiConversationsSelect => "multi_conversations_select",
            ElementType::MultiChannelsSelect => "multi_channels_select",
            ElementType::NumberInput => "number_input",
            ElementType::Overflow => "overflow",
            ElementType::PlainTextInput => "plain_text_input",
            ElementType::RadioButtons => "radio_buttons",
            ElementType::RichTextInput => "rich_text_input",
            ElementType::StaticSelect => "static_select",
            ElementType::ExternalSelect => "external_select",
            ElementType::UsersSelect => "users_select",
            ElementType::ConversationsSelect => "conversations_select",
            ElementType::ChannelsSelect => "channels_select",
            ElementType::TimePicker => "timepicker",
            ElementType::UrlInput => "url_text_input",
            ElementType::WorkflowButton => "workflow_button",
        }
    }

    /// Elements an input block accepts.
    pub fn is_input(&self) -> bool {
        !matches!(
            self,
            ElementType::Button
                | ElementType::Image
                | ElementType::Overflow
                | ElementType::WorkflowButton
        )
    }

    /// Elements a section block accepts as its accessory.
    pub fn is_section_accessory(&self) -> bool {
        !matches!(
            self,
            ElementType::EmailInput
                | ElementType::FileInput
                | ElementType::NumberInput
                | ElementType::PlainTextInput
                | ElementType::RichTextInput
                | ElementType::UrlInput
        )
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! elements {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Any interactive element.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Element {
            $($variant($ty),)*
        }

        impl Element {
            pub fn kind(&self) -> ElementType {
                match self {
                    $(Element::$variant(_) => ElementType::$variant,)*
                }
            }
        }

        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::$variant(value)
                }
            }
        )*

        impl_render!(Element, $($ty,)*);
    };
}

elements! {
    Button(Button),
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    DateTimePicker(DateTimePicker),
    EmailInput(EmailInput),
    FileInput(FileInput),
    Image(Image),
    MultiStaticSelect(StaticMultiSelectMenu),
    MultiExternalSelect(ExternalMultiSelectMenu),
    MultiUsersSelect(UserMultiSelectMenu),
    MultiConversationsSelect(ConversationMultiSelectMenu),
    MultiChannelsSelect(ChannelMultiSelectMenu),
    NumberInput(NumberInput),
    Overflow(OverflowMenu),
    PlainTextInput(PlainTextInput),
    RadioButtons(RadioButtonGroup),
    RichTextInput(RichTextInput),
    StaticSelect(StaticSelectMenu),
    ExternalSelect(ExternalSelectMenu),
    UsersSelect(UserSelectMenu),
    ConversationsSelect(ConversationSelectMenu),
    ChannelsSelect(ChannelSelectMenu),
    TimePicker(TimePicker),
    UrlInput(UrlInput),
    WorkflowButton(WorkflowButton),
}
