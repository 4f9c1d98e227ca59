//! Composition objects: the lowest-level values used inside blocks and
//! elements.
//!
//! Apart from [`Text`] and [`RawText`] these render as plain objects without
//! a `type` key.

mod confirm;
mod file;
mod filter;
mod option;
mod table;
mod text;
mod workflow;

pub use confirm::{ButtonStyle, Confirm, ConfirmationDialogue};
pub use file::SlackFile;
pub use filter::{ConversationFilter, ConversationType, DispatchActionConfiguration, TriggerAction};
pub use option::{OptionGroup, SelectOption};
pub use table::{ColumnAlignment, ColumnSettings, RawText};
pub use text::{MAX_TEXT_LENGTH, Text, TextLike, TextType};
pub use workflow::{InputParameter, Trigger, Workflow};

pub(crate) use text::{any_text, plain_text};

use crate::render::impl_render;
use serde::Serialize;

/// Identifies the kind of a [`CompositionObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionObjectType {
    Confirm,
    Dispatch,
    Filter,
    InputParameter,
    Option,
    OptionGroup,
    SlackFile,
    Text,
    Trigger,
    Workflow,
}

impl CompositionObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositionObjectType::Confirm => "confirm",
            CompositionObjectType::Dispatch => "dispatch",
            CompositionObjectType::Filter => "filter",
            CompositionObjectType::InputParameter => "input_parameter",
            CompositionObjectType::Option => "option",
            CompositionObjectType::OptionGroup => "option_group",
            CompositionObjectType::SlackFile => "file",
            CompositionObjectType::Text => "text",
            CompositionObjectType::Trigger => "trigger",
            CompositionObjectType::Workflow => "workflow",
        }
    }
}

/// Any composition object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompositionObject {
    Confirm(ConfirmationDialogue),
    Dispatch(DispatchActionConfiguration),
    Filter(ConversationFilter),
    InputParameter(InputParameter),
    Option(SelectOption),
    OptionGroup(OptionGroup),
    SlackFile(SlackFile),
    Text(Text),
    Trigger(Trigger),
    Workflow(Workflow),
}

impl CompositionObject {
    pub fn kind(&self) -> CompositionObjectType {
        match self {
            CompositionObject::Confirm(_) => CompositionObjectType::Confirm,
            CompositionObject::Dispatch(_) => CompositionObjectType::Dispatch,
            CompositionObject::Filter(_) => CompositionObjectType::Filter,
            CompositionObject::InputParameter(_) => CompositionObjectType::InputParameter,
            CompositionObject::Option(_) => CompositionObjectType::Option,
            CompositionObject::OptionGroup(_) => CompositionObjectType::OptionGroup,
            CompositionObject::SlackFile(_) => CompositionObjectType::SlackFile,
            CompositionObject::Text(_) => CompositionObjectType::Text,
            CompositionObject::Trigger(_) => CompositionObjectType::Trigger,
            CompositionObject::Workflow(_) => CompositionObjectType::Workflow,
        }
    }
}

macro_rules! object_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for CompositionObject {
                fn from(value: $ty) -> Self {
                    CompositionObject::$variant(value)
                }
            }
        )*
    };
}

object_from! {
    Confirm(ConfirmationDialogue),
    Dispatch(DispatchActionConfiguration),
    Filter(ConversationFilter),
    InputParameter(InputParameter),
    Option(SelectOption),
    OptionGroup(OptionGroup),
    SlackFile(SlackFile),
    Text(Text),
    Trigger(Trigger),
    Workflow(Workflow),
}

impl_render!(
    CompositionObject,
    ConfirmationDialogue,
    DispatchActionConfiguration,
    ConversationFilter,
    InputParameter,
    SelectOption,
    OptionGroup,
    SlackFile,
    Text,
    Trigger,
    Workflow,
    ColumnSettings,
    RawText,
);
