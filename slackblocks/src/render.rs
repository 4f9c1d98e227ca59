//! Rendering nodes to Block Kit JSON.
//!
//! Every node derives `Serialize`; [`Render`] adds the value/string entry
//! points. Field declaration order is the output key order, so `json()` is
//! stable across runs.

use serde::Serialize;
use serde_json::Value;

/// Pure conversion of a validated node into Block Kit JSON.
pub trait Render: Serialize {
    /// Render to a JSON value tree.
    fn render(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Render to a pretty-printed JSON string (four-space indent).
    fn json(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Declare zero-sized markers that serialize as a fixed `"type"` string.
///
/// A node stores its marker in a `#[serde(rename = "type")]` field, so it
/// renders its own tag whether it is serialized alone or inside a parent.
macro_rules! kind_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl $name {
                pub const TAG: &'static str = $tag;
            }

            impl serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str($tag)
                }
            }
        )*
    };
}

/// Implement [`Render`] for a list of node types.
macro_rules! impl_render {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::render::Render for $ty {})*
    };
}

pub(crate) use impl_render;

pub(crate) mod kind {
    kind_tags! {
        // blocks
        Actions => "actions",
        Context => "context",
        Divider => "divider",
        File => "file",
        Header => "header",
        Image => "image",
        Input => "input",
        RichText => "rich_text",
        Section => "section",
        Table => "table",
        Video => "video",
        // elements
        Button => "button",
        Checkboxes => "checkboxes",
        DatePicker => "datepicker",
        DateTimePicker => "datetimepicker",
        EmailInput => "email_text_input",
        FileInput => "file_input",
        MultiStaticSelect => "multi_static_select",
        MultiExternalSelect => "multi_external_select",
        MultiUsersSelect => "multi_users_select",
        MultiConversationsSelect => "multi_conversations_select",
        MultiChannelsSelect => "multi_channels_select",
        NumberInput => "number_input",
        Overflow => "overflow",
        PlainTextInput => "plain_text_input",
        RadioButtons => "radio_buttons",
        RichTextInput => "rich_text_input",
        StaticSelect => "static_select",
        ExternalSelect => "external_select",
        UsersSelect => "users_select",
        ConversationsSelect => "conversations_select",
        ChannelsSelect => "channels_select",
        TimePicker => "timepicker",
        UrlInput => "url_text_input",
        WorkflowButton => "workflow_button",
        // rich text
        RichTextSection => "rich_text_section",
        RichTextList => "rich_text_list",
        RichTextPreformatted => "rich_text_preformatted",
        RichTextQuote => "rich_text_quote",
        Text => "text",
        Channel => "channel",
        User => "user",
        UserGroup => "user_group",
        Emoji => "emoji",
        Link => "link",
        // table cells
        RawText => "raw_text",
        // views
        Modal => "modal",
        Home => "home",
    }
}
