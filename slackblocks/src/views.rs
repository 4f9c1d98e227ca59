//! Views: modals and the app home tab.

use crate::blocks::Block;
use crate::error::Result;
use crate::objects::{Text, TextLike, plain_text};
use crate::render::{impl_render, kind};
use crate::validation::{Bounds, MAX_ID_LENGTH, validate_list, validate_string};
use serde::Serialize;

pub const MAX_VIEW_BLOCKS: usize = 100;

/// Fields every view carries, rendered right after `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ViewBody {
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
}

impl ViewBody {
    fn new(blocks: Vec<Block>, bounds: Bounds) -> Result<Self> {
        Ok(Self {
            blocks: validate_list(blocks, "blocks", bounds)?,
            private_metadata: None,
            callback_id: None,
            external_id: None,
        })
    }
}

macro_rules! view_setters {
    ($($ty:ty),*) => {
        $(impl $ty {
            /// Opaque string (at most 3000 characters) echoed back in
            /// `view_submission` payloads.
            pub fn with_private_metadata(
                mut self,
                private_metadata: impl Into<String>,
            ) -> Result<Self> {
                self.body.private_metadata =
                    Some(validate_string(
                        private_metadata,
                        "private_metadata",
                        Bounds::between(1, 3000),
                    )?);
                Ok(self)
            }

            /// Identifies submissions of this view (at most 255 characters).
            pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Result<Self> {
                self.body.callback_id =
                    Some(validate_string(
                        callback_id,
                        "callback_id",
                        Bounds::between(1, MAX_ID_LENGTH),
                    )?);
                Ok(self)
            }

            /// Identifier unique among the views of a team.
            pub fn with_external_id(mut self, external_id: impl Into<String>) -> Result<Self> {
                self.body.external_id =
                    Some(validate_string(external_id, "external_id", Bounds::at_least(1))?);
                Ok(self)
            }

            pub fn blocks(&self) -> &[Block] {
                &self.body.blocks
            }
        })*
    };
}

/// A modal, opened with `views.open` or `views.push`.
///
/// `blocks` is always rendered, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    #[serde(rename = "type")]
    kind: kind::Modal,
    #[serde(flatten)]
    body: ViewBody,
    title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    close: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submit: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clear_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notify_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submit_disabled: Option<bool>,
}

pub type Modal = ModalView;

impl ModalView {
    /// `title` is forced to plain text of at most 24 characters.
    pub fn new(title: impl Into<TextLike>) -> Result<Self> {
        Ok(Self {
            kind: kind::Modal,
            body: ViewBody::new(Vec::new(), Bounds::NONE)?,
            title: plain_text(title, "title", 24)?,
            close: None,
            submit: None,
            clear_on_close: None,
            notify_on_close: None,
            submit_disabled: None,
        })
    }

    /// Replace the content (at most 100 blocks).
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Result<Self> {
        self.body.blocks = validate_list(blocks, "blocks", Bounds::at_most(MAX_VIEW_BLOCKS))?;
        Ok(self)
    }

    /// Label of the close button, plain text of at most 24 characters.
    pub fn with_close(mut self, close: impl Into<TextLike>) -> Result<Self> {
        self.close = Some(plain_text(close, "close", 24)?);
        Ok(self)
    }

    /// Label of the submit button, plain text of at most 24 characters.
    pub fn with_submit(mut self, submit: impl Into<TextLike>) -> Result<Self> {
        self.submit = Some(plain_text(submit, "submit", 24)?);
        Ok(self)
    }

    /// Clear the whole view stack when this modal closes.
    pub fn with_clear_on_close(mut self, clear_on_close: bool) -> Self {
        self.clear_on_close = Some(clear_on_close);
        self
    }

    /// Send a `view_closed` event when the modal closes.
    pub fn with_notify_on_close(mut self, notify_on_close: bool) -> Self {
        self.notify_on_close = Some(notify_on_close);
        self
    }

    pub fn with_submit_disabled(mut self, submit_disabled: bool) -> Self {
        self.submit_disabled = Some(submit_disabled);
        self
    }

    pub fn title(&self) -> &Text {
        &self.title
    }
}

/// The app home tab, published with `views.publish`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeTabView {
    #[serde(rename = "type")]
    kind: kind::Home,
    #[serde(flatten)]
    body: ViewBody,
}

impl HomeTabView {
    /// Requires 1 to 100 blocks.
    pub fn new(blocks: Vec<Block>) -> Result<Self> {
        let body = ViewBody::new(blocks, Bounds::between(1, MAX_VIEW_BLOCKS))?;
        Ok(Self { kind: kind::Home, body })
    }
}

view_setters!(ModalView, HomeTabView);

impl_render!(ModalView, HomeTabView);
