//! # slackblocks
//!
//! Typed, validated builders for Slack's Block Kit.
//!
//! ## Overview
//!
//! Every Block Kit structure is a Rust value that checks the platform's
//! documented constraints when it is built and renders to the exact JSON
//! shape the Slack API expects:
//!
//! - [`objects`] - Text, options, confirmation dialogs and other composition objects
//! - [`rich_text`] - Styled runs, mentions and rich text containers
//! - [`elements`] - Buttons, menus, pickers and inputs
//! - [`blocks`] - Section, actions, context, input and the other layout blocks
//! - [`messages`], [`views`], [`attachments`] - Top-level containers
//!
//! Constructors and `with_*` refinements return [`Result`], failing with a
//! [`ValidationError`] that names the offending field. Rendering through
//! [`Render`] never re-validates.
//!
//! ## Quick Start
//!
//! ```rust
//! use slackblocks::{Button, Message, Render, SectionBlock};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let block = SectionBlock::new("Deploy *v1.2.0* to production?")?
//!     .with_accessory(Button::new("Deploy", "deploy")?)?;
//! let message = Message::new("#releases")?.with_block(block);
//! println!("{}", message.json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Block ids
//!
//! Blocks built without a `block_id` get a random UUID. Pass a
//! [`SequentialIdGenerator`] to `with_generated_block_id` for deterministic
//! output.

pub mod attachments;
pub mod blocks;
pub mod elements;
pub mod error;
pub mod ids;
pub mod messages;
pub mod objects;
pub mod render;
pub mod rich_text;
pub mod validation;
pub mod views;

pub use attachments::{Attachment, Color, ColorLike, Field};
pub use blocks::{
    ActionsBlock, Block, BlockType, Component, ContextBlock, DividerBlock, FileBlock, HeaderBlock,
    ImageBlock, InputBlock, RichTextBlock, SectionBlock, TableBlock, TableCell, VideoBlock,
};
pub use elements::{
    Button, ChannelMultiSelectMenu, ChannelSelectMenu, CheckboxGroup, ConversationMultiSelectMenu,
    ConversationSelectMenu, DatePicker, DateTimePicker, Element, ElementType, EmailInput,
    ExternalMultiSelectMenu, ExternalSelectMenu, FileInput, Image, ImageSource, InitialOption,
    NumberInput, NumberValue, OverflowMenu, PlainTextInput, RadioButtonGroup, RichTextInput,
    StaticMultiSelectMenu, StaticSelectMenu, TimePicker, UrlInput, UserMultiSelectMenu,
    UserSelectMenu, WorkflowButton,
};
pub use error::{Result, ValidationError};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use messages::{Message, MessageResponse, ResponseType, WebhookMessage};
pub use objects::{
    ButtonStyle, ColumnAlignment, ColumnSettings, CompositionObject, CompositionObjectType, Confirm,
    ConfirmationDialogue, ConversationFilter, ConversationType, DispatchActionConfiguration,
    InputParameter, OptionGroup, RawText, SelectOption, SlackFile, Text, TextLike, TextType,
    Trigger, TriggerAction, Workflow,
};
pub use render::Render;
pub use rich_text::{
    ListType, MentionStyle, RichText, RichTextChannel, RichTextCodeBlock, RichTextElement,
    RichTextEmoji, RichTextLink, RichTextList, RichTextObject, RichTextQuote, RichTextSection,
    RichTextUser, RichTextUserGroup, TextStyle,
};
pub use views::{HomeTabView, Modal, ModalView};
