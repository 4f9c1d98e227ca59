//! Rich text: formatting richer than markdown, usable only inside a
//! [`RichTextBlock`](crate::blocks::RichTextBlock) or a table cell.
//!
//! Primitives ([`RichText`], mentions, [`RichTextEmoji`], [`RichTextLink`])
//! go inside containers ([`RichTextSection`], [`RichTextList`],
//! [`RichTextQuote`], [`RichTextCodeBlock`]).

mod elements;
mod objects;

pub use elements::{
    MentionStyle, RichText, RichTextChannel, RichTextElement, RichTextEmoji, RichTextLink,
    RichTextUser, RichTextUserGroup, TextStyle,
};
pub use objects::{
    ListType, RichTextCodeBlock, RichTextList, RichTextObject, RichTextQuote, RichTextSection,
};

use crate::render::impl_render;

impl_render!(
    RichText,
    RichTextChannel,
    RichTextUser,
    RichTextUserGroup,
    RichTextEmoji,
    RichTextLink,
    RichTextElement,
    RichTextSection,
    RichTextList,
    RichTextQuote,
    RichTextCodeBlock,
    RichTextObject,
);
