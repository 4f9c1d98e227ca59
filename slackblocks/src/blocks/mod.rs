//! Layout blocks, the top-level units of a message, modal or home tab.
//!
//! Every block carries a `block_id`. Blocks built without one get a random
//! UUID; use `with_block_id` for a fixed id or `with_generated_block_id` to
//! draw one from an [`IdGenerator`].

mod interactive;
mod layout;
mod media;
mod rich_text;
mod section;
mod table;

pub use interactive::{ActionsBlock, ContextBlock, InputBlock};
pub use layout::{DividerBlock, HeaderBlock};
pub use media::{FileBlock, ImageBlock, VideoBlock};
pub use rich_text::RichTextBlock;
pub use section::SectionBlock;
pub use table::{MAX_TABLE_COLUMNS, MAX_TABLE_ROWS, TableBlock, TableCell};

use crate::elements::{Button, Element, Image};
use crate::error::Result;
use crate::ids::{IdGenerator, generate_block_id};
use crate::objects::{CompositionObject, SelectOption, Text};
use crate::render::impl_render;
use crate::validation::validate_block_id;
use serde::Serialize;

/// A child of an actions or context block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Element(Element),
    Object(CompositionObject),
}

impl Component {
    /// The rendered `type` of the child, or the object name for untyped
    /// composition objects.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Component::Element(element) => element.kind().as_str(),
            Component::Object(object) => object.kind().as_str(),
        }
    }
}

impl From<Element> for Component {
    fn from(value: Element) -> Self {
        Component::Element(value)
    }
}

impl From<CompositionObject> for Component {
    fn from(value: CompositionObject) -> Self {
        Component::Object(value)
    }
}

impl From<Button> for Component {
    fn from(value: Button) -> Self {
        Component::Element(value.into())
    }
}

impl From<Image> for Component {
    fn from(value: Image) -> Self {
        Component::Element(value.into())
    }
}

impl From<Text> for Component {
    fn from(value: Text) -> Self {
        Component::Object(value.into())
    }
}

impl From<SelectOption> for Component {
    fn from(value: SelectOption) -> Self {
        Component::Object(value.into())
    }
}

/// Identifies the kind of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Actions,
    Context,
    Divider,
    File,
    Header,
    Image,
    Input,
    RichText,
    Section,
    Table,
    Video,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Actions => "actions",
            BlockType::Context => "context",
            BlockType::Divider => "divider",
            BlockType::File => "file",
            BlockType::Header => "header",
            BlockType::Image => "image",
            BlockType::Input => "input",
            BlockType::RichText => "rich_text",
            BlockType::Section => "section",
            BlockType::Table => "table",
            BlockType::Video => "video",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! blocks {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Any layout block.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Block {
            $($variant($ty),)*
        }

        impl Block {
            pub fn kind(&self) -> BlockType {
                match self {
                    $(Block::$variant(_) => BlockType::$variant,)*
                }
            }

            pub fn block_id(&self) -> &str {
                match self {
                    $(Block::$variant(block) => &block.block_id,)*
                }
            }
        }

        $(
            impl From<$ty> for Block {
                fn from(value: $ty) -> Self {
                    Block::$variant(value)
                }
            }

            impl $ty {
                /// Replace the block id (1 to 255 characters).
                pub fn with_block_id(mut self, block_id: impl Into<String>) -> Result<Self> {
                    self.block_id = validate_block_id(block_id)?;
                    Ok(self)
                }

                /// Replace the block id with one drawn from `generator`.
                pub fn with_generated_block_id(mut self, generator: &dyn IdGenerator) -> Self {
                    self.block_id = generate_block_id(generator);
                    self
                }

                pub fn block_id(&self) -> &str {
                    &self.block_id
                }
            }
        )*

        impl_render!(Block, $($ty,)*);
    };
}

blocks! {
    Actions(ActionsBlock),
    Context(ContextBlock),
    Divider(DividerBlock),
    File(FileBlock),
    Header(HeaderBlock),
    Image(ImageBlock),
    Input(InputBlock),
    RichText(RichTextBlock),
    Section(SectionBlock),
    Table(TableBlock),
    Video(VideoBlock),
}

impl_render!(Component);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Button, DatePicker, PlainTextInput};
    use crate::error::ValidationError;
    use crate::ids::SequentialIdGenerator;
    use crate::objects::{ColumnAlignment, ColumnSettings, TextLike};
    use crate::render::Render;
    use crate::rich_text::{RichText, RichTextSection};
    use serde_json::json;

    #[test]
    fn test_section_block() {
        let block =
            SectionBlock::new("Hello, world!").unwrap().with_block_id("fake_block_id").unwrap();
        assert_eq!(
            block.render().unwrap(),
            json!({
                "type": "section",
                "block_id": "fake_block_id",
                "text": {"type": "mrkdwn", "text": "Hello, world!"}
            })
        );
    }

    #[test]
    fn test_section_requires_text_or_fields() {
        let err = SectionBlock::from_parts(None, None).unwrap_err();
        assert!(matches!(err, ValidationError::MissingOneOf { .. }));
    }

    #[test]
    fn test_section_fields_bounds() {
        let ten: Vec<TextLike> = (0..10).map(|i| format!("field {}", i).into()).collect();
        assert!(SectionBlock::from_fields(ten).is_ok());
        let eleven: Vec<TextLike> = (0..11).map(|i| format!("field {}", i).into()).collect();
        assert!(matches!(
            SectionBlock::from_fields(eleven).unwrap_err(),
            ValidationError::TooMany { max: 10, .. }
        ));
    }

    #[test]
    fn test_section_rejects_input_accessory() {
        let block = SectionBlock::new("pick").unwrap();
        let err = block.with_accessory(PlainTextInput::new("input").unwrap()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidKind { .. }));
    }

    #[test]
    fn test_section_accessory_renders_last() {
        let block = SectionBlock::new("pick")
            .unwrap()
            .with_block_id("b")
            .unwrap()
            .with_accessory(DatePicker::new("date").unwrap())
            .unwrap();
        let json = block.json().unwrap();
        let text_at = json.find("\"text\"").unwrap();
        let accessory_at = json.find("\"accessory\"").unwrap();
        assert!(text_at < accessory_at);
    }

    #[test]
    fn test_divider_block() {
        let block = DividerBlock::new().with_block_id("fake_block_id").unwrap();
        assert_eq!(
            block.render().unwrap(),
            json!({"type": "divider", "block_id": "fake_block_id"})
        );
    }

    #[test]
    fn test_block_id_bounds() {
        assert!(DividerBlock::new().with_block_id("a".repeat(255)).is_ok());
        assert!(DividerBlock::new().with_block_id("a".repeat(256)).is_err());
        assert!(DividerBlock::new().with_block_id("").is_err());
    }

    #[test]
    fn test_generated_block_id() {
        let generator = SequentialIdGenerator::new("block_");
        let first = DividerBlock::new().with_generated_block_id(&generator);
        let second = DividerBlock::new().with_generated_block_id(&generator);
        assert_eq!(first.block_id(), "block_1");
        assert_eq!(second.block_id(), "block_2");
    }

    #[test]
    fn test_default_block_id_is_uuid() {
        let block = Block::from(DividerBlock::new());
        assert_eq!(block.block_id().len(), 36);
        assert_eq!(block.kind(), BlockType::Divider);
    }

    #[test]
    fn test_header_is_forced_plain() {
        let block = HeaderBlock::new("Title").unwrap().with_block_id("h").unwrap();
        assert_eq!(
            block.render().unwrap(),
            json!({
                "type": "header",
                "block_id": "h",
                "text": {"type": "plain_text", "text": "Title"}
            })
        );
        assert!(HeaderBlock::new("a".repeat(150)).is_ok());
        assert!(HeaderBlock::new("a".repeat(151)).is_err());
    }

    #[test]
    fn test_option_inside_actions_renders_unchanged() {
        let option = SelectOption::new("Option", "value").unwrap();
        let alone = option.render().unwrap();
        let block = ActionsBlock::new(vec![option.into()]).unwrap().with_block_id("a").unwrap();
        let value = block.render().unwrap();
        assert_eq!(value["elements"][0], alone);
    }

    #[test]
    fn test_actions_bounds() {
        let button = || Component::from(Button::new("b", "button").unwrap());
        assert!(ActionsBlock::new((0..25).map(|_| button()).collect()).is_ok());
        assert!(ActionsBlock::new((0..26).map(|_| button()).collect()).is_err());
    }

    #[test]
    fn test_context_rejects_button() {
        let err = ContextBlock::new(vec![Button::new("b", "button").unwrap().into()]).unwrap_err();
        match err {
            ValidationError::InvalidKind { kind, .. } => assert_eq!(kind, "button"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_context_accepts_text_and_image() {
        let block = ContextBlock::new(vec![
            Text::markdown("*hi*").unwrap().into(),
            Image::new("https://example.com/a.png", "a").unwrap().into(),
        ])
        .unwrap()
        .with_block_id("c")
        .unwrap();
        assert_eq!(
            block.render().unwrap(),
            json!({
                "type": "context",
                "block_id": "c",
                "elements": [
                    {"type": "mrkdwn", "text": "*hi*"},
                    {"type": "image", "image_url": "https://example.com/a.png", "alt_text": "a"}
                ]
            })
        );
    }

    #[test]
    fn test_input_block() {
        let block = InputBlock::new("Name", PlainTextInput::new("name").unwrap())
            .unwrap()
            .with_block_id("i")
            .unwrap()
            .with_hint("Your full name")
            .unwrap()
            .with_optional(false);
        assert_eq!(
            block.render().unwrap(),
            json!({
                "type": "input",
                "block_id": "i",
                "label": {"type": "plain_text", "text": "Name"},
                "element": {"type": "plain_text_input", "action_id": "name"},
                "hint": {"type": "plain_text", "text": "Your full name"},
                "optional": false
            })
        );
    }

    #[test]
    fn test_input_block_rejects_button() {
        let err = InputBlock::new("Go", Button::new("Go", "go").unwrap()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidKind { .. }));
    }

    #[test]
    fn test_image_block_title() {
        let block = ImageBlock::new("https://example.com/a.png", "alt")
            .unwrap()
            .with_block_id("img")
            .unwrap()
            .with_title("A picture")
            .unwrap();
        assert_eq!(
            block.render().unwrap(),
            json!({
                "type": "image",
                "block_id": "img",
                "image_url": "https://example.com/a.png",
                "alt_text": "alt",
                "title": {"type": "plain_text", "text": "A picture"}
            })
        );
    }

    #[test]
    fn test_video_block_bounds() {
        let video =
            || VideoBlock::new("alt", "title", "https://e.com/t.png", "https://e.com/v").unwrap();
        assert!(video().with_author_name("a".repeat(50)).is_ok());
        assert!(video().with_author_name("a".repeat(51)).is_err());
        assert!(VideoBlock::new("alt", "a".repeat(201), "t", "v").is_err());
    }

    #[test]
    fn test_table_block() {
        let rich = RichTextBlock::new(vec![
            RichTextSection::new(vec![RichText::new("bold").bold(true).into()]).unwrap().into(),
        ])
        .unwrap()
        .with_block_id("cell")
        .unwrap();
        let block = TableBlock::new(vec![vec![TableCell::raw("Name").unwrap(), rich.into()]])
            .unwrap()
            .with_block_id("t")
            .unwrap()
            .with_column_settings(vec![ColumnSettings::new().with_align(ColumnAlignment::Right)])
            .unwrap();
        assert_eq!(
            block.render().unwrap(),
            json!({
                "type": "table",
                "block_id": "t",
                "rows": [[
                    {"type": "raw_text", "text": "Name"},
                    {
                        "type": "rich_text",
                        "block_id": "cell",
                        "elements": [{
                            "type": "rich_text_section",
                            "elements": [{"type": "text", "text": "bold", "style": {"bold": true}}]
                        }]
                    }
                ]],
                "column_settings": [{"align": "right"}]
            })
        );
    }

    #[test]
    fn test_table_bounds() {
        let row = |n: usize| {
            (0..n).map(|i| TableCell::raw(i.to_string()).unwrap()).collect::<Vec<_>>()
        };
        assert!(TableBlock::new(vec![row(20)]).is_ok());
        assert!(TableBlock::new(vec![row(21)]).is_err());
        assert!(TableBlock::new(vec![]).is_err());
        assert!(TableBlock::new((0..101).map(|_| row(1)).collect()).is_err());
    }
}
