//! Property-based tests for construction bounds and rendering.
//!
//! Every bounded field accepts values up to and including its limit and
//! rejects anything beyond it. Rendering a valid node is repeatable and never
//! emits `null`.

use proptest::prelude::*;
use serde_json::Value;
use slackblocks::{
    Attachment, Button, HeaderBlock, ModalView, OverflowMenu, RadioButtonGroup, Render,
    SectionBlock, SelectOption, SequentialIdGenerator, Text,
};

fn arb_label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _-]{1,75}".prop_map(|s| s)
}

fn arb_hex6() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{6}".prop_map(|s| s)
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

fn options(n: usize) -> Vec<SelectOption> {
    (0..n).map(|i| SelectOption::plain(format!("Option {}", i), i.to_string()).unwrap()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_text_length_bound(len in 1usize..=3100) {
        let result = Text::plain("x".repeat(len));
        prop_assert_eq!(result.is_ok(), len <= 3000);
    }

    #[test]
    fn prop_header_length_bound(len in 1usize..=200) {
        let result = HeaderBlock::new("h".repeat(len));
        prop_assert_eq!(result.is_ok(), len <= 150);
    }

    #[test]
    fn prop_modal_title_bound(len in 1usize..=40) {
        prop_assert_eq!(ModalView::new("t".repeat(len)).is_ok(), len <= 24);
    }

    #[test]
    fn prop_block_id_bound(len in 0usize..=300) {
        let result = SectionBlock::new("text").unwrap().with_block_id("b".repeat(len));
        prop_assert_eq!(result.is_ok(), (1..=255).contains(&len));
    }

    #[test]
    fn prop_overflow_and_radio_sizes(n in 1usize..=12) {
        prop_assert_eq!(OverflowMenu::new("overflow", options(n)).is_ok(), n <= 5);
        prop_assert_eq!(RadioButtonGroup::new("radio", options(n)).is_ok(), n <= 10);
    }

    #[test]
    fn prop_button_label_bound(len in 1usize..=100) {
        prop_assert_eq!(Button::new("b".repeat(len), "action").is_ok(), len <= 75);
    }

    #[test]
    fn prop_six_digit_hex_is_normalized(hex in arb_hex6()) {
        let attachment = Attachment::new().with_color(hex.clone()).unwrap();
        let expected = format!("#{}", hex);
        prop_assert_eq!(attachment.color(), Some(expected.as_str()));
    }

    #[test]
    fn prop_render_is_repeatable(label in arb_label(), seed in 0usize..4) {
        let generator = SequentialIdGenerator::new(format!("block_{}_", seed));
        let block = SectionBlock::new(label.as_str())
            .unwrap()
            .with_generated_block_id(&generator)
            .with_accessory(Button::new(label.as_str(), "action").unwrap())
            .unwrap();
        let first = block.json().unwrap();
        let second = block.json().unwrap();
        prop_assert_eq!(&first, &second);
        let value = block.render().unwrap();
        prop_assert!(!contains_null(&value));
        let expected = format!("block_{}_1", seed);
        prop_assert_eq!(value["block_id"].as_str(), Some(expected.as_str()));
    }
}
