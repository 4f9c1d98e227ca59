//! Blocks that hold elements: actions, context and input.

use super::Component;
use crate::elements::Element;
use crate::error::{Result, ValidationError};
use crate::ids::default_block_id;
use crate::objects::{CompositionObject, Text, TextLike, plain_text};
use crate::render::kind;
use crate::validation::{Bounds, reject, validate_list};
use serde::Serialize;

/// Up to 25 interactive elements laid out in a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionsBlock {
    #[serde(rename = "type")]
    kind: kind::Actions,
    pub(super) block_id: String,
    elements: Vec<Component>,
}

impl ActionsBlock {
    pub fn new(elements: Vec<Component>) -> Result<Self> {
        Ok(Self {
            kind: kind::Actions,
            block_id: default_block_id(),
            elements: validate_list(elements, "elements", Bounds::at_most(25))?,
        })
    }
}

/// Small supporting text and images, up to ten items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextBlock {
    #[serde(rename = "type")]
    kind: kind::Context,
    pub(super) block_id: String,
    elements: Vec<Component>,
}

impl ContextBlock {
    /// Every item must be a text object or an image element.
    pub fn new(elements: Vec<Component>) -> Result<Self> {
        let elements = validate_list(elements, "elements", Bounds::at_most(10))?;
        for element in &elements {
            match element {
                Component::Object(CompositionObject::Text(_))
                | Component::Element(Element::Image(_)) => {}
                other => {
                    return Err(reject(ValidationError::invalid_kind(
                        "elements",
                        other.kind_name(),
                        "context blocks only hold text and image elements",
                    )));
                }
            }
        }
        Ok(Self { kind: kind::Context, block_id: default_block_id(), elements })
    }
}

/// Collects input from a user with a single input element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBlock {
    #[serde(rename = "type")]
    kind: kind::Input,
    pub(super) block_id: String,
    label: Text,
    element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_action: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    optional: Option<bool>,
}

impl InputBlock {
    /// `label` is forced to plain text of at most 2000 characters. Buttons,
    /// images, overflow menus and workflow buttons are rejected.
    pub fn new(label: impl Into<TextLike>, element: impl Into<Element>) -> Result<Self> {
        let label = plain_text(label, "label", 2000)?;
        let element = element.into();
        let element_kind = element.kind();
        if !element_kind.is_input() {
            return Err(reject(ValidationError::invalid_kind(
                "element",
                element_kind.as_str(),
                "not an input element",
            )));
        }
        Ok(Self {
            kind: kind::Input,
            block_id: default_block_id(),
            label,
            element,
            hint: None,
            dispatch_action: None,
            optional: None,
        })
    }

    pub fn with_hint(mut self, hint: impl Into<TextLike>) -> Result<Self> {
        self.hint = Some(plain_text(hint, "hint", 2000)?);
        Ok(self)
    }

    /// Send `block_actions` payloads as the element changes.
    pub fn with_dispatch_action(mut self, dispatch_action: bool) -> Self {
        self.dispatch_action = Some(dispatch_action);
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }
}
