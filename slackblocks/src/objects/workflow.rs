//! Workflow triggers used by workflow buttons.

use serde::Serialize;

/// A named value passed to a workflow's input parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputParameter {
    name: String,
    value: String,
}

impl InputParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// A link trigger that starts a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    customizable_input_parameters: Vec<InputParameter>,
}

impl Trigger {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), customizable_input_parameters: Vec::new() }
    }

    pub fn with_input_parameters(mut self, parameters: Vec<InputParameter>) -> Self {
        self.customizable_input_parameters = parameters;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    trigger: Trigger,
}

impl Workflow {
    pub fn new(trigger: Trigger) -> Self {
        Self { trigger }
    }
}
