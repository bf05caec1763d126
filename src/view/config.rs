use serde::{Deserialize, Serialize};

pub const DEFAULT_STACK_NAME: &str = "stackView";

/// Construction options for a `ViewStack`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct StackConfig {
    /// Number of items to reserve room for up front.
    pub initial_capacity: usize,
    /// Tag used in log lines.
    pub name: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            name: DEFAULT_STACK_NAME.to_string(),
        }
    }
}

impl StackConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
