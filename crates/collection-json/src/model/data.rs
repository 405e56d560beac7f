//! Data fields: the named values carried by items, queries and templates.

use serde_json::Value;

use crate::model::Named;

/// A single named field (`{"name", "value"?, "prompt"?}`).
///
/// `value` may hold any JSON value. `None` means the field has no value and
/// nothing is written for it; an empty string or zero is a real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    pub name: String,
    pub value: Option<Value>,
    /// Human-readable label for the field.
    pub prompt: Option<String>,
}

impl Data {
    /// Creates a field with no value and no prompt.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            prompt: None,
        }
    }

    /// Sets the value. JSON `null` clears it.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        let value: Value = value.into();
        self.value = Some(value).filter(|v| !v.is_null());
        self
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Returns the value as a string slice, if it is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }
}

impl Named for Data {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
