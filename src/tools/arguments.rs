//! Typed access to model-supplied tool arguments.

use serde::de::DeserializeOwned;

use crate::error::TaskwrightError;

/// Arguments the model supplied for a tool call, as parsed JSON.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// The raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Required string argument.
    pub fn get_str(&self, key: &str) -> Result<&str, TaskwrightError> {
        self.value.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
            TaskwrightError::InvalidArgument(format!("missing or non-string argument '{key}'"))
        })
    }

    /// Required integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64, TaskwrightError> {
        self.value.get(key).and_then(|v| v.as_i64()).ok_or_else(|| {
            TaskwrightError::InvalidArgument(format!("missing or non-integer argument '{key}'"))
        })
    }

    /// Required boolean argument.
    pub fn get_bool(&self, key: &str) -> Result<bool, TaskwrightError> {
        self.value.get(key).and_then(|v| v.as_bool()).ok_or_else(|| {
            TaskwrightError::InvalidArgument(format!("missing or non-boolean argument '{key}'"))
        })
    }

    /// Optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Optional integer argument.
    pub fn get_i64_opt(&self, key: &str) -> Option<i64> {
        self.value.get(key).and_then(|v| v.as_i64())
    }

    /// Optional boolean argument.
    pub fn get_bool_opt(&self, key: &str) -> Option<bool> {
        self.value.get(key).and_then(|v| v.as_bool())
    }

    /// Deserialize the whole argument object into a typed struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, TaskwrightError> {
        serde_json::from_value(self.value.clone()).map_err(Into::into)
    }
}
