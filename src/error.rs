//! Error types for Taskwright.

use thiserror::Error;

/// Primary error type for all Taskwright operations.
///
/// Entity-not-found is deliberately absent: a missing task is a normal
/// tool result rendered as text, so the model can read and react to it.
#[derive(Error, Debug)]
pub enum TaskwrightError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Tool '{tool_name}' failed: {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl TaskwrightError {
    /// Create an API error from a status code and message body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TaskwrightError>;
