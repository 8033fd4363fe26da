//! Streaming types.

use serde::{Deserialize, Serialize};

use super::generation::FinishReason;
use super::message::ToolCall;
use super::usage::Usage;

/// A delta emitted during streaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStreamDelta {
    /// The incremental text chunk.
    pub text: String,
    /// Event type.
    pub event_type: StreamEventType,
    /// Finish reason (only on the final delta).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    /// Usage (typically only on the final delta).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Tool calls assembled over the stream, carried on the final delta.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

impl TextStreamDelta {
    /// An incremental text chunk.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            event_type: StreamEventType::TextDelta,
            finish_reason: None,
            usage: None,
            tool_calls: Vec::new(),
        }
    }

    /// The final delta of a round.
    pub fn done(finish_reason: FinishReason, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            text: String::new(),
            event_type: StreamEventType::Done,
            finish_reason: Some(finish_reason),
            usage: None,
            tool_calls,
        }
    }
}

/// Type of stream event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreamEventType {
    /// Incremental text content.
    TextDelta,
    /// Tool call being built.
    ToolCallDelta,
    /// Stream started.
    Start,
    /// Stream finished.
    Done,
    /// Error during stream.
    Error,
}

/// Final result after consuming a text stream.
#[derive(Debug, Clone)]
pub struct StreamTextResult {
    /// Full accumulated text.
    pub text: String,
    /// Token usage.
    pub usage: Usage,
    /// Finish reason.
    pub finish_reason: Option<FinishReason>,
}
