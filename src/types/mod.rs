//! Core types shared across the crate.

pub mod generation;
pub mod message;
pub mod stream;
pub mod usage;

pub use generation::{FinishReason, GenerationSettings, TurnResult};
pub use message::{ChatMessage, ContentPart, ModelMessage, Role, ToolCall, ToolResult};
pub use stream::{StreamEventType, StreamTextResult, TextStreamDelta};
pub use usage::Usage;
