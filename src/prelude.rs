//! Convenience re-exports for common use.

pub use crate::agent::{ConversationThread, TaskAgent};
pub use crate::config::AgentConfig;
pub use crate::error::{Result, TaskwrightError};
pub use crate::provider::ModelProvider;
pub use crate::store::{MemoryTaskStore, Task, TaskStore};
pub use crate::tools::{FunctionTool, TaskToolkit, Tool, ToolArguments, ToolParameters};
pub use crate::types::{
    ChatMessage, FinishReason, GenerationSettings, ModelMessage, Role, StreamEventType,
    TextStreamDelta, Usage,
};
