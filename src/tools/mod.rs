//! Tool system for function calling.

pub mod arguments;
pub mod tasks;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use tasks::TaskToolkit;
pub use tool::{FunctionTool, Tool, ToolExecutionContext};
pub use types::ToolParameters;
