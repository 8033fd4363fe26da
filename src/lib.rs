//! Taskwright: a conversational task-management agent.
//!
//! Exposes task CRUD operations as schema-described functions an LLM can
//! invoke mid-conversation, and a [`TaskAgent`](agent::TaskAgent) that owns
//! one Azure OpenAI chat connection plus one conversation thread, streams
//! the model's reply with tool calls resolved transparently in between, and
//! returns the aggregated text.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskwright::agent::TaskAgent;
//! use taskwright::store::MemoryTaskStore;
//!
//! # async fn example() -> taskwright::error::Result<()> {
//! let store = Arc::new(MemoryTaskStore::new());
//! let mut agent = TaskAgent::new(store);
//! let reply = agent.process_message("Add a task to buy milk").await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod provider;
pub mod store;
pub mod tools;
pub mod types;
