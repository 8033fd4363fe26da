//! The task-management agent over a hosted chat-completion connection.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::error::TaskwrightError;
use crate::generation::stream_turn;
use crate::provider::azure::AzureOpenAiProvider;
use crate::provider::ModelProvider;
use crate::store::TaskStore;
use crate::tools::tasks::TaskToolkit;
use crate::tools::tool::Tool;
use crate::types::{ChatMessage, GenerationSettings, ModelMessage};

use super::thread::ConversationThread;

/// Name reported in the streamed reply header.
pub const AGENT_NAME: &str = "task-management-agent";

const INSTRUCTIONS: &str = "You are a task management agent. \
You help users manage their tasks effectively by calling the functions available to you. \
You should help users create, read, update, and delete tasks as needed.";

const NOT_CONFIGURED_REPLY: &str =
    "The agent is not properly configured. Please check your settings.";

const EMPTY_STREAM_REPLY: &str = "I received your message but couldn't generate a response.";

/// A conversational agent that manages tasks through function calls.
///
/// Owns one provider connection and one conversation thread. When the
/// connection cannot be built (missing credentials) the agent degrades to
/// a fixed reply instead of failing the caller.
///
/// One agent instance assumes one serialized caller: concurrent
/// `process_message` calls on a shared instance would race on the thread.
pub struct TaskAgent {
    provider: Option<Box<dyn ModelProvider>>,
    tools: Vec<Box<dyn Tool>>,
    settings: GenerationSettings,
    thread: ConversationThread,
}

impl TaskAgent {
    /// Create from the process environment (see [`AgentConfig::from_env`]).
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self::with_config(AgentConfig::from_env(), store)
    }

    /// Create from an explicit config.
    pub fn with_config(config: AgentConfig, store: Arc<dyn TaskStore>) -> Self {
        let provider = match AzureOpenAiProvider::from_config(&config) {
            Ok(p) => Some(Box::new(p) as Box<dyn ModelProvider>),
            Err(e) => {
                warn!(error = %e, "chat connection not configured; agent replies in degraded mode");
                None
            }
        };
        Self::assemble(provider, store)
    }

    /// Create over any provider. Used for embedding and tests.
    pub fn with_provider(provider: Box<dyn ModelProvider>, store: Arc<dyn TaskStore>) -> Self {
        Self::assemble(Some(provider), store)
    }

    fn assemble(provider: Option<Box<dyn ModelProvider>>, store: Arc<dyn TaskStore>) -> Self {
        Self {
            provider,
            tools: TaskToolkit::new(store).tools(),
            settings: GenerationSettings::default(),
            thread: ConversationThread::new(),
        }
    }

    /// Override generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Whether a connection was established.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// The current conversation thread.
    pub fn thread(&self) -> &ConversationThread {
        &self.thread
    }

    /// Drop all conversation history.
    pub fn clear_history(&mut self) {
        self.thread.clear();
    }

    /// Process one user message and return the assistant's reply.
    ///
    /// Streams the model's response, invoking task functions as the model
    /// requests them. The first content chunk is prefixed with a header
    /// naming the agent; chunks concatenate in arrival order. An empty
    /// stream produces a fixed fallback reply.
    pub async fn process_message(
        &mut self,
        message: impl Into<String>,
    ) -> Result<ChatMessage, TaskwrightError> {
        let Some(provider) = self.provider.as_deref() else {
            return Ok(ChatMessage::assistant(NOT_CONFIGURED_REPLY));
        };

        // Instructions are re-sent each turn, never stored in the thread.
        let mut messages = Vec::with_capacity(self.thread.len() + 2);
        messages.push(ModelMessage::system(INSTRUCTIONS));
        messages.extend(self.thread.messages().iter().cloned());
        messages.push(ModelMessage::user(message));

        debug!(history = self.thread.len(), "processing user message");

        let mut content = String::new();
        let result = stream_turn(
            provider,
            messages,
            self.settings.clone(),
            &self.tools,
            |delta| {
                if delta.text.is_empty() {
                    return;
                }
                if content.is_empty() {
                    content.push_str("# ");
                    content.push_str(AGENT_NAME);
                    content.push_str(": ");
                }
                content.push_str(&delta.text);
            },
        )
        .await?;

        // Keep the turn's full message list, minus the leading system message.
        self.thread
            .replace(result.messages.into_iter().skip(1).collect());

        if content.is_empty() {
            return Ok(ChatMessage::assistant(EMPTY_STREAM_REPLY));
        }
        Ok(ChatMessage::assistant(content))
    }
}
