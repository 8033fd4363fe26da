//! Generation settings and turn results.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::message::ModelMessage;
use super::usage::Usage;

/// Settings controlling text generation.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub stop_sequences: Option<Vec<String>>,
    pub presence_penalty: Option<f64>,
    pub frequency_penalty: Option<f64>,
    pub seed: Option<u64>,
    pub user: Option<String>,
}

/// Why generation finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    Error,
}

/// The completed value of one conversational turn.
///
/// `messages` is the full message list after the turn, including the
/// user message, any assistant tool-call rounds, and the tool results.
/// Conversation state is carried here explicitly rather than mutated
/// behind an opaque handle.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// Aggregated assistant text across all rounds.
    pub text: String,
    /// Message list after the turn completed.
    pub messages: Vec<ModelMessage>,
    /// Accumulated token usage.
    pub usage: Usage,
    /// Finish reason of the final round.
    pub finish_reason: Option<FinishReason>,
}
