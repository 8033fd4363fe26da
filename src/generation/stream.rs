//! Streaming turn loop with automatic tool invocation.

use futures::stream::BoxStream;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::error::TaskwrightError;
use crate::provider::{ModelProvider, ProviderRequest, ToolDefinition};
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::{Tool, ToolExecutionContext};
use crate::types::*;

/// Maximum tool rounds per turn to prevent infinite loops.
const MAX_TOOL_ROUNDS: usize = 20;

/// Run one conversational turn, streaming deltas and resolving tool calls.
///
/// Each round sends the message list plus tool definitions to the provider
/// and forwards every delta to `on_delta` in arrival order. When a round
/// ends in tool calls, each call is dispatched by name, its result is
/// appended as a tool message, and the loop continues; otherwise the
/// accumulated turn is returned. Unknown tools and execution failures are
/// fed back to the model as error results, never raised to the caller.
pub async fn stream_turn<F>(
    provider: &dyn ModelProvider,
    mut messages: Vec<ModelMessage>,
    settings: GenerationSettings,
    tools: &[Box<dyn Tool>],
    mut on_delta: F,
) -> Result<TurnResult, TaskwrightError>
where
    F: FnMut(&TextStreamDelta),
{
    let tool_defs: Option<Vec<ToolDefinition>> = if tools.is_empty() {
        None
    } else {
        Some(
            tools
                .iter()
                .map(|t| ToolDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters().schema.clone(),
                })
                .collect(),
        )
    };

    let mut text = String::new();
    let mut total_usage = Usage::default();
    let mut finish_reason = None;

    for round in 0..MAX_TOOL_ROUNDS {
        let request = ProviderRequest {
            messages: messages.clone(),
            settings: settings.clone(),
            tools: tool_defs.clone(),
        };

        debug!(round, "stream_turn: invoking provider");
        let mut stream = provider.stream_text(&request).await?;

        let mut round_text = String::new();
        let mut round_calls: Vec<ToolCall> = Vec::new();
        while let Some(delta) = stream.next().await {
            let delta = delta?;
            on_delta(&delta);
            round_text.push_str(&delta.text);
            if let Some(ref usage) = delta.usage {
                total_usage.merge(usage);
            }
            if let Some(reason) = delta.finish_reason {
                finish_reason = Some(reason);
            }
            if !delta.tool_calls.is_empty() {
                round_calls.extend(delta.tool_calls);
            }
        }

        text.push_str(&round_text);

        if round_calls.is_empty() {
            if !round_text.is_empty() {
                messages.push(ModelMessage::assistant(round_text));
            }
            return Ok(TurnResult {
                text,
                messages,
                usage: total_usage,
                finish_reason,
            });
        }

        // Record the assistant round that requested the calls
        let mut content: Vec<ContentPart> = Vec::new();
        if !round_text.is_empty() {
            content.push(ContentPart::Text { text: round_text });
        }
        for call in &round_calls {
            content.push(ContentPart::ToolCall(call.clone()));
        }
        messages.push(ModelMessage {
            role: Role::Assistant,
            content,
            name: None,
            timestamp: Some(chrono::Utc::now()),
        });

        // Dispatch each call by name and feed the result back
        let ctx = ToolExecutionContext::default();
        for call in &round_calls {
            let result = match tools.iter().find(|t| t.name() == call.name) {
                Some(tool) => {
                    let args = ToolArguments::new(call.arguments.clone());
                    match tool.execute(&args, &ctx).await {
                        Ok(value) => ToolResult {
                            tool_call_id: call.id.clone(),
                            result: value,
                            is_error: false,
                        },
                        Err(e) => {
                            warn!(tool = %call.name, error = %e, "tool execution failed");
                            ToolResult {
                                tool_call_id: call.id.clone(),
                                result: serde_json::json!({"error": e.to_string()}),
                                is_error: true,
                            }
                        }
                    }
                }
                None => {
                    warn!(tool = %call.name, "unknown tool requested");
                    ToolResult {
                        tool_call_id: call.id.clone(),
                        result: serde_json::json!({
                            "error": format!("Tool '{}' not found", call.name)
                        }),
                        is_error: true,
                    }
                }
            };
            messages.push(ModelMessage::tool_result(
                result.tool_call_id.clone(),
                result.result,
                result.is_error,
            ));
        }
    }

    warn!(rounds = MAX_TOOL_ROUNDS, "stream_turn: tool round cap reached");
    Ok(TurnResult {
        text,
        messages,
        usage: total_usage,
        finish_reason: Some(FinishReason::Length),
    })
}

/// Collect a raw delta stream into a final result.
pub async fn collect_stream(
    mut stream: BoxStream<'static, Result<TextStreamDelta, TaskwrightError>>,
) -> Result<StreamTextResult, TaskwrightError> {
    let mut text = String::new();
    let mut usage = Usage::default();
    let mut finish_reason = None;

    while let Some(delta) = stream.next().await {
        let delta = delta?;
        text.push_str(&delta.text);
        if let Some(u) = delta.usage {
            usage = u;
        }
        if let Some(reason) = delta.finish_reason {
            finish_reason = Some(reason);
        }
    }

    Ok(StreamTextResult {
        text,
        usage,
        finish_reason,
    })
}
