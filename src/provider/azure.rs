//! Azure OpenAI chat-completions provider.

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use serde::Deserialize;
use tracing::debug;

use crate::config::AgentConfig;
use crate::error::TaskwrightError;
use crate::types::*;

use super::http::{api_key_headers, parse_sse_data, shared_client, status_to_error};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

/// Azure OpenAI Service provider.
///
/// Targets `{endpoint}/openai/deployments/{deployment}/chat/completions`
/// with the deployment's api-version as a query parameter.
pub struct AzureOpenAiProvider {
    deployment: String,
    api_key: String,
    url: String,
}

impl AzureOpenAiProvider {
    /// Create with Azure-specific connection parameters.
    ///
    /// `endpoint`: e.g., "https://myresource.openai.azure.com"
    /// `deployment`: e.g., "gpt-4o"
    /// `api_version`: e.g., "2024-06-01"
    pub fn new(
        endpoint: &str,
        deployment: impl Into<String>,
        api_key: impl Into<String>,
        api_version: &str,
    ) -> Self {
        let deployment = deployment.into();
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            api_version
        );
        Self {
            deployment,
            api_key: api_key.into(),
            url,
        }
    }

    /// Build from a config. Fails when any connection parameter is missing.
    pub fn from_config(config: &AgentConfig) -> Result<Self, TaskwrightError> {
        let (Some(api_key), Some(deployment), Some(endpoint)) = (
            config.api_key.as_deref(),
            config.deployment_name.as_deref(),
            config.endpoint.as_deref(),
        ) else {
            return Err(TaskwrightError::Configuration(
                "API_KEY, MODEL_DEPLOYMENT_NAME, and PROJECT_ENDPOINT must all be set".into(),
            ));
        };
        Ok(Self::new(endpoint, deployment, api_key, &config.api_version))
    }

    fn build_request_body(&self, request: &ProviderRequest, stream: bool) -> serde_json::Value {
        let messages = request
            .messages
            .iter()
            .map(message_to_wire)
            .collect::<Vec<_>>();

        let mut body = serde_json::json!({
            "model": self.deployment,
            "messages": messages,
            "stream": stream,
        });

        let obj = body.as_object_mut().expect("body is an object");

        if let Some(max) = request.settings.max_tokens {
            obj.insert("max_tokens".into(), max.into());
        }
        if let Some(temp) = request.settings.temperature {
            obj.insert("temperature".into(), temp.into());
        }
        if let Some(top_p) = request.settings.top_p {
            obj.insert("top_p".into(), top_p.into());
        }
        if let Some(ref stops) = request.settings.stop_sequences {
            obj.insert("stop".into(), serde_json::json!(stops));
        }
        if let Some(pp) = request.settings.presence_penalty {
            obj.insert("presence_penalty".into(), pp.into());
        }
        if let Some(fp) = request.settings.frequency_penalty {
            obj.insert("frequency_penalty".into(), fp.into());
        }
        if let Some(seed) = request.settings.seed {
            obj.insert("seed".into(), seed.into());
        }
        if let Some(ref user) = request.settings.user {
            obj.insert("user".into(), user.clone().into());
        }

        if let Some(ref tools) = request.tools {
            if !tools.is_empty() {
                let tool_defs: Vec<serde_json::Value> = tools
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "type": "function",
                            "function": {
                                "name": t.name,
                                "description": t.description,
                                "parameters": t.parameters,
                            }
                        })
                    })
                    .collect();
                obj.insert("tools".into(), tool_defs.into());
            }
        }

        body
    }
}

#[async_trait]
impl ModelProvider for AzureOpenAiProvider {
    fn provider_name(&self) -> &str {
        "azure-openai"
    }

    fn model_id(&self) -> &str {
        &self.deployment
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, TaskwrightError> {
        let body = self.build_request_body(request, false);

        debug!(deployment = %self.deployment, "azure generate_text");

        let resp = shared_client()
            .post(&self.url)
            .headers(api_key_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: WireChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TaskwrightError::api(200, "No choices in response"))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| ToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: serde_json::from_str(&tc.function.arguments)
                    .unwrap_or(serde_json::Value::String(tc.function.arguments)),
            })
            .collect();

        let finish_reason = choice.finish_reason.as_deref().and_then(parse_finish_reason);

        Ok(ProviderResponse {
            text: choice.message.content.unwrap_or_default(),
            usage: data.usage.map(Into::into).unwrap_or_default(),
            tool_calls,
            finish_reason,
        })
    }

    async fn stream_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<BoxStream<'static, Result<TextStreamDelta, TaskwrightError>>, TaskwrightError>
    {
        let body = self.build_request_body(request, true);

        debug!(deployment = %self.deployment, "azure stream_text");

        let resp = shared_client()
            .post(&self.url)
            .headers(api_key_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let byte_stream = resp.bytes_stream();

        let stream = async_stream::stream! {
            let mut buffer = String::new();
            let mut pending: Vec<PendingToolCall> = Vec::new();
            futures::pin_mut!(byte_stream);

            while let Some(chunk_result) = byte_stream.next().await {
                let chunk = match chunk_result {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(TaskwrightError::Network(e));
                        break;
                    }
                };

                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(line_end) = buffer.find('\n') {
                    let line = buffer[..line_end].trim().to_string();
                    buffer = buffer[line_end + 1..].to_string();

                    if line.is_empty() || line.starts_with(':') {
                        continue;
                    }

                    let Some(data) = parse_sse_data(&line) else {
                        continue;
                    };
                    let Ok(chunk) = serde_json::from_str::<WireStreamChunk>(data) else {
                        continue; // skip unparseable chunks
                    };
                    let usage = chunk.usage.map(Into::into);
                    let Some(choice) = chunk.choices.into_iter().next() else {
                        continue;
                    };

                    if let Some(fragments) = choice.delta.tool_calls {
                        for fragment in fragments {
                            absorb_fragment(&mut pending, fragment);
                        }
                    }

                    let text = choice.delta.content.unwrap_or_default();
                    let finish = choice.finish_reason.as_deref().and_then(parse_finish_reason);

                    if let Some(reason) = finish {
                        yield Ok(TextStreamDelta {
                            text,
                            event_type: StreamEventType::Done,
                            finish_reason: Some(reason),
                            usage,
                            tool_calls: assemble_calls(std::mem::take(&mut pending)),
                        });
                    } else if !text.is_empty() {
                        yield Ok(TextStreamDelta::text(text));
                    } else if !pending.is_empty() {
                        yield Ok(TextStreamDelta {
                            text: String::new(),
                            event_type: StreamEventType::ToolCallDelta,
                            finish_reason: None,
                            usage: None,
                            tool_calls: Vec::new(),
                        });
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

fn parse_finish_reason(s: &str) -> Option<FinishReason> {
    match s {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "tool_calls" => Some(FinishReason::ToolCalls),
        "content_filter" => Some(FinishReason::ContentFilter),
        _ => None,
    }
}

fn message_to_wire(msg: &ModelMessage) -> serde_json::Value {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    };

    // Simple single-part message
    if msg.content.len() == 1 {
        if let ContentPart::Text { ref text } = msg.content[0] {
            return serde_json::json!({ "role": role, "content": text });
        }
        if let ContentPart::ToolResult(ref tr) = msg.content[0] {
            return serde_json::json!({
                "role": "tool",
                "tool_call_id": tr.tool_call_id,
                "content": render_tool_result(&tr.result),
            });
        }
    }

    // Assistant message carrying tool calls
    let tool_calls = msg.tool_calls();
    if !tool_calls.is_empty() {
        let tc_json: Vec<serde_json::Value> = tool_calls
            .iter()
            .map(|tc| {
                serde_json::json!({
                    "id": tc.id,
                    "type": "function",
                    "function": {
                        "name": tc.name,
                        "arguments": tc.arguments.to_string(),
                    }
                })
            })
            .collect();
        let text = msg.text();
        return serde_json::json!({
            "role": role,
            "content": if text.is_empty() { serde_json::Value::Null } else { serde_json::Value::String(text) },
            "tool_calls": tc_json,
        });
    }

    serde_json::json!({ "role": role, "content": msg.text() })
}

/// Tool results travel as plain text. String results are rendered
/// unquoted so the model reads them as written.
fn render_tool_result(result: &serde_json::Value) -> String {
    match result {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Default)]
struct PendingToolCall {
    id: String,
    name: String,
    arguments: String,
}

/// Merge one streamed tool-call fragment into the pending set, keyed by index.
fn absorb_fragment(pending: &mut Vec<PendingToolCall>, fragment: WireStreamToolCall) {
    let index = fragment.index.unwrap_or(pending.len().saturating_sub(1) as u32) as usize;
    while pending.len() <= index {
        pending.push(PendingToolCall::default());
    }
    let slot = &mut pending[index];
    if let Some(id) = fragment.id {
        slot.id = id;
    }
    if let Some(function) = fragment.function {
        if let Some(name) = function.name {
            slot.name.push_str(&name);
        }
        if let Some(arguments) = function.arguments {
            slot.arguments.push_str(&arguments);
        }
    }
}

fn assemble_calls(pending: Vec<PendingToolCall>) -> Vec<ToolCall> {
    pending
        .into_iter()
        .filter(|p| !p.name.is_empty())
        .map(|p| ToolCall {
            id: p.id,
            name: p.name,
            arguments: serde_json::from_str(&p.arguments)
                .unwrap_or(serde_json::Value::String(p.arguments)),
        })
        .collect()
}

// Azure OpenAI wire types (internal)

#[derive(Deserialize)]
struct WireChatResponse {
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct WireMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Deserialize)]
struct WireToolCall {
    id: String,
    function: WireFunction,
}

#[derive(Deserialize)]
struct WireFunction {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl From<WireUsage> for Usage {
    fn from(u: WireUsage) -> Self {
        Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }
    }
}

#[derive(Deserialize)]
struct WireStreamChunk {
    #[serde(default)]
    choices: Vec<WireStreamChoice>,
    usage: Option<WireUsage>,
}

#[derive(Deserialize)]
struct WireStreamChoice {
    delta: WireStreamDelta,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct WireStreamDelta {
    content: Option<String>,
    tool_calls: Option<Vec<WireStreamToolCall>>,
}

#[derive(Deserialize)]
struct WireStreamToolCall {
    index: Option<u32>,
    id: Option<String>,
    function: Option<WireStreamFunction>,
}

#[derive(Deserialize)]
struct WireStreamFunction {
    name: Option<String>,
    arguments: Option<String>,
}
