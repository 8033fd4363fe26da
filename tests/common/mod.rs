//! Shared test helpers: scripted mock provider and guard store.
#![allow(dead_code)] // not every test binary uses every helper

use async_trait::async_trait;
use futures::stream::BoxStream;

use taskwright::error::TaskwrightError;
use taskwright::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use taskwright::store::{Task, TaskStore};
use taskwright::types::*;

/// A mock provider that streams scripted rounds in FIFO order.
pub struct MockProvider {
    model_id: String,
    rounds: std::sync::Mutex<Vec<Vec<TextStreamDelta>>>,
    requests: std::sync::Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            rounds: std::sync::Mutex::new(Vec::new()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Queue a round that streams the given chunks, then finishes.
    pub fn queue_text(&self, chunks: &[&str]) {
        let mut deltas: Vec<TextStreamDelta> =
            chunks.iter().map(|c| TextStreamDelta::text(*c)).collect();
        deltas.push(TextStreamDelta::done(FinishReason::Stop, Vec::new()));
        self.rounds.lock().unwrap().push(deltas);
    }

    /// Queue a round that produces no content at all.
    pub fn queue_empty(&self) {
        self.rounds
            .lock()
            .unwrap()
            .push(vec![TextStreamDelta::done(FinishReason::Stop, Vec::new())]);
    }

    /// Queue a round that ends in a single tool call.
    pub fn queue_tool_call(&self, id: &str, name: &str, arguments: serde_json::Value) {
        self.rounds.lock().unwrap().push(vec![TextStreamDelta::done(
            FinishReason::ToolCalls,
            vec![ToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments,
            }],
        )]);
    }

    /// Number of rounds the provider has served.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn next_round(&self) -> Vec<TextStreamDelta> {
        let mut rounds = self.rounds.lock().unwrap();
        if rounds.is_empty() {
            vec![TextStreamDelta::done(FinishReason::Stop, Vec::new())]
        } else {
            rounds.remove(0)
        }
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, TaskwrightError> {
        self.requests.lock().unwrap().push(request.clone());
        let deltas = self.next_round();
        let text: String = deltas.iter().map(|d| d.text.as_str()).collect();
        let tool_calls = deltas
            .iter()
            .flat_map(|d| d.tool_calls.iter().cloned())
            .collect();
        let finish_reason = deltas.iter().filter_map(|d| d.finish_reason).last();
        Ok(ProviderResponse {
            text,
            usage: Usage::default(),
            tool_calls,
            finish_reason,
        })
    }

    async fn stream_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<BoxStream<'static, Result<TextStreamDelta, TaskwrightError>>, TaskwrightError>
    {
        self.requests.lock().unwrap().push(request.clone());
        let deltas = self.next_round();
        Ok(Box::pin(futures::stream::iter(deltas.into_iter().map(Ok))))
    }
}

/// Delegating wrapper so a test can keep a handle on the mock after
/// handing it to an agent.
pub struct SharedProvider(pub std::sync::Arc<MockProvider>);

#[async_trait]
impl ModelProvider for SharedProvider {
    fn provider_name(&self) -> &str {
        self.0.provider_name()
    }

    fn model_id(&self) -> &str {
        self.0.model_id()
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, TaskwrightError> {
        self.0.generate_text(request).await
    }

    async fn stream_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<BoxStream<'static, Result<TextStreamDelta, TaskwrightError>>, TaskwrightError>
    {
        self.0.stream_text(request).await
    }
}

/// A store that fails the test if any operation is attempted.
pub struct PanicStore;

#[async_trait]
impl TaskStore for PanicStore {
    async fn add_task(&self, _title: &str, _is_complete: bool) -> taskwright::error::Result<Task> {
        panic!("store must not be touched");
    }

    async fn get_all_tasks(&self) -> taskwright::error::Result<Vec<Task>> {
        panic!("store must not be touched");
    }

    async fn get_task_by_id(&self, _id: i64) -> taskwright::error::Result<Option<Task>> {
        panic!("store must not be touched");
    }

    async fn update_task(
        &self,
        _id: i64,
        _title: Option<String>,
        _is_complete: Option<bool>,
    ) -> taskwright::error::Result<Option<Task>> {
        panic!("store must not be touched");
    }

    async fn delete_task(&self, _id: i64) -> taskwright::error::Result<bool> {
        panic!("store must not be touched");
    }
}
