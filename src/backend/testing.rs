//! Mock backends for testing
//!
//! These mocks enable controller tests without real I/O.

use super::{BackendError, ChatBackend, ChatRequest, ChatResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

// ============================================================================
// Mock Backend
// ============================================================================

/// Mock backend that returns queued replies
pub struct MockBackend {
    responses: Mutex<VecDeque<Result<ChatResponse, BackendError>>>,
    /// Record of all requests made
    pub requests: Mutex<Vec<ChatRequest>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_response(&self, response: ChatResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a reply decoded from a JSON body, as the wire would deliver it
    pub fn queue_json(&self, body: Value) {
        let response = serde_json::from_value(body).expect("mock body must decode");
        self.queue_response(response);
    }

    /// Queue a transport failure
    pub fn queue_error(&self, error: BackendError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Result<ChatResponse, BackendError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::network("No mock response queued")))
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        self.next_reply()
    }

    fn endpoint(&self) -> &str {
        "mock://chat"
    }
}

// ============================================================================
// Delayed Mock Backend (for overlapping-turn testing)
// ============================================================================

/// Mock backend that holds each request open for a fixed delay
pub struct DelayedMockBackend {
    inner: MockBackend,
    delay: Duration,
    /// Notified when a request starts (for test synchronization)
    pub request_started: Arc<Notify>,
}

#[allow(dead_code)]
impl DelayedMockBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MockBackend::new(),
            delay,
            request_started: Arc::new(Notify::new()),
        }
    }

    pub fn queue_json(&self, body: Value) {
        self.inner.queue_json(body);
    }

    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.inner.recorded_requests()
    }
}

#[async_trait]
impl ChatBackend for DelayedMockBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.inner.requests.lock().unwrap().push(request.clone());
        self.request_started.notify_one();
        tokio::time::sleep(self.delay).await;
        self.inner.next_reply()
    }

    fn endpoint(&self) -> &str {
        "mock://delayed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_backend() {
        let mock = MockBackend::new();
        mock.queue_json(json!({"bot_message": "first"}));

        let reply = mock.send(&ChatRequest::new("u", "a")).await.unwrap();
        assert_eq!(reply.bot_message(), Some("first"));

        // Nothing queued: behaves like a dead endpoint
        assert!(mock.send(&ChatRequest::new("u", "b")).await.is_err());
        assert_eq!(mock.recorded_requests().len(), 2);
    }
}
