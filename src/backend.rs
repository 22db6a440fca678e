//! Conversation backend abstraction
//!
//! The backend is an opaque endpoint that receives one string per turn and
//! answers with optional, presence-driven fields.

mod error;
mod http;
mod types;

#[cfg(test)]
pub mod testing;

pub use error::{BackendError, BackendErrorKind};
pub use http::HttpBackend;
pub use types::{ChatRequest, ChatResponse};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for conversation backends
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one turn and wait for the decoded reply
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;

    /// Where requests go (for logging)
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<T: ChatBackend + ?Sized> ChatBackend for Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        (**self).send(request).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

/// Logging wrapper for chat backends
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: ChatBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: ChatBackend> ChatBackend for LoggingBackend<B> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.send(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    input_bytes = request.last_input.len(),
                    has_bot_message = response.bot_message().is_some(),
                    has_html = response.html_fragment().is_some(),
                    has_structured_fields = response.has_structured_fields(),
                    "Backend turn completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Backend turn failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}
