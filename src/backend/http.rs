//! HTTP transport for the conversation endpoint

use super::{BackendError, ChatBackend, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Longest body excerpt carried in an error message
const MAX_BODY_EXCERPT: usize = 200;

/// POSTs each turn as JSON to a fixed endpoint
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Build a backend; `timeout` of `None` waits indefinitely
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn classify_send_error(e: &reqwest::Error) -> BackendError {
        if e.is_timeout() {
            BackendError::timeout(format!("Request timeout: {e}"))
        } else if e.is_connect() {
            BackendError::network(format!("Connection failed: {e}"))
        } else {
            BackendError::network(format!("Request failed: {e}"))
        }
    }
}

/// Keep error messages short when the body is an HTML error page
fn excerpt(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_EXCERPT {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX_BODY_EXCERPT).collect();
        format!("{cut}...")
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::timeout(format!("Request timeout: {e}"))
            } else {
                BackendError::network(format!("Failed to read response: {e}"))
            }
        })?;

        // The body is decoded regardless of status; an error status with a
        // JSON body is still a reply the user gets to see.
        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(parsed) => {
                if !status.is_success() {
                    tracing::warn!(status = %status, "Backend replied with error status");
                }
                Ok(parsed)
            }
            Err(e) if status.is_success() => Err(BackendError::decode(format!(
                "Failed to parse response: {e} - body: {}",
                excerpt(&body)
            ))),
            Err(_) => Err(BackendError::status(format!(
                "HTTP {status}: {}",
                excerpt(&body)
            ))),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
