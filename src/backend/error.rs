//! Backend error types

use thiserror::Error;

/// Transport or decode failure for one turn
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Timeout, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Status, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Decode, message)
    }
}

/// Error classification, used for logging only; no kind is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Unreachable host, reset connection, unreadable body
    Network,
    /// No reply within the configured timeout
    Timeout,
    /// Non-2xx status without a parseable body
    Status,
    /// 2xx status with a body that is not the expected JSON
    Decode,
}
