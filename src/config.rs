//! Client configuration from the environment

use crate::artifact::DEFAULT_MAX_ARTIFACT_BYTES;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";
pub const DEFAULT_USER_ID: &str = "frontend_user";
pub const DEFAULT_GREETING: &str = "Hi";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for one intake session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Conversation endpoint URL
    pub endpoint: String,
    /// Fixed identifier sent with every turn
    pub user_id: String,
    /// Text of the bootstrap turn
    pub greeting: String,
    /// Backend call timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Largest artifact that will be encoded and sent
    pub max_artifact_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_artifact_bytes: DEFAULT_MAX_ARTIFACT_BYTES,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let timeout_secs = parse_or(
            "INTAKE_TIMEOUT_SECS",
            lookup("INTAKE_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        );

        Self {
            endpoint: lookup("INTAKE_ENDPOINT").unwrap_or(defaults.endpoint),
            user_id: lookup("INTAKE_USER_ID").unwrap_or(defaults.user_id),
            greeting: lookup("INTAKE_GREETING").unwrap_or(defaults.greeting),
            // 0 disables the timeout
            timeout: (timeout_secs > 0).then_some(Duration::from_secs(timeout_secs)),
            max_artifact_bytes: parse_or(
                "INTAKE_MAX_ARTIFACT_BYTES",
                lookup("INTAKE_MAX_ARTIFACT_BYTES"),
                defaults.max_artifact_bytes,
            ),
        }
    }
}

fn parse_or(key: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, default, "Ignoring unparseable setting");
            default
        }),
    }
}
