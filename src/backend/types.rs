//! Wire types for the conversation endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound turn. Exactly these two fields go on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub user_id: String,
    /// Raw user text, or a data-URI-encoded artifact
    pub last_input: String,
}

impl ChatRequest {
    pub fn new(user_id: impl Into<String>, last_input: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            last_input: last_input.into(),
        }
    }
}

/// Inbound reply. All fields are optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub bot_message: Option<String>,
    #[serde(default)]
    pub visiting_card_html: Option<String>,
    /// Presence alone signals a successful identity-document extraction
    #[serde(default)]
    pub aadhaar_fields: Option<Value>,
}

impl ChatResponse {
    /// Bot reply text, if any. An empty string counts as no reply.
    pub fn bot_message(&self) -> Option<&str> {
        self.bot_message.as_deref().filter(|s| !s.is_empty())
    }

    /// Pre-rendered HTML fragment, if any. An empty string counts as none.
    pub fn html_fragment(&self) -> Option<&str> {
        self.visiting_card_html.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether the backend reported extracted identity fields
    pub fn has_structured_fields(&self) -> bool {
        self.aadhaar_fields.is_some()
    }
}
