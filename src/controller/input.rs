//! User input accepted by a turn

use crate::artifact::DataUri;
use thiserror::Error;

/// Input rejected before a turn starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input is empty")]
    EmptyInput,
}

/// One user-supplied input: typed text or an encoded artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Trimmed, non-empty free text
    Text(String),
    /// Artifact re-encoded as a data URI
    Artifact(DataUri),
}

impl UserInput {
    /// Trim `raw` and reject it when nothing is left
    pub fn text(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyInput);
        }
        Ok(UserInput::Text(trimmed.to_string()))
    }

    pub fn artifact(uri: DataUri) -> Self {
        UserInput::Artifact(uri)
    }

    pub fn is_binary_artifact(&self) -> bool {
        matches!(self, UserInput::Artifact(_))
    }

    /// The string sent as `last_input`
    pub fn payload(&self) -> &str {
        match self {
            UserInput::Text(text) => text,
            UserInput::Artifact(uri) => uri.as_str(),
        }
    }

    pub(crate) fn into_payload(self) -> String {
        match self {
            UserInput::Text(text) => text,
            UserInput::Artifact(uri) => uri.into_string(),
        }
    }
}
