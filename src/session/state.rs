//! Session state types

use serde::{Deserialize, Serialize};

/// Label shown for an artifact uploaded while an identity document is expected
pub const AADHAAR_LABEL: &str = "Aadhaar card loaded";

/// Label shown for an artifact uploaded while a discharge summary is expected
pub const DISCHARGE_LABEL: &str = "Discharge summary loaded";

/// Label shown for any other uploaded artifact
pub const GENERIC_ARTIFACT_LABEL: &str = "[Image]";

/// Expectation flags for the next user-supplied artifact.
///
/// The flow starts by expecting an identity document. The flags are only
/// ever replaced wholesale by [`super::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Next artifact is an identity-document (Aadhaar) image
    pub expecting_aadhaar: bool,
    /// Next artifact is a discharge-summary image
    pub expecting_discharge: bool,
}

impl SessionState {
    /// State at session start: an identity document is expected
    pub const fn initial() -> Self {
        Self {
            expecting_aadhaar: true,
            expecting_discharge: false,
        }
    }

    /// Resolve the flags into a single expectation.
    ///
    /// Aadhaar wins when both flags are set.
    pub fn expectation(self) -> Expectation {
        if self.expecting_aadhaar {
            Expectation::Aadhaar
        } else if self.expecting_discharge {
            Expectation::DischargeSummary
        } else {
            Expectation::FreeText
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// What the next artifact represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Aadhaar,
    DischargeSummary,
    FreeText,
}

impl Expectation {
    /// User-facing label for a binary artifact submitted under this expectation
    pub fn artifact_label(self) -> &'static str {
        match self {
            Expectation::Aadhaar => AADHAAR_LABEL,
            Expectation::DischargeSummary => DISCHARGE_LABEL,
            Expectation::FreeText => GENERIC_ARTIFACT_LABEL,
        }
    }
}
