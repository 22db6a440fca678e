//! Pure state transition function
//!
//! Bot prose drives the expectation flags. Matching is a case-insensitive
//! substring/prefix check on the reply text, evaluated in a fixed order so
//! later rules override earlier ones applied in the same call.

use super::SessionState;

/// Bot asks for an identity-document photo
const REQUEST_AADHAAR_PHOTO: &str = "please upload a photo of your aadhaar";

/// Bot asks whether the user has a discharge summary
const ASK_DISCHARGE_SUMMARY: &str = "do you have a discharge summary";

/// Reply prefixes that present an already processed discharge summary
const PRESENTATION_PREFIXES: &[&str] = &["here is your discharge summary", "medical history:"];

/// Compute the state following a backend reply.
///
/// `bot_message` is the reply text (empty when the reply carried none);
/// `has_structured_fields` is true when the backend reported extracted
/// identity fields. Given the same inputs this always returns the same state.
pub fn transition(
    state: SessionState,
    bot_message: &str,
    has_structured_fields: bool,
) -> SessionState {
    let text = bot_message.to_lowercase();
    let mut next = state;

    if text.contains(REQUEST_AADHAAR_PHOTO) {
        next.expecting_aadhaar = true;
        next.expecting_discharge = false;
    }

    if has_structured_fields {
        next.expecting_aadhaar = false;
        next.expecting_discharge = false;
    }

    if text.contains(ASK_DISCHARGE_SUMMARY) {
        next.expecting_discharge = true;
    }

    if PRESENTATION_PREFIXES
        .iter()
        .any(|prefix| text.starts_with(prefix))
    {
        next.expecting_discharge = false;
    }

    next
}
