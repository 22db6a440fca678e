//! Property-based tests for the session state machine

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = SessionState> {
    (any::<bool>(), any::<bool>()).prop_map(|(expecting_aadhaar, expecting_discharge)| {
        SessionState {
            expecting_aadhaar,
            expecting_discharge,
        }
    })
}

/// Prose that cannot contain any trigger phrase (no 'p', 'd' or ':')
fn arb_neutral_text() -> impl Strategy<Value = String> {
    "[a-ceg-oq-zA-CEG-OQ-Z0-9 ,.?!]{0,80}"
}

fn arb_trigger_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Please upload a photo of your Aadhaar card".to_string()),
        Just("Do you have a discharge summary?".to_string()),
        Just("Here is your discharge summary".to_string()),
        Just("Medical history: none".to_string()),
        Just("Thanks!".to_string()),
    ]
}

fn arb_bot_text() -> impl Strategy<Value = String> {
    prop_oneof![arb_neutral_text(), arb_trigger_text()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_transition_is_deterministic(
        state in arb_state(),
        text in arb_bot_text(),
        fields in any::<bool>(),
    ) {
        prop_assert_eq!(transition(state, &text, fields), transition(state, &text, fields));
    }

    #[test]
    fn prop_neutral_text_keeps_state(state in arb_state(), text in arb_neutral_text()) {
        prop_assert_eq!(transition(state, &text, false), state);
    }

    #[test]
    fn prop_structured_fields_clear_aadhaar(state in arb_state(), text in arb_bot_text()) {
        // Rules 3 and 4 only touch the discharge flag
        let next = transition(state, &text, true);
        prop_assert!(!next.expecting_aadhaar);
    }

    #[test]
    fn prop_single_call_never_sets_both_from_clean_state(
        text in arb_bot_text(),
        fields in any::<bool>(),
    ) {
        let clean = SessionState { expecting_aadhaar: false, expecting_discharge: false };
        let next = transition(clean, &text, fields);
        prop_assert!(!(next.expecting_aadhaar && next.expecting_discharge));
    }

    #[test]
    fn prop_sequences_from_initial_stay_exclusive_until_discharge_question(
        replies in proptest::collection::vec((arb_bot_text(), any::<bool>()), 0..20),
    ) {
        let both = |s: SessionState| s.expecting_aadhaar && s.expecting_discharge;
        let mut state = SessionState::initial();
        for (text, fields) in replies {
            let asks_discharge = text.to_lowercase().contains("do you have a discharge summary");
            let before = state;
            state = transition(state, &text, fields);
            if both(state) && !both(before) {
                // Only reachable when the question arrives while aadhaar is still expected
                prop_assert!(asks_discharge);
                prop_assert!(before.expecting_aadhaar);
                prop_assert!(!fields);
            }
        }
    }
}

#[test]
fn test_aadhaar_then_fields_across_two_calls() {
    let first = transition(
        SessionState {
            expecting_aadhaar: false,
            expecting_discharge: false,
        },
        "Please upload a photo of your Aadhaar card",
        false,
    );
    assert!(first.expecting_aadhaar && !first.expecting_discharge);

    let second = transition(first, "Here is your summary", true);
    assert!(!second.expecting_aadhaar && !second.expecting_discharge);
}
