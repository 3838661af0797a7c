//! Property-based tests for the session state machine
//!
//! These tests verify key invariants hold across arbitrary event sequences.

use super::state::*;
use super::transition::*;
use super::*;
use crate::content::Section;
use proptest::prelude::*;

const FAQ_LEN: usize = 6;

fn test_context() -> SessionContext {
    SessionContext::new("prop-session", FAQ_LEN)
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_section() -> impl Strategy<Value = Section> {
    prop_oneof![
        Just(Section::Home),
        Just(Section::Services),
        Just(Section::Insurance),
        Just(Section::About),
        Just(Section::Faq),
        Just(Section::Testimonials),
        Just(Section::Contact),
    ]
}

/// Mix of blank, padded and ordinary utterances
fn arb_utterance() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t\n]{1,5}",
        "[ ]{0,3}[a-zA-Z?]{1,20}[ ]{0,3}",
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0.0f64..200.0).prop_map(|offset_y| Event::Scrolled { offset_y }),
        Just(Event::ToggleMenu),
        Just(Event::CloseMenu),
        arb_section().prop_map(|section| Event::Navigate { section }),
        (0usize..FAQ_LEN + 2).prop_map(|index| Event::ToggleFaq { index }),
        Just(Event::OpenChat),
        Just(Event::CloseChat),
        arb_utterance().prop_map(|text| Event::EditDraft { text }),
        arb_utterance().prop_map(|text| Event::Submit { text }),
        Just(Event::SubmitDraft),
        proptest::option::of("[a-zA-Z ]{0,30}").prop_map(|text| Event::AssistantReplied { text }),
    ]
}

fn ask_count(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::AskAssistant { .. }))
        .count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// The transcript is append-only and always starts with the greeting.
    #[test]
    fn transcript_is_append_only(events in proptest::collection::vec(arb_event(), 0..60)) {
        let ctx = test_context();
        let mut state = SessionState::default();

        for event in events {
            let before = state.conversation.turns().to_vec();
            if let Ok(result) = transition(&state, &ctx, event) {
                state = result.new_state;
            }
            let after = state.conversation.turns();
            prop_assert!(after.len() >= before.len());
            prop_assert_eq!(&after[..before.len()], &before[..]);
            prop_assert_eq!(&after[0], &Turn::model(GREETING));
        }
    }

    /// At most one assistant call is outstanding, and every settlement
    /// matches exactly one earlier ask.
    #[test]
    fn single_outstanding_call(events in proptest::collection::vec(arb_event(), 0..60)) {
        let ctx = test_context();
        let mut state = SessionState::default();
        let mut outstanding = 0usize;

        for event in events {
            let is_reply = matches!(event, Event::AssistantReplied { .. });
            match transition(&state, &ctx, event) {
                Ok(result) => {
                    outstanding += ask_count(&result.effects);
                    if is_reply {
                        outstanding -= 1;
                    }
                    state = result.new_state;
                }
                Err(TransitionError::NothingPending) => {
                    prop_assert_eq!(outstanding, 0);
                }
                Err(TransitionError::FaqIndexOutOfRange { index, len }) => {
                    prop_assert!(index >= len);
                }
            }
            prop_assert!(outstanding <= 1);
            prop_assert_eq!(outstanding == 1, state.conversation.is_pending());
        }
    }

    /// Each accepted submit grows the transcript by one, and each settlement
    /// by one more, so a completed cycle adds exactly two turns.
    #[test]
    fn submit_cycle_adds_two_turns(text in "[a-zA-Z]{1,20}", reply in proptest::option::of("[a-z ]{0,20}")) {
        let ctx = test_context();
        let state = SessionState::default();

        let asked = transition(&state, &ctx, Event::Submit { text }).unwrap();
        prop_assert!(asked.new_state.conversation.is_pending());

        let reply = Event::AssistantReplied { text: reply };
        let settled = transition(&asked.new_state, &ctx, reply).unwrap();
        prop_assert!(!settled.new_state.conversation.is_pending());
        prop_assert_eq!(
            settled.new_state.conversation.turns().len(),
            state.conversation.turns().len() + 2
        );
    }

    /// Whitespace-only submissions never change anything.
    #[test]
    fn blank_submit_is_noop(text in "[ \t\n]{0,8}", events in proptest::collection::vec(arb_event(), 0..20)) {
        let ctx = test_context();
        let mut state = SessionState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                state = result.new_state;
            }
        }

        let result = transition(&state, &ctx, Event::Submit { text }).unwrap();
        prop_assert_eq!(&result.new_state, &state);
        prop_assert!(result.effects.is_empty());
    }

    /// Navigation always leaves the menu closed.
    #[test]
    fn navigate_closes_menu(menu_open in any::<bool>(), section in arb_section()) {
        let state = SessionState { menu_open, ..SessionState::default() };
        let result = transition(&state, &test_context(), Event::Navigate { section }).unwrap();
        prop_assert!(!result.new_state.menu_open);
        let scroll = Effect::ScrollTo { section };
        prop_assert!(result.effects.contains(&scroll));
    }
}
