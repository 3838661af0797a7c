//! Pure state transition function
//!
//! Given the same state, context and event it always produces the same new
//! state and effects, with no I/O.

use super::state::{SessionContext, SessionState, SCROLL_THRESHOLD};
use super::{Effect, Event};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    /// The event changed nothing and needs no effects
    pub fn unchanged(state: &SessionState) -> Self {
        Self::new(state.clone())
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Publish only when the state actually moved
    fn published_if_changed(self, old: &SessionState) -> Self {
        if &self.new_state == old {
            self
        } else {
            self.with_effect(Effect::PublishState)
        }
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("FAQ entry {index} does not exist ({len} entries)")]
    FaqIndexOutOfRange { index: usize, len: usize },
    #[error("Assistant replied but no question was pending")]
    NothingPending,
}

pub fn transition(
    state: &SessionState,
    context: &SessionContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    let mut next = state.clone();

    match event {
        // ============================================================
        // Navigation
        // ============================================================
        Event::Scrolled { offset_y } => {
            next.scrolled = offset_y > SCROLL_THRESHOLD;
            Ok(TransitionResult::new(next).published_if_changed(state))
        }

        Event::ToggleMenu => {
            next.menu_open = !next.menu_open;
            Ok(TransitionResult::new(next).with_effect(Effect::PublishState))
        }

        Event::CloseMenu => {
            next.menu_open = false;
            Ok(TransitionResult::new(next).published_if_changed(state))
        }

        Event::Navigate { section } => {
            next.menu_open = false;
            Ok(TransitionResult::new(next)
                .published_if_changed(state)
                .with_effect(Effect::ScrollTo { section }))
        }

        // ============================================================
        // FAQ accordion
        // ============================================================
        Event::ToggleFaq { index } => {
            if index >= context.faq_len {
                return Err(TransitionError::FaqIndexOutOfRange {
                    index,
                    len: context.faq_len,
                });
            }
            next.faq_open = if state.faq_open == Some(index) {
                None
            } else {
                Some(index)
            };
            Ok(TransitionResult::new(next).with_effect(Effect::PublishState))
        }

        // ============================================================
        // Chat widget
        // ============================================================
        Event::OpenChat => {
            next.conversation.panel_open = true;
            Ok(TransitionResult::new(next).published_if_changed(state))
        }

        Event::CloseChat => {
            next.conversation.panel_open = false;
            Ok(TransitionResult::new(next).published_if_changed(state))
        }

        Event::EditDraft { text } => {
            next.conversation.draft = text;
            Ok(TransitionResult::new(next).published_if_changed(state))
        }

        Event::Submit { text } => Ok(submit(state, next, &text)),

        Event::SubmitDraft => {
            let draft = state.conversation.draft.clone();
            Ok(submit(state, next, &draft))
        }

        Event::AssistantReplied { text } => {
            let turn = next
                .conversation
                .settle(text)
                .cloned()
                .ok_or(TransitionError::NothingPending)?;
            Ok(TransitionResult::new(next).with_effects([
                Effect::announce(&turn),
                Effect::PublishState,
                Effect::NotifyAssistantDone,
            ]))
        }
    }
}

/// Blank or overlapping submissions are silent no-ops.
fn submit(state: &SessionState, mut next: SessionState, utterance: &str) -> TransitionResult {
    let Some(submission) = next.conversation.begin_submit(utterance) else {
        return TransitionResult::unchanged(state);
    };

    let user_turn = next
        .conversation
        .turns()
        .last()
        .cloned()
        .map(|turn| Effect::announce(&turn));

    TransitionResult::new(next)
        .with_effects(user_turn)
        .with_effect(Effect::PublishState)
        .with_effect(Effect::ask(submission))
}
