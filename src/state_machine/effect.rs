//! Effects produced by state transitions

use super::state::{Submission, Turn};
use crate::content::Section;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Publish the new state snapshot to watchers and subscribers
    PublishState,

    /// Tell subscribers a turn was appended to the transcript
    AnnounceTurn { turn: Turn },

    /// Ask the assistant (spawns as background task)
    AskAssistant { utterance: String, prior: Vec<Turn> },

    /// Ask the page to scroll a section into view
    ScrollTo { section: Section },

    /// Tell subscribers the pending call settled
    NotifyAssistantDone,
}

impl Effect {
    pub fn ask(submission: Submission) -> Self {
        Effect::AskAssistant {
            utterance: submission.utterance,
            prior: submission.prior,
        }
    }

    pub fn announce(turn: &Turn) -> Self {
        Effect::AnnounceTurn { turn: turn.clone() }
    }
}
