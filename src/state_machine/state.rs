//! Session state types

use serde::{Deserialize, Serialize};

/// Greeting that seeds every transcript
pub const GREETING: &str = "Hello! I am your Renice Health Assistant. How can I help you today?";

/// Vertical scroll offset (px) past which the navbar switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One immutable entry of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// An accepted submission: what the assistant must be asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Trimmed utterance
    pub utterance: String,
    /// Transcript as it stood before the user turn was appended
    pub prior: Vec<Turn>,
}

/// The chat widget's conversation: transcript, draft, loading flag, panel.
///
/// The transcript is append-only. At most one assistant call is pending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversation {
    turns: Vec<Turn>,
    pub draft: String,
    pending: bool,
    pub panel_open: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::model(GREETING)],
            draft: String::new(),
            pending: false,
            panel_open: false,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Accept a user utterance, or return `None` when it must be ignored
    /// (blank, or a call is already pending).
    pub fn begin_submit(&mut self, utterance: &str) -> Option<Submission> {
        let trimmed = utterance.trim();
        if trimmed.is_empty() || self.pending {
            return None;
        }

        let prior = self.turns.clone();
        self.turns.push(Turn::user(trimmed));
        self.draft.clear();
        self.pending = true;

        Some(Submission {
            utterance: trimmed.to_string(),
            prior,
        })
    }

    /// Record the assistant's settlement. Returns the appended model turn,
    /// or `None` if no call was pending.
    pub fn settle(&mut self, text: Option<String>) -> Option<&Turn> {
        if !self.pending {
            return None;
        }
        self.turns.push(Turn::model(text.unwrap_or_default()));
        self.pending = false;
        self.turns.last()
    }
}

/// Everything one page visit owns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub conversation: Conversation,
    pub menu_open: bool,
    pub scrolled: bool,
    /// Index of the expanded FAQ entry; the first one starts open
    pub faq_open: Option<usize>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            conversation: Conversation::new(),
            menu_open: false,
            scrolled: false,
            faq_open: Some(0),
        }
    }
}

/// Immutable facts about a session, available to every transition
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    /// Number of FAQ entries rendered on the page
    pub faq_len: usize,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>, faq_len: usize) -> Self {
        Self {
            session_id: session_id.into(),
            faq_len,
        }
    }
}
