//! Events that can occur in a session

use crate::content::Section;
use serde::Deserialize;

/// Events that trigger state transitions.
///
/// Everything except `AssistantReplied` can arrive from the page as JSON
/// tagged by `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    // Navigation events
    Scrolled {
        offset_y: f64,
    },
    ToggleMenu,
    /// Overlay tap or click outside the mobile menu
    CloseMenu,
    Navigate {
        section: Section,
    },

    // FAQ accordion
    ToggleFaq {
        index: usize,
    },

    // Chat widget events
    OpenChat,
    CloseChat,
    EditDraft {
        text: String,
    },
    Submit {
        text: String,
    },
    /// Enter key or send button: submit whatever is in the draft
    SubmitDraft,

    // Assistant events
    #[serde(skip_deserializing)]
    AssistantReplied {
        text: Option<String>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Scrolled { .. } => "scrolled",
            Event::ToggleMenu => "toggle_menu",
            Event::CloseMenu => "close_menu",
            Event::Navigate { .. } => "navigate",
            Event::ToggleFaq { .. } => "toggle_faq",
            Event::OpenChat => "open_chat",
            Event::CloseChat => "close_chat",
            Event::EditDraft { .. } => "edit_draft",
            Event::Submit { .. } => "submit",
            Event::SubmitDraft => "submit_draft",
            Event::AssistantReplied { .. } => "assistant_replied",
        }
    }
}
