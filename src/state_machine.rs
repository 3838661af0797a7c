//! Per-visit session state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! every page interaction is an [`Event`], [`transition`] computes the next
//! [`SessionState`] and the [`Effect`]s the runtime must carry out.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{Role, SessionContext, SessionState, Turn};
pub use transition::transition;
