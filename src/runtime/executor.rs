//! Session runtime executor

use super::SseEvent;
use crate::assistant::AssistantGateway;
use crate::state_machine::{transition, Effect, Event, SessionContext, SessionState};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};

/// Owns one session's state and is its only writer.
///
/// Events arrive over an mpsc channel; assistant calls run on background
/// tasks and report back on the same channel, so page events keep flowing
/// while a question is outstanding.
pub struct SessionRuntime {
    context: SessionContext,
    state: SessionState,
    assistant: Arc<AssistantGateway>,
    event_rx: mpsc::Receiver<Event>,
    /// Weak so that dropping the manager's sender ends the runtime
    event_tx: mpsc::WeakSender<Event>,
    broadcast_tx: broadcast::Sender<SseEvent>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionRuntime {
    pub fn new(
        context: SessionContext,
        assistant: Arc<AssistantGateway>,
        event_rx: mpsc::Receiver<Event>,
        event_tx: &mpsc::Sender<Event>,
        broadcast_tx: broadcast::Sender<SseEvent>,
        state_tx: watch::Sender<SessionState>,
    ) -> Self {
        let state = state_tx.borrow().clone();
        Self {
            context,
            state,
            assistant,
            event_rx,
            event_tx: event_tx.downgrade(),
            broadcast_tx,
            state_tx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(session_id = %self.context.session_id, "Starting session runtime");

        while let Some(event) = self.event_rx.recv().await {
            self.process_event(event);
        }

        tracing::info!(session_id = %self.context.session_id, "Session runtime stopped");
    }

    fn process_event(&mut self, event: Event) {
        let event_name = event.name();

        let result = match transition(&self.state, &self.context, event) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    session_id = %self.context.session_id,
                    event = event_name,
                    error = %e,
                    "Rejected session event"
                );
                let _ = self.broadcast_tx.send(SseEvent::Error {
                    message: e.to_string(),
                });
                return;
            }
        };

        if result.effects.is_empty() {
            tracing::debug!(
                session_id = %self.context.session_id,
                event = event_name,
                "Event left session unchanged"
            );
        }

        self.state = result.new_state;

        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PublishState => {
                self.state_tx.send_replace(self.state.clone());
                let state_json = serde_json::to_value(&self.state).unwrap_or(Value::Null);
                let _ = self
                    .broadcast_tx
                    .send(SseEvent::StateChange { state: state_json });
            }

            Effect::AnnounceTurn { turn } => {
                let _ = self.broadcast_tx.send(SseEvent::Turn { turn });
            }

            Effect::AskAssistant { utterance, prior } => {
                let Some(event_tx) = self.event_tx.upgrade() else {
                    // Session already ended; nobody is left to read the reply
                    return;
                };
                let assistant = self.assistant.clone();
                let session_id = self.context.session_id.clone();

                tokio::spawn(async move {
                    tracing::info!(
                        session_id = %session_id,
                        prior_turns = prior.len(),
                        "Asking assistant (background)"
                    );
                    let text = assistant.ask(&utterance, &prior).await;
                    if event_tx
                        .send(Event::AssistantReplied { text })
                        .await
                        .is_err()
                    {
                        tracing::debug!(session_id = %session_id, "Session gone before reply");
                    }
                });
            }

            Effect::ScrollTo { section } => {
                let _ = self.broadcast_tx.send(SseEvent::ScrollTo { section });
            }

            Effect::NotifyAssistantDone => {
                let _ = self.broadcast_tx.send(SseEvent::AssistantDone);
            }
        }
    }
}
