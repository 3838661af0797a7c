//! Runtime for page-visit sessions
//!
//! Each session gets its own [`SessionRuntime`] task. The manager keeps the
//! channels needed to reach it and forgets the session when it ends.

mod executor;

pub use executor::SessionRuntime;

use crate::assistant::AssistantGateway;
use crate::content::{Section, FAQ};
use crate::state_machine::{Event, SessionContext, SessionState, Turn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch, RwLock};

/// Errors surfaced by the session manager
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("Session {0} is shutting down")]
    SessionClosed(String),
}

/// Events sent to SSE clients
#[derive(Debug, Clone)]
pub enum SseEvent {
    Init { state: serde_json::Value },
    StateChange { state: serde_json::Value },
    Turn { turn: Turn },
    ScrollTo { section: Section },
    AssistantDone,
    Error { message: String },
}

/// Handle to interact with a running session
struct SessionHandle {
    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<SseEvent>,
    state_rx: watch::Receiver<SessionState>,
    last_active: Mutex<Instant>,
}

impl SessionHandle {
    fn touch(&self) {
        if let Ok(mut last) = self.last_active.lock() {
            *last = Instant::now();
        }
    }

    /// An open SSE stream counts as activity
    fn is_watched(&self) -> bool {
        self.broadcast_tx.receiver_count() > 0
    }

    fn idle_for(&self) -> Duration {
        self.last_active
            .lock()
            .map(|last| last.elapsed())
            .unwrap_or_default()
    }
}

/// Manager for all live sessions
pub struct SessionManager {
    assistant: Arc<AssistantGateway>,
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionManager {
    pub fn new(assistant: Arc<AssistantGateway>) -> Self {
        Self {
            assistant,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a new session and return its id and initial state
    pub async fn create(&self) -> (String, SessionState) {
        let id = uuid::Uuid::new_v4().to_string();
        let initial = SessionState::default();

        let (event_tx, event_rx) = mpsc::channel(32);
        let (broadcast_tx, _) = broadcast::channel(128);
        let (state_tx, state_rx) = watch::channel(initial.clone());

        let runtime = SessionRuntime::new(
            SessionContext::new(&id, FAQ.len()),
            self.assistant.clone(),
            event_rx,
            &event_tx,
            broadcast_tx.clone(),
            state_tx,
        );

        tokio::spawn(runtime.run());

        self.sessions.write().await.insert(
            id.clone(),
            SessionHandle {
                event_tx,
                broadcast_tx,
                state_rx,
                last_active: Mutex::new(Instant::now()),
            },
        );

        tracing::info!(session_id = %id, "Session created");
        (id, initial)
    }

    /// Latest published state of a session
    pub async fn snapshot(&self, session_id: &str) -> Result<SessionState, RuntimeError> {
        let sessions = self.sessions.read().await;
        let handle = sessions
            .get(session_id)
            .ok_or_else(|| RuntimeError::SessionNotFound(session_id.to_string()))?;
        let state = handle.state_rx.borrow().clone();
        Ok(state)
    }

    /// Send an event to a session
    pub async fn send_event(&self, session_id: &str, event: Event) -> Result<(), RuntimeError> {
        let event_tx = {
            let sessions = self.sessions.read().await;
            let handle = sessions
                .get(session_id)
                .ok_or_else(|| RuntimeError::SessionNotFound(session_id.to_string()))?;
            handle.touch();
            handle.event_tx.clone()
        };

        event_tx
            .send(event)
            .await
            .map_err(|_| RuntimeError::SessionClosed(session_id.to_string()))
    }

    /// Subscribe to session updates, together with the state to start from
    pub async fn subscribe(
        &self,
        session_id: &str,
    ) -> Result<(SessionState, broadcast::Receiver<SseEvent>), RuntimeError> {
        let sessions = self.sessions.read().await;
        let handle = sessions
            .get(session_id)
            .ok_or_else(|| RuntimeError::SessionNotFound(session_id.to_string()))?;
        handle.touch();
        let rx = handle.broadcast_tx.subscribe();
        let state = handle.state_rx.borrow().clone();
        Ok((state, rx))
    }

    /// Watch the session's published state
    pub async fn watch(
        &self,
        session_id: &str,
    ) -> Result<watch::Receiver<SessionState>, RuntimeError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .map(|handle| handle.state_rx.clone())
            .ok_or_else(|| RuntimeError::SessionNotFound(session_id.to_string()))
    }

    /// End a session. An in-flight assistant call still settles, then the
    /// runtime stops.
    pub async fn end(&self, session_id: &str) -> Result<(), RuntimeError> {
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|_| tracing::info!(session_id = %session_id, "Session ended"))
            .ok_or_else(|| RuntimeError::SessionNotFound(session_id.to_string()))
    }

    /// End every unwatched session idle for longer than `max_idle`; returns
    /// how many
    pub async fn sweep_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| handle.is_watched() || handle.idle_for() <= max_idle);
        let swept = before - sessions.len();
        if swept > 0 {
            tracing::info!(swept, remaining = sessions.len(), "Swept idle sessions");
        }
        swept
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
