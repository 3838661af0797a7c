//! Health AI assistant gateway
//!
//! One stateless call per question: the prior transcript is replayed
//! verbatim, the question is appended as the final user turn, and the
//! fixed system instruction rides out of band. Failures never reach the
//! caller; they become [`FALLBACK_REPLY`].

use crate::llm::{LlmError, LlmMessage, LlmRequest, LlmService};
use crate::state_machine::{Role, Turn};
use crate::system_prompt::build_system_prompt;
use std::sync::Arc;

/// Model used for every assistant call
pub const ASSISTANT_MODEL: &str = "gemini-3-flash-preview";

/// Sampling temperature for every assistant call
pub const ASSISTANT_TEMPERATURE: f32 = 0.7;

/// Reply used when the model cannot be reached or errors out
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting right now. Please call Renice Medical Centre directly at +254 707 167 434 for any health inquiries.";

pub struct AssistantGateway {
    llm: Arc<dyn LlmService>,
    system_instruction: String,
}

impl AssistantGateway {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self {
            llm,
            system_instruction: build_system_prompt(),
        }
    }

    /// Ask the assistant a question.
    ///
    /// Returns the reply text, `None` when the model answered without text,
    /// or the fallback apology on any failure.
    pub async fn ask(&self, utterance: &str, prior: &[Turn]) -> Option<String> {
        match self.try_ask(utterance, prior).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = ?e.kind,
                    "Assistant call failed, replying with fallback"
                );
                Some(FALLBACK_REPLY.to_string())
            }
        }
    }

    /// The raw call, with the failure still visible
    pub async fn try_ask(
        &self,
        utterance: &str,
        prior: &[Turn],
    ) -> Result<Option<String>, LlmError> {
        let request = self.build_request(utterance, prior);
        let response = self.llm.complete(&request).await?;
        Ok(response.text)
    }

    fn build_request(&self, utterance: &str, prior: &[Turn]) -> LlmRequest {
        let mut messages: Vec<LlmMessage> = prior
            .iter()
            .map(|turn| match turn.role {
                Role::User => LlmMessage::user(turn.text.clone()),
                Role::Model => LlmMessage::model(turn.text.clone()),
            })
            .collect();
        messages.push(LlmMessage::user(utterance));

        LlmRequest {
            system: Some(self.system_instruction.clone()),
            messages,
            temperature: Some(ASSISTANT_TEMPERATURE),
        }
    }

    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockLlmService;
    use crate::llm::{LlmError, LlmErrorKind, LlmResponse, MessageRole};

    fn gateway() -> (Arc<MockLlmService>, AssistantGateway) {
        let mock = Arc::new(MockLlmService::new());
        let gateway = AssistantGateway::new(mock.clone());
        (mock, gateway)
    }

    #[tokio::test]
    async fn test_request_replays_prior_then_utterance() {
        let (mock, gateway) = gateway();
        mock.queue_text("We are open 24/7.");

        let prior = vec![Turn::model("Hello!")];
        gateway.ask("What are your hours?", &prior).await;

        let requests = mock.recorded_requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::Model);
        assert_eq!(request.messages[0].text, "Hello!");
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(request.messages[1].text, "What are your hours?");

        let system = request.system.as_deref().unwrap();
        assert!(system.contains("not a doctor"));
        assert!(system.contains("+254 707 167 434"));
        assert_eq!(request.temperature, Some(ASSISTANT_TEMPERATURE));
    }

    #[tokio::test]
    async fn test_empty_prior_sends_only_utterance() {
        let (mock, gateway) = gateway();
        mock.queue_text("Hi");

        gateway.ask("Hello", &[]).await;

        let request = &mock.recorded_requests()[0];
        assert_eq!(request.messages, vec![LlmMessage::user("Hello")]);
    }

    #[tokio::test]
    async fn test_success_text_is_returned_unmodified() {
        let (mock, gateway) = gateway();
        mock.queue_text("We are open 24/7.");

        let reply = gateway.ask("Hours?", &[Turn::model("Hello!")]).await;
        assert_eq!(reply.as_deref(), Some("We are open 24/7."));
    }

    #[tokio::test]
    async fn test_failure_returns_fallback() {
        let (mock, gateway) = gateway();
        mock.queue_error(LlmError::network("connection refused"));

        let reply = gateway.ask("Hours?", &[]).await;
        assert_eq!(reply.as_deref(), Some(FALLBACK_REPLY));
        assert!(FALLBACK_REPLY.contains("+254 707 167 434"));
    }

    #[tokio::test]
    async fn test_every_error_kind_collapses_to_fallback() {
        let (mock, gateway) = gateway();
        mock.queue_error(LlmError::auth("bad key"));
        mock.queue_error(LlmError::new(LlmErrorKind::RateLimit, "quota"));
        mock.queue_error(LlmError::unknown("malformed"));

        for _ in 0..3 {
            let reply = gateway.ask("Hours?", &[]).await;
            assert_eq!(reply.as_deref(), Some(FALLBACK_REPLY));
        }
    }

    #[tokio::test]
    async fn test_no_text_is_not_a_failure() {
        let (mock, gateway) = gateway();
        mock.queue_response(LlmResponse::default());

        assert_eq!(gateway.ask("Hours?", &[]).await, None);
    }

    #[tokio::test]
    async fn test_try_ask_surfaces_error() {
        let (mock, gateway) = gateway();
        mock.queue_error(LlmError::new(LlmErrorKind::ServerError, "503"));

        let err = gateway.try_ask("Hours?", &[]).await.unwrap_err();
        assert_eq!(err.kind, LlmErrorKind::ServerError);
    }
}
