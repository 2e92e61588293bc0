//! Conversation state around the request client.
//!
//! Owns the message transcript, the in-flight flag, and the most recent
//! failure. One send call drives the full cycle: append the user message,
//! mark loading, clear any stale error, then either append the reply or
//! record the failure. Callers must not overlap send calls.

use tracing::{debug, warn};

use crate::client::AssistantClient;
use crate::error::AssistantError;
use crate::types::{Message, Purpose};

/// Transcript plus request status for one assistant session.
#[derive(Debug, Default, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    loading: bool,
    last_error: Option<String>,
}

impl Conversation {
    /// Messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing description of the most recent failure, cleared by the
    /// next send and by reset.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Drives a [`Conversation`] through the request client.
pub struct ConversationController {
    client: AssistantClient,
    state: Conversation,
}

impl ConversationController {
    pub fn new(client: AssistantClient) -> Self {
        Self {
            client,
            state: Conversation::default(),
        }
    }

    /// Current conversation state.
    pub fn state(&self) -> &Conversation {
        &self.state
    }

    /// Send one user query and fold the outcome into the conversation.
    ///
    /// Blank input is ignored without touching the state. A successful
    /// round trip appends exactly two messages (user then assistant); a
    /// failed one appends only the user message, records the failure, and
    /// returns it to the caller.
    pub async fn send(
        &mut self,
        content: &str,
        purpose: Purpose,
    ) -> Result<(), AssistantError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank input");
            return Ok(());
        }

        self.state.messages.push(Message::user(trimmed));
        self.state.loading = true;
        self.state.last_error = None;

        let outcome = self.client.send(trimmed, purpose).await;
        self.state.loading = false;

        match outcome {
            Ok(reply) => {
                self.state.messages.push(Message::assistant(reply));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Assistant request failed");
                self.state.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Clear the transcript and any recorded failure. Backend
    /// configuration and the loading flag are untouched.
    pub fn reset(&mut self) {
        self.state.messages.clear();
        self.state.last_error = None;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssistantConfig, ConfigStore};
    use crate::generator::{FixedPicker, ResponseGenerator};
    use crate::types::Sender;
    use std::sync::Arc;

    fn mock_controller() -> ConversationController {
        let store = Arc::new(ConfigStore::default());
        let client = AssistantClient::new(store)
            .with_generator(ResponseGenerator::with_picker(Box::new(FixedPicker(0))))
            .with_mock_mode(true);
        ConversationController::new(client)
    }

    fn failing_controller() -> ConversationController {
        // Nothing listens on port 1, so every send is Unreachable.
        let store = Arc::new(ConfigStore::new(AssistantConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            credential: String::new(),
            model: "default".to_string(),
        }));
        ConversationController::new(AssistantClient::new(store))
    }

    // ---- Successful sends ----

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let mut controller = mock_controller();
        controller.send("hello", Purpose::General).await.unwrap();

        let messages = controller.state().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].content, "hello");
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert!(!messages[1].content.is_empty());
    }

    #[tokio::test]
    async fn test_send_clears_loading_and_error() {
        let mut controller = mock_controller();
        controller.send("hello", Purpose::General).await.unwrap();
        assert!(!controller.state().is_loading());
        assert!(controller.state().last_error().is_none());
    }

    #[tokio::test]
    async fn test_messages_accumulate_across_sends() {
        let mut controller = mock_controller();
        controller.send("first", Purpose::General).await.unwrap();
        controller
            .send("5-day itinerary for Manali", Purpose::Itinerary)
            .await
            .unwrap();

        let messages = controller.state().messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].content, "5-day itinerary for Manali");
        assert!(messages[3].content.contains("Manali"));
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let mut controller = mock_controller();
        controller.send("  hello  ", Purpose::General).await.unwrap();
        assert_eq!(controller.state().messages()[0].content, "hello");
    }

    // ---- Blank input ----

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut controller = mock_controller();
        controller.send("   ", Purpose::General).await.unwrap();
        controller.send("", Purpose::General).await.unwrap();
        assert!(controller.state().messages().is_empty());
        assert!(controller.state().last_error().is_none());
    }

    // ---- Failed sends ----

    #[tokio::test]
    async fn test_failed_send_keeps_user_message_and_records_error() {
        let mut controller = failing_controller();
        let err = controller.send("hello", Purpose::General).await.unwrap_err();
        assert!(matches!(err, AssistantError::Unreachable { .. }));

        let state = controller.state();
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].sender, Sender::User);
        assert!(!state.is_loading());
        assert!(state.last_error().unwrap().contains("127.0.0.1:1"));
    }

    #[tokio::test]
    async fn test_next_send_clears_previous_error() {
        let mut controller = failing_controller();
        controller.send("first", Purpose::General).await.unwrap_err();
        assert!(controller.state().last_error().is_some());

        // Still failing, but the recorded error is from the new attempt:
        // it was cleared before the request went out.
        controller.send("second", Purpose::General).await.unwrap_err();
        assert_eq!(controller.state().messages().len(), 2);
        assert!(controller.state().last_error().is_some());
    }

    // ---- Reset ----

    #[tokio::test]
    async fn test_reset_clears_transcript_and_error_only() {
        let mut controller = failing_controller();
        controller.send("hello", Purpose::General).await.unwrap_err();
        controller.reset();

        let state = controller.state();
        assert!(state.messages().is_empty());
        assert!(state.last_error().is_none());
        // Reset does not touch the loading flag; send already left it false.
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_conversation_usable_after_reset() {
        let mut controller = mock_controller();
        controller.send("before", Purpose::General).await.unwrap();
        controller.reset();
        controller.send("after", Purpose::General).await.unwrap();

        let messages = controller.state().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "after");
    }
}
