//! In-app widget driver.
//!
//! Couples the pure state machine from `embedchat-core` to the chat client:
//! UI stimuli go in, effects come out, the one permitted in-flight request
//! is executed here, and its outcome is fed back as a `Completed` event.
//! The generated standalone script mirrors this wiring in JavaScript.

use embedchat_core::session::Session;
use embedchat_core::widget::{SendEffect, SendResult, WidgetEvent, WidgetState};
use tracing::warn;

use crate::chat::{ChatClient, ChatReply};

/// One live widget instance: state machine, session identity, chat client.
#[derive(Debug)]
pub struct ChatWidget {
    state: WidgetState,
    session: Session,
    client: ChatClient,
}

impl ChatWidget {
    pub fn new(client: ChatClient, session: Session) -> Self {
        Self {
            state: WidgetState::new(),
            session,
            client,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Bubble click.
    pub fn toggle(&mut self) {
        self.state.apply(WidgetEvent::Toggle);
    }

    /// Replaces the input draft.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.apply(WidgetEvent::DraftChanged(text.into()));
    }

    /// Enter key in the input. Plain Enter dispatches a send; Shift+Enter
    /// leaves a newline in the draft.
    pub async fn press_enter(&mut self, shift: bool) {
        let effect = self.state.apply(WidgetEvent::EnterPressed { shift });
        self.run_effect(effect).await;
    }

    /// Send button click.
    pub async fn send(&mut self) {
        let effect = self.state.apply(WidgetEvent::SendClicked);
        self.run_effect(effect).await;
    }

    /// Executes the send effect, if the state machine permitted one, and
    /// applies the outcome. Failures never escape this method: both
    /// application-level and transport errors become an inline bubble.
    async fn run_effect(&mut self, effect: Option<SendEffect>) {
        let Some(SendEffect { message }) = effect else {
            return;
        };

        let result = match self.client.send_message(&self.session, &message).await {
            Ok(ChatReply::History(history)) => SendResult::History(history),
            Ok(ChatReply::Error(error)) => SendResult::ApiError(error),
            Err(err) => {
                warn!(
                    target: "embedchat::widget",
                    session_id = %self.session.session_id,
                    error = %err,
                    "Chat request failed"
                );
                SendResult::TransportError
            }
        };

        self.state.apply(WidgetEvent::Completed(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedchat_core::widget::CONNECTIVITY_ERROR;

    fn widget() -> ChatWidget {
        // Port 1 is never listening; every send resolves as a transport
        // failure, which is exactly what these tests exercise.
        let client = ChatClient::new("http://127.0.0.1:1");
        ChatWidget::new(client, Session::new("sub-1", "agent-1"))
    }

    #[tokio::test]
    async fn test_send_while_closed_is_noop() {
        let mut widget = widget();
        widget.set_draft("hello");
        widget.send().await;
        assert!(widget.state().messages.is_empty());
        assert!(!widget.state().sending);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_inline_bubble() {
        let mut widget = widget();
        widget.toggle();
        widget.set_draft("hello");
        widget.send().await;

        let messages = &widget.state().messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "hello");
        assert!(messages[1].error);
        assert_eq!(messages[1].content, CONNECTIVITY_ERROR);
        // The widget is usable for the next attempt.
        assert!(!widget.state().sending);
    }

    #[tokio::test]
    async fn test_shift_enter_never_dispatches() {
        let mut widget = widget();
        widget.toggle();
        widget.set_draft("line");
        widget.press_enter(true).await;
        assert_eq!(widget.state().draft, "line\n");
        assert!(widget.state().messages.is_empty());
    }
}
