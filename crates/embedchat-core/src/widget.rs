//! Pure widget runtime state machine.
//!
//! This module owns every transition of the floating chat bubble:
//! `Closed` → `Open(idle)` → `Open(sending)` → `Open(idle)` → `Closed`.
//! It performs no I/O. Sends come out as a [`SendEffect`] which the driver
//! (in `embedchat-client`) executes against the chat endpoint, feeding the
//! outcome back through [`WidgetEvent::Completed`]. The generated standalone
//! script reimplements exactly these transitions in JavaScript.

use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Error bubble shown when the backend cannot be reached at all.
pub const CONNECTIVITY_ERROR: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

/// Whether the chat panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelState {
    Closed,
    Open,
}

/// Inputs to the state machine, one per user or network stimulus.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// Bubble click: open a closed panel or close an open one.
    Toggle,
    /// The input's text changed; replaces the current draft.
    DraftChanged(String),
    /// Enter pressed in the input. Plain Enter sends; Shift+Enter inserts
    /// a literal newline into the draft instead.
    EnterPressed { shift: bool },
    /// Send control clicked.
    SendClicked,
    /// The in-flight request resolved, successfully or not.
    Completed(SendResult),
}

/// Outcome of one chat exchange, fed back into the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// Server-authoritative conversation history; replaces the whole list.
    History(Vec<ChatMessage>),
    /// Backend reachable but reported `success: false`.
    ApiError(String),
    /// Network failure, non-2xx status, or malformed body.
    TransportError,
}

/// Instruction to the driver: perform one chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEffect {
    /// Trimmed message text to send.
    pub message: String,
}

/// In-memory state of one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub panel: PanelState,
    /// True strictly between dispatching a send and its resolution.
    /// At most one send is outstanding at a time.
    pub sending: bool,
    pub draft: String,
    /// Notification dot on the bubble; cleared on first user-initiated open.
    pub unread_badge: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    /// A freshly instantiated widget: closed, empty, badge showing.
    pub fn new() -> Self {
        Self {
            panel: PanelState::Closed,
            sending: false,
            draft: String::new(),
            unread_badge: true,
            messages: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// Applies one event and returns the effect to execute, if any.
    ///
    /// Only a legal send produces an effect. Illegal sends (panel closed,
    /// blank draft, or a request already outstanding) are no-ops — they are
    /// neither queued nor parallelized.
    pub fn apply(&mut self, event: WidgetEvent) -> Option<SendEffect> {
        match event {
            WidgetEvent::Toggle => {
                self.panel = match self.panel {
                    PanelState::Closed => {
                        self.unread_badge = false;
                        PanelState::Open
                    }
                    PanelState::Open => PanelState::Closed,
                };
                None
            }
            WidgetEvent::DraftChanged(text) => {
                self.draft = text;
                None
            }
            WidgetEvent::EnterPressed { shift: true } => {
                self.draft.push('\n');
                None
            }
            WidgetEvent::EnterPressed { shift: false } | WidgetEvent::SendClicked => {
                self.try_send()
            }
            WidgetEvent::Completed(result) => {
                // Applies even while closed: a late response must not reopen
                // the panel, it simply waits unrendered until the next open.
                self.sending = false;
                match result {
                    SendResult::History(history) => self.messages = history,
                    SendResult::ApiError(error) => self.messages.push(ChatMessage::error(error)),
                    SendResult::TransportError => {
                        self.messages.push(ChatMessage::error(CONNECTIVITY_ERROR))
                    }
                }
                None
            }
        }
    }

    fn try_send(&mut self) -> Option<SendEffect> {
        if self.panel != PanelState::Open || self.sending {
            return None;
        }
        let message = self.draft.trim().to_string();
        if message.is_empty() {
            return None;
        }
        // Optimistic: show the user's message and clear the draft before the
        // response arrives.
        self.messages.push(ChatMessage::user(message.clone()));
        self.draft.clear();
        self.sending = true;
        Some(SendEffect { message })
    }
}
