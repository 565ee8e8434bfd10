//! Core domain types for embedchat: chat messages, widget sessions, the
//! pure widget runtime state machine, message-markup formatting, and
//! environment configuration.
//!
//! Everything here is I/O-free. HTTP collaborators live in
//! `embedchat-client`, file extraction in `embedchat-extract`, and the
//! standalone bundle generator in `embedchat-codegen`.

pub mod agent;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod session;
pub mod widget;

// Re-export common error type
pub use error::{EmbedChatError, Result};
