//! HTTP collaborators and the in-app widget driver.
//!
//! - [`chat::ChatClient`] — one request/response exchange with the chat
//!   completion endpoint.
//! - [`extract::ExtractionClient`] — multipart upload to the backend PDF
//!   text-extraction endpoint.
//! - [`widget::ChatWidget`] — drives the pure state machine from
//!   `embedchat-core` against the chat client.

pub mod chat;
pub mod extract;
pub mod widget;

pub use chat::{ChatClient, ChatReply};
pub use extract::ExtractionClient;
pub use widget::ChatWidget;
