//! Core types for the Answering Machine.

pub mod message;
pub mod session;

pub use message::{Draft, DraftError, Message, MessageId, NewMessage, MAX_CONTENT_CHARS};
pub use session::Session;
