//! View components for the Answering Machine.

pub mod messages;

pub use messages::{MessageForm, MessageTable};
