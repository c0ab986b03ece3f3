//! Answering Machine Core Library
//!
//! Message lifecycle logic for a small "leave me a message" client.
//!
//! ## Overview
//!
//! Visitors see a landing page. Signed-in callers see the messages they left
//! and can leave a new one through a validated form. Two views carry all the
//! state:
//!
//! - **Composer** ([`composer`]): `Editing → Submitting → {Done, Editing}`
//! - **Message list** ([`message_list`]): `Loading → Loaded`, once per activation
//!
//! Both are pure reducers over serializable state values. Backend calls and
//! navigation come back as effects; [`controller`] runs them for headless
//! hosts, and the desktop app runs them from its components.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use answering_machine_core::{ComposerController, MemoryBackend, Session};
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let mut composer = ComposerController::new(backend, Session::authenticated("alice"));
//!
//! composer.edit("Call me back!").await;
//! let nav = composer.submit().await; // [NavRequest::ToList]
//! ```

pub mod backend;
pub mod composer;
pub mod config;
pub mod controller;
pub mod error;
pub mod message_list;
pub mod navigation;
pub mod reducer;
pub mod types;

// Re-exports
pub use backend::{HttpBackend, LocalBackend, MemoryBackend, MessageBackend, SharedBackend};
pub use composer::{ComposerEffect, ComposerEvent, ComposerPhase, ComposerState, ComposerView, SubmitTicket};
pub use config::ClientConfig;
pub use controller::{perform_create, perform_fetch, ComposerController, MessageListController};
pub use error::{MachineError, MachineResult};
pub use message_list::{ActivationId, ListEffect, ListEvent, ListPhase, ListRow, ListState, ListView};
pub use navigation::NavRequest;
pub use reducer::{Notice, NoticeKind, Transition};
pub use types::*;
