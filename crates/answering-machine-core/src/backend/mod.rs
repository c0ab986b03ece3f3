//! Backend collaborator: list and create messages for the current caller.
//!
//! Views never talk to a transport directly. They go through
//! [`MessageBackend`], which has three implementations:
//!
//! - [`MemoryBackend`]: in-process store with failure injection, for tests
//! - [`LocalBackend`]: persistent redb store for offline use
//! - [`HttpBackend`]: REST client for a remote API

mod http;
mod local;
mod memory;

pub use http::HttpBackend;
pub use local::LocalBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::MachineResult;
use crate::types::{Message, NewMessage, Session};

/// Request/response API used by the message views.
#[async_trait]
pub trait MessageBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// All messages of the session's caller, in backend order.
    async fn list_messages(&self, session: &Session) -> MachineResult<Vec<Message>>;

    /// Store a new message.
    ///
    /// `Ok` means the backend accepted it. The persisted record comes back
    /// when the backend echoes one; callers must not depend on it.
    async fn create_message(
        &self,
        session: &Session,
        request: NewMessage,
    ) -> MachineResult<Option<Message>>;
}

/// Backend handle shared between views.
pub type SharedBackend = Arc<dyn MessageBackend>;
