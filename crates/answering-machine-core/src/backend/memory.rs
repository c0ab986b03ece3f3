//! In-process backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::MessageBackend;
use crate::error::{MachineError, MachineResult};
use crate::types::{Message, MessageId, NewMessage, Session};

/// Messages held in memory, per caller, in insertion order.
///
/// Counts every call and can be told to fail, so tests can check exactly
/// how many requests a view issued and how it copes with errors.
#[derive(Default)]
pub struct MemoryBackend {
    messages: Mutex<HashMap<String, Vec<Message>>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    list_failure: Mutex<Option<String>>,
    create_failure: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a caller's messages.
    pub fn seed(&self, caller: &str, messages: Vec<Message>) {
        self.messages
            .lock()
            .entry(caller.to_string())
            .or_default()
            .extend(messages);
    }

    /// Make every list call fail with `reason` (or succeed again with `None`).
    pub fn fail_lists(&self, reason: Option<&str>) {
        *self.list_failure.lock() = reason.map(str::to_string);
    }

    /// Make every create call fail with `reason` (or succeed again with `None`).
    pub fn fail_creates(&self, reason: Option<&str>) {
        *self.create_failure.lock() = reason.map(str::to_string);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Stored messages for a caller.
    pub fn stored(&self, caller: &str) -> Vec<Message> {
        self.messages.lock().get(caller).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl MessageBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_messages(&self, session: &Session) -> MachineResult<Vec<Message>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let caller = session.require_caller()?;
        if let Some(reason) = self.list_failure.lock().clone() {
            return Err(MachineError::Backend(reason));
        }
        Ok(self.stored(caller))
    }

    async fn create_message(
        &self,
        session: &Session,
        request: NewMessage,
    ) -> MachineResult<Option<Message>> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let caller = session.require_caller()?;
        if let Some(reason) = self.create_failure.lock().clone() {
            return Err(MachineError::Backend(reason));
        }
        let message = Message::new(MessageId::generate(), request.content, Utc::now());
        self.messages
            .lock()
            .entry(caller.to_string())
            .or_default()
            .push(message.clone());
        Ok(Some(message))
    }
}
