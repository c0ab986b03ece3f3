//! Persistent local backend using redb.
//!
//! Layout:
//! - `messages`: key `"<caller>\0<seq:020>"`, value JSON-encoded [`Message`]
//! - `meta`: `next_seq` counter, bumped in the same transaction as the insert
//!
//! The zero-padded sequence keeps a caller's keys in insertion order, which is
//! the order [`LocalBackend::list_messages`] returns.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use super::MessageBackend;
use crate::error::{MachineError, MachineResult};
use crate::types::{Message, MessageId, NewMessage, Session};

const MESSAGES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("messages");
const META_TABLE: TableDefinition<&str, u64> = TableDefinition::new("meta");

const NEXT_SEQ_KEY: &str = "next_seq";

/// File name used inside the data directory.
pub const LOCAL_DB_FILE: &str = "messages.redb";

#[derive(Clone)]
pub struct LocalBackend {
    db: Arc<RwLock<Database>>,
}

impl LocalBackend {
    /// Open (or create) the store at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> MachineResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(MESSAGES_TABLE)?;
            let _ = write_txn.open_table(META_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!("Opened local message store at {:?}", path);

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the store inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> MachineResult<Self> {
        Self::open(data_dir.as_ref().join(LOCAL_DB_FILE))
    }

    fn caller_prefix(caller: &str) -> MachineResult<String> {
        if caller.is_empty() || caller.contains('\0') {
            return Err(MachineError::Storage(format!("invalid caller id: {:?}", caller)));
        }
        Ok(format!("{}\0", caller))
    }

    fn load(&self, caller: &str) -> MachineResult<Vec<Message>> {
        let prefix = Self::caller_prefix(caller)?;
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(MESSAGES_TABLE)?;

        // A caller's keys are contiguous, so stop at the first foreign key
        let mut messages = Vec::new();
        for entry in table.range(prefix.as_str()..)? {
            let (key, value) = entry?;
            if !key.value().starts_with(prefix.as_str()) {
                break;
            }
            let message: Message = serde_json::from_slice(value.value())?;
            messages.push(message);
        }
        Ok(messages)
    }

    fn store(&self, caller: &str, message: &Message) -> MachineResult<()> {
        let prefix = Self::caller_prefix(caller)?;
        let data = serde_json::to_vec(message)?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut meta = write_txn.open_table(META_TABLE)?;
            let seq = meta.get(NEXT_SEQ_KEY)?.map(|v| v.value()).unwrap_or(0);
            meta.insert(NEXT_SEQ_KEY, seq + 1)?;

            let mut table = write_txn.open_table(MESSAGES_TABLE)?;
            let key = format!("{}{:020}", prefix, seq);
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[async_trait]
impl MessageBackend for LocalBackend {
    fn name(&self) -> &str {
        "local"
    }

    async fn list_messages(&self, session: &Session) -> MachineResult<Vec<Message>> {
        let caller = session.require_caller()?;
        self.load(caller)
    }

    async fn create_message(
        &self,
        session: &Session,
        request: NewMessage,
    ) -> MachineResult<Option<Message>> {
        let caller = session.require_caller()?;
        let message = Message::new(MessageId::generate(), request.content, Utc::now());
        self.store(caller, &message)?;
        tracing::debug!(id = %message.id(), "Stored message locally");
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_backend() -> (LocalBackend, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = LocalBackend::open_in(temp_dir.path()).unwrap();
        (backend, temp_dir)
    }

    fn new_message(content: &str) -> NewMessage {
        NewMessage {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join(LOCAL_DB_FILE);
        LocalBackend::open(&path).unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_list_is_insertion_order() {
        let (backend, _dir) = create_test_backend();
        let session = Session::authenticated("alice");

        for content in ["first", "second", "third", "fourth"] {
            backend.create_message(&session, new_message(content)).await.unwrap();
        }

        let listed = backend.list_messages(&session).await.unwrap();
        let contents: Vec<_> = listed.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third", "fourth"]);
    }

    #[tokio::test]
    async fn test_callers_do_not_share_messages() {
        let (backend, _dir) = create_test_backend();
        backend
            .create_message(&Session::authenticated("alice"), new_message("a"))
            .await
            .unwrap();
        backend
            .create_message(&Session::authenticated("alice2"), new_message("b"))
            .await
            .unwrap();

        let alice = backend.list_messages(&Session::authenticated("alice")).await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].content(), "a");
    }

    #[tokio::test]
    async fn test_list_stops_at_neighbouring_callers() {
        let (backend, _dir) = create_test_backend();

        // "al" and "alice0" sort on either side of "alice"
        for (caller, content) in [("alice0", "after"), ("al", "before"), ("alice", "mine"), ("bob", "b")] {
            backend
                .create_message(&Session::authenticated(caller), new_message(content))
                .await
                .unwrap();
        }
        backend
            .create_message(&Session::authenticated("alice"), new_message("mine too"))
            .await
            .unwrap();

        let alice = backend.list_messages(&Session::authenticated("alice")).await.unwrap();
        let contents: Vec<_> = alice.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["mine", "mine too"]);

        let al = backend.list_messages(&Session::authenticated("al")).await.unwrap();
        assert_eq!(al.len(), 1);
        assert_eq!(al[0].content(), "before");
    }

    #[tokio::test]
    async fn test_messages_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let session = Session::authenticated("alice");

        let created = {
            let backend = LocalBackend::open_in(temp_dir.path()).unwrap();
            backend
                .create_message(&session, new_message("persist me"))
                .await
                .unwrap()
                .unwrap()
        };

        let reopened = LocalBackend::open_in(temp_dir.path()).unwrap();
        let listed = reopened.list_messages(&session).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_anonymous_is_rejected() {
        let (backend, _dir) = create_test_backend();
        let result = backend.create_message(&Session::Anonymous, new_message("x")).await;
        assert!(matches!(result, Err(MachineError::Unauthenticated)));
    }
}
