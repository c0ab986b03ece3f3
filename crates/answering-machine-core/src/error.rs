//! Error types for the Answering Machine

use thiserror::Error;

use crate::types::DraftError;

/// Main error type for Answering Machine operations
#[derive(Error, Debug)]
pub enum MachineError {
    /// The caller has no authenticated session
    #[error("Not signed in")]
    Unauthenticated,

    /// The backend rejected or failed the request
    #[error("Backend error: {0}")]
    Backend(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error during local storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Draft content outside the accepted bounds
    #[error("Invalid message: {0}")]
    InvalidDraft(#[from] DraftError),
}

impl From<serde_json::Error> for MachineError {
    fn from(err: serde_json::Error) -> Self {
        MachineError::Serialization(err.to_string())
    }
}

/// Result type alias using MachineError
pub type MachineResult<T> = Result<T, MachineError>;
