//! Shared pieces of the view state machines.
//!
//! Each view keeps its state in a plain value and moves between states with a
//! pure `reduce(state, event)` function. Side effects come back as data in a
//! [`Transition`] for the host to perform.

use serde::{Deserialize, Serialize};

/// Result of feeding one event to a reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    /// New state, nothing to do.
    pub fn stay(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

/// Which operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    FetchFailed,
    SubmitFailed,
}

/// A user-visible failure notification. Dismissible, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn fetch_failed(detail: impl AsRef<str>) -> Self {
        Self {
            kind: NoticeKind::FetchFailed,
            text: format!("Could not load your messages: {}", detail.as_ref()),
        }
    }

    pub fn submit_failed(detail: impl AsRef<str>) -> Self {
        Self {
            kind: NoticeKind::SubmitFailed,
            text: format!("Your message was not sent: {}", detail.as_ref()),
        }
    }
}
