//! Navigation requests issued by views to the host router.

use serde::{Deserialize, Serialize};

/// An instruction to the router to switch the displayed view.
///
/// Views never touch navigation history; they only ask for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavRequest {
    /// Show the message list (or landing page for visitors)
    ToList,
    /// Show the message composer
    ToComposer,
}

impl NavRequest {
    /// Path the desktop router mounts for this destination.
    pub fn path(&self) -> &'static str {
        match self {
            NavRequest::ToList => "/",
            NavRequest::ToComposer => "/message",
        }
    }
}
