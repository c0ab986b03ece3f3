//! Session capability supplied by the host at activation time.

use serde::{Deserialize, Serialize};

use crate::error::{MachineError, MachineResult};

/// Who is looking at the screen.
///
/// The host router hands one of these to a view when it activates it. Views
/// branch on it once and never poll for changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Session {
    /// Visitor without credentials. Sees the landing page only.
    #[default]
    Anonymous,
    /// Signed-in caller.
    Authenticated {
        /// Caller identity; scopes which messages are listed
        caller: String,
        /// Bearer token for remote backends
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },
}

impl Session {
    pub fn authenticated(caller: impl Into<String>) -> Self {
        Session::Authenticated {
            caller: caller.into(),
            token: None,
        }
    }

    pub fn with_token(caller: impl Into<String>, token: impl Into<String>) -> Self {
        Session::Authenticated {
            caller: caller.into(),
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn caller(&self) -> Option<&str> {
        match self {
            Session::Authenticated { caller, .. } => Some(caller),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => token.as_deref(),
            Session::Anonymous => None,
        }
    }

    /// The caller identity, or `Unauthenticated` for visitors.
    pub fn require_caller(&self) -> MachineResult<&str> {
        self.caller().ok_or(MachineError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.caller().is_none());
        assert!(matches!(
            session.require_caller(),
            Err(MachineError::Unauthenticated)
        ));
    }

    #[test]
    fn test_authenticated_accessors() {
        let session = Session::with_token("alice", "t0k3n");
        assert!(session.is_authenticated());
        assert_eq!(session.caller(), Some("alice"));
        assert_eq!(session.token(), Some("t0k3n"));
        assert_eq!(session.require_caller().unwrap(), "alice");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Session::authenticated("bob")).unwrap();
        assert_eq!(json, r#"{"kind":"authenticated","caller":"bob"}"#);
    }
}
