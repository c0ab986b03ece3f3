//! Client configuration shared by the desktop and CLI hosts.

use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::{HttpBackend, LocalBackend, SharedBackend};
use crate::error::{MachineError, MachineResult};
use crate::types::Session;

/// Caller name used when only a token is configured.
pub const DEFAULT_CALLER: &str = "me";

/// Where messages live and who is asking.
///
/// With an `endpoint` the remote HTTP backend is used, otherwise the local
/// redb store under `data_dir`. A session is authenticated when either a
/// `user` or a `token` is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub user: Option<String>,
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            user: None,
            data_dir: default_data_dir(),
        }
    }
}

impl ClientConfig {
    /// Session capability handed to views at activation.
    pub fn session(&self) -> Session {
        let user = self
            .user
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        match (user, token) {
            (None, None) => Session::Anonymous,
            (user, token) => Session::Authenticated {
                caller: user.unwrap_or(DEFAULT_CALLER).to_string(),
                token: token.map(str::to_string),
            },
        }
    }

    /// Build the configured backend.
    pub fn backend(&self) -> MachineResult<SharedBackend> {
        match self.endpoint.as_deref().map(str::trim) {
            Some("") => Err(MachineError::Config("endpoint is empty".to_string())),
            Some(endpoint) => {
                tracing::info!("Using remote backend at {}", endpoint);
                Ok(Arc::new(HttpBackend::new(endpoint)?))
            }
            None => {
                tracing::info!("Using local backend in {:?}", self.data_dir);
                Ok(Arc::new(LocalBackend::open_in(&self.data_dir)?))
            }
        }
    }
}

/// Default data directory (`<platform data dir>/answering-machine`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("answering-machine")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> ClientConfig {
        ClientConfig {
            data_dir: PathBuf::from("/tmp/unused"),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_no_credentials_is_anonymous() {
        assert_eq!(config().session(), Session::Anonymous);

        let blank = ClientConfig {
            user: Some("  ".to_string()),
            ..config()
        };
        assert_eq!(blank.session(), Session::Anonymous);
    }

    #[test]
    fn test_user_makes_session_authenticated() {
        let cfg = ClientConfig {
            user: Some("alice".to_string()),
            ..config()
        };
        assert_eq!(cfg.session(), Session::authenticated("alice"));
    }

    #[test]
    fn test_token_only_uses_default_caller() {
        let cfg = ClientConfig {
            token: Some("abc".to_string()),
            ..config()
        };
        assert_eq!(cfg.session(), Session::with_token(DEFAULT_CALLER, "abc"));
    }

    #[test]
    fn test_endpoint_selects_http_backend() {
        let cfg = ClientConfig {
            endpoint: Some("https://api.example.com".to_string()),
            ..config()
        };
        assert_eq!(cfg.backend().unwrap().name(), "http");
    }

    #[test]
    fn test_bad_endpoint_is_config_error() {
        let cfg = ClientConfig {
            endpoint: Some("ftp://nope".to_string()),
            ..config()
        };
        assert!(matches!(cfg.backend(), Err(MachineError::Config(_))));
    }

    #[test]
    fn test_default_backend_is_local() {
        let dir = TempDir::new().unwrap();
        let cfg = ClientConfig {
            data_dir: dir.path().to_path_buf(),
            ..ClientConfig::default()
        };
        assert_eq!(cfg.backend().unwrap().name(), "local");
    }
}
