//! REST backend.
//!
//! - `GET  {base}/message` → JSON array of messages
//! - `POST {base}/message` with `{"content": "..."}` → any 2xx is success
//!
//! The session token, when present, is sent as a bearer credential. Create
//! responses are decoded as a message when they look like one; other bodies
//! are ignored.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use super::MessageBackend;
use crate::error::{MachineError, MachineResult};
use crate::types::{Message, NewMessage, Session};

const MESSAGES_PATH: &str = "message";

pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Create a client for `base_url` (scheme required, trailing slash optional).
    pub fn new(base_url: impl Into<String>) -> MachineResult<Self> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(MachineError::Config(format!(
                "endpoint must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn messages_url(&self) -> String {
        format!("{}/{}", self.base_url, MESSAGES_PATH)
    }

    fn authorize(request: RequestBuilder, session: &Session) -> RequestBuilder {
        match session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: Response) -> MachineResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(MachineError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl MessageBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_messages(&self, session: &Session) -> MachineResult<Vec<Message>> {
        session.require_caller()?;
        let request = Self::authorize(self.client.get(self.messages_url()), session);
        let response = Self::check(request.send().await?).await?;
        let messages: Vec<Message> = response.json().await?;
        Ok(messages)
    }

    async fn create_message(
        &self,
        session: &Session,
        request: NewMessage,
    ) -> MachineResult<Option<Message>> {
        session.require_caller()?;
        let builder = Self::authorize(self.client.post(self.messages_url()).json(&request), session);
        let response = Self::check(builder.send().await?).await?;

        // The message is stored at this point; a body we can't read changes nothing
        let body = response.bytes().await.unwrap_or_default();
        match serde_json::from_slice::<Message>(&body) {
            Ok(message) => Ok(Some(message)),
            Err(e) => {
                tracing::debug!("Create response is not a message ({}), ignoring body", e);
                Ok(None)
            }
        }
    }
}
