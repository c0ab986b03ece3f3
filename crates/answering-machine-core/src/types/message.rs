//! Message types: the mutable [`Draft`] and the persisted [`Message`].
//!
//! A message is either a draft (no id, no creation time, editable content)
//! or persisted (assigned an id and timestamp by the backend and never
//! modified by the client). The two states are separate types so a draft
//! can't be mistaken for a stored record.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Longest accepted message, in Unicode scalar values (`char`s).
///
/// This is not a UTF-16 code-unit count: a message of 60 emoji outside the
/// Basic Multilingual Plane is 60 characters here, though a browser's
/// `String.length` would report 120 and reject it.
pub const MAX_CONTENT_CHARS: usize = 99;

/// Opaque, backend-assigned message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, time-ordered id.
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a draft can't be submitted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("message is empty")]
    Empty,
    #[error("message is {len} characters, the limit is {max}", max = MAX_CONTENT_CHARS)]
    TooLong { len: usize },
}

/// An unsaved message being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    content: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content verbatim. No trimming.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Content length in `char`s. See [`MAX_CONTENT_CHARS`].
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check the length bounds: at least one and at most [`MAX_CONTENT_CHARS`].
    pub fn validate(&self) -> Result<(), DraftError> {
        match self.len() {
            0 => Err(DraftError::Empty),
            len if len > MAX_CONTENT_CHARS => Err(DraftError::TooLong { len }),
            _ => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Characters left before the limit; negative once over it.
    pub fn remaining(&self) -> i64 {
        MAX_CONTENT_CHARS as i64 - self.len() as i64
    }

    /// Build the create request for this draft.
    pub fn to_request(&self) -> NewMessage {
        NewMessage {
            content: self.content.clone(),
        }
    }
}

/// Body of a create-message request. Only the content is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub content: String,
}

/// A message confirmed stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    message_id: MessageId,
    content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(message_id: MessageId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            message_id,
            content: content.into(),
            created_at,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.message_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// First line of the content, with surrounding whitespace trimmed.
    ///
    /// Returns strings like `"hello"` for `"hello\nworld"`.
    pub fn first_line(&self) -> &str {
        self.content
            .trim()
            .lines()
            .next()
            .unwrap_or("")
    }
}

/// Accepts either an RFC 3339 string or epoch milliseconds.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Millis(i64),
        Text(String),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", ms))),
        Timestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str) -> Draft {
        let mut d = Draft::new();
        d.set_content(content);
        d
    }

    #[test]
    fn test_new_draft_is_empty_and_invalid() {
        let d = Draft::new();
        assert!(d.is_empty());
        assert_eq!(d.validate(), Err(DraftError::Empty));
    }

    #[test]
    fn test_length_boundaries() {
        assert!(!draft("").is_valid());
        assert!(draft("a").is_valid());
        assert!(draft(&"a".repeat(99)).is_valid());
        assert_eq!(
            draft(&"a".repeat(100)).validate(),
            Err(DraftError::TooLong { len: 100 })
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 99 two-byte characters are still within the limit
        let d = draft(&"é".repeat(99));
        assert_eq!(d.len(), 99);
        assert!(d.is_valid());
    }

    #[test]
    fn test_astral_characters_count_once() {
        let d = draft(&"😀".repeat(60));
        assert_eq!(d.len(), 60);
        assert!(d.is_valid());

        let d = draft(&"😀".repeat(100));
        assert_eq!(d.validate(), Err(DraftError::TooLong { len: 100 }));
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let d = draft("  hi  \n");
        assert_eq!(d.content(), "  hi  \n");
        assert_eq!(d.to_request().content, "  hi  \n");
    }

    #[test]
    fn test_remaining() {
        assert_eq!(draft("").remaining(), 99);
        assert_eq!(draft(&"x".repeat(101)).remaining(), -2);
    }

    #[test]
    fn test_first_line() {
        let msg = Message::new(MessageId::new("m1"), "hello\nworld", Utc::now());
        assert_eq!(msg.first_line(), "hello");

        let msg = Message::new(MessageId::new("m2"), "\n  padded\r\nrest", Utc::now());
        assert_eq!(msg.first_line(), "padded");

        let msg = Message::new(MessageId::new("m3"), "", Utc::now());
        assert_eq!(msg.first_line(), "");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let created = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let msg = Message::new(MessageId::new("abc"), "hi", created);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["messageId"], "abc");
        assert_eq!(json["content"], "hi");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_created_at_accepts_epoch_millis() {
        let json = r#"{"messageId":"abc","content":"hi","createdAt":1700000000000}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.created_at().timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_created_at_accepts_rfc3339() {
        let json = r#"{"messageId":"abc","content":"hi","createdAt":"2024-03-01T12:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.created_at().to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_new_message_body_has_only_content() {
        let json = serde_json::to_string(&draft("hi").to_request()).unwrap();
        assert_eq!(json, r#"{"content":"hi"}"#);
    }
}
