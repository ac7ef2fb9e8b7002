//! Raw chat message as recovered by the line parser.
//!
//! This module provides [`Message`], the unit emitted by the parser before any
//! calendar fields are derived. See [`MessageRecord`](crate::core::models::MessageRecord)
//! for the enriched form every aggregation works on.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 5)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(msg.author(), "Alice");
//! assert!(!msg.is_system());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Author (and body) given to a media line that had no header of its own.
pub const MEDIA_OMITTED_AUTHOR: &str = "Media omitted";

/// Author used for group service events (member added, subject changed, ...).
pub const GROUP_NOTIFICATION_AUTHOR: &str = "group_notification";

/// Body of a message whose attachment was left out of the export.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// A single message recovered from a chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock time from the header line |
/// | `author` | `String` | Trimmed author token |
/// | `body` | `String` | Trimmed text, continuation lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the export (no time zone).
    pub timestamp: NaiveDateTime,

    /// Display name or phone number of the sender.
    pub author: String,

    /// Message text.
    ///
    /// May contain newlines for multiline messages.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Creates the record emitted for a bare media marker line.
    pub fn media_omitted(timestamp: NaiveDateTime) -> Self {
        Self::new(timestamp, MEDIA_OMITTED_AUTHOR, MEDIA_OMITTED_AUTHOR)
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Appends a continuation line to the body.
    pub fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    /// Returns `true` if the author is not a real participant.
    ///
    /// Covers group notifications and media lines without a header.
    pub fn is_system(&self) -> bool {
        self.author == GROUP_NOTIFICATION_AUTHOR || self.author == MEDIA_OMITTED_AUTHOR
    }

    /// Returns `true` if the body is the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_push_line() {
        let mut msg = Message::new(ts(), "Alice", "Hello");
        msg.push_line("World");
        assert_eq!(msg.body(), "Hello\nWorld");
    }

    #[test]
    fn test_media_omitted_is_system() {
        let msg = Message::media_omitted(ts());
        assert_eq!(msg.author(), "Media omitted");
        assert_eq!(msg.body(), "Media omitted");
        assert!(msg.is_system());
        assert!(!msg.is_media());
    }

    #[test]
    fn test_group_notification_is_system() {
        assert!(Message::new(ts(), "group_notification", "Alice added Bob").is_system());
        assert!(!Message::new(ts(), "Alice", "hi").is_system());
    }

    #[test]
    fn test_is_media() {
        assert!(Message::new(ts(), "Bob", "<Media omitted>").is_media());
        assert!(!Message::new(ts(), "Bob", "<Media omitted> lol").is_media());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(ts(), "Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("2024-06-15T12:00:00"));
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
