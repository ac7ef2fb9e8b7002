//! Enriched message records and the immutable chat log.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enrich::TimeFields;
use super::filter::FilterConfig;
use crate::Message;

/// A [`Message`] with its calendar fields derived once.
///
/// Every aggregation in [`crate::core`] reads these cached fields instead of
/// recomputing them from the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// The parsed message.
    #[serde(flatten)]
    pub message: Message,

    /// Derived calendar fields.
    #[serde(flatten)]
    pub time: TimeFields,
}

impl MessageRecord {
    /// Enriches a single message.
    pub fn new(message: Message) -> Self {
        let time = TimeFields::from_timestamp(message.timestamp);
        Self { message, time }
    }

    pub fn author(&self) -> &str {
        &self.message.author
    }

    pub fn body(&self) -> &str {
        &self.message.body
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.message.timestamp
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date_only
    }

    pub fn period(&self) -> &str {
        &self.time.period
    }

    /// See [`Message::is_system`].
    pub fn is_system(&self) -> bool {
        self.message.is_system()
    }

    /// See [`Message::is_media`].
    pub fn is_media(&self) -> bool {
        self.message.is_media()
    }
}

impl From<Message> for MessageRecord {
    fn from(message: Message) -> Self {
        Self::new(message)
    }
}

/// An immutable, enriched record sequence.
///
/// Built once per parse. Filtering produces a new log and never touches the
/// original.
///
/// # Example
///
/// ```rust
/// use chatlens::core::ChatLog;
/// use chatlens::parsers::parse_lines;
///
/// let log = ChatLog::from_messages(parse_lines(&[
///     "5/1/24, 14:30 - Bob: Hi",
///     "5/1/24, 14:31 - Alice: Hello",
/// ]));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.authors(), ["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    records: Vec<MessageRecord>,
}

impl ChatLog {
    /// Enriches parsed messages into a log.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            records: super::enrich::enrich(messages),
        }
    }

    /// Returns the records in order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct authors, sorted, for building a user selection.
    pub fn authors(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.author())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Returns a new log with only the records matching `config`.
    #[must_use]
    pub fn filtered(&self, config: &FilterConfig) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| config.matches(r))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Message>> for ChatLog {
    fn from(messages: Vec<Message>) -> Self {
        Self::from_messages(messages)
    }
}
