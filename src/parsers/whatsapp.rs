//! `WhatsApp` TXT export parser.
//!
//! Builds messages from the line classification in
//! [`parsing::whatsapp`](crate::parsing::whatsapp):
//!
//! 1. A header line opens a new message.
//! 2. A media line without a header becomes a `Media omitted` message that
//!    reuses the previous timestamp.
//! 3. Any other non-blank line is appended to the most recent message.
//!
//! Lines that appear before the first message are dropped.

use crate::Message;
use crate::config::{MalformedHeaderPolicy, WhatsAppConfig};
use crate::parser::Parser;
use crate::parsing::whatsapp::{LineKind, classify_line};

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::Parser;
/// use chatlens::parsers::WhatsAppParser;
///
/// let parser = WhatsAppParser::new();
/// let messages = parser.parse_lines(&["5/1/24, 14:30 - Alice: Hello", "World"]);
///
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].body, "Hello\nWorld");
/// ```
pub struct WhatsAppParser {
    config: WhatsAppConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: WhatsAppConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: WhatsAppConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse_lines(&self, lines: &[&str]) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut malformed = 0usize;

        for (index, line) in lines.iter().enumerate() {
            match classify_line(line) {
                LineKind::Header {
                    timestamp,
                    author,
                    body,
                } => messages.push(Message::new(timestamp, author, body)),
                LineKind::MalformedHeader { raw_timestamp } => {
                    malformed += 1;
                    match self.config.malformed_headers {
                        MalformedHeaderPolicy::Drop => {
                            tracing::debug!(
                                line = index + 1,
                                timestamp = raw_timestamp,
                                "dropping header with invalid date"
                            );
                        }
                        MalformedHeaderPolicy::Continuation => {
                            if let Some(last) = messages.last_mut() {
                                last.push_line(line.trim());
                            }
                        }
                    }
                }
                LineKind::MediaMarker => {
                    // Orphan media lines have no timestamp to borrow.
                    if let Some(timestamp) = messages.last().map(Message::timestamp) {
                        messages.push(Message::media_omitted(timestamp));
                    }
                }
                LineKind::Continuation(text) => {
                    if let Some(last) = messages.last_mut() {
                        last.push_line(text);
                    }
                }
                LineKind::Blank => {}
            }
        }

        if self.config.sort_by_timestamp {
            // Stable: equal timestamps keep export order.
            messages.sort_by_key(Message::timestamp);
        }

        tracing::debug!(
            lines = lines.len(),
            messages = messages.len(),
            malformed,
            "parsed WhatsApp export"
        );

        messages
    }
}
