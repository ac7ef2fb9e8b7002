//! Parser trait for chat exports.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::Parser;
//! use chatlens::parsers::WhatsAppParser;
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse_str("5/1/24, 14:30 - Alice: Hello there\n").unwrap();
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].author, "Alice");
//! ```

use std::fs;
use std::path::Path;

use crate::Message;
use crate::error::{ChatlensError, Result};

/// Converts a chat export into an ordered list of [`Message`]s.
///
/// Implementors only need [`parse_lines`](Parser::parse_lines); reading files
/// and splitting text are provided.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of the parser.
    fn name(&self) -> &'static str;

    /// Builds messages from already split lines.
    fn parse_lines(&self, lines: &[&str]) -> Vec<Message>;

    /// Parses chat content from a string.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        let lines: Vec<&str> = content.lines().collect();
        Ok(self.parse_lines(&lines))
    }

    /// Parses a chat export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read and
    /// [`ChatlensError::Utf8`] if it is not valid UTF-8.
    fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::utf8(format!("reading {}", path.display()), e))?;
        self.parse_str(&content)
    }
}
