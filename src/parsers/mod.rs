//! Chat export parsers.
//!
//! - [`WhatsAppParser`] - Parses WhatsApp TXT exports
//!
//! # Example
//!
//! ```rust
//! use chatlens::parsers::parse_lines;
//!
//! let messages = parse_lines(&["5/1/24, 14:30 - Alice: Hi", "<Media omitted>"]);
//! assert_eq!(messages.len(), 2);
//! ```

mod whatsapp;

pub use whatsapp::WhatsAppParser;

use crate::Message;
use crate::parser::Parser;

/// Parses lines with the default WhatsApp parser.
pub fn parse_lines(lines: &[&str]) -> Vec<Message> {
    WhatsAppParser::new().parse_lines(lines)
}
