//! Line grammar shared by the chat parsers.
//!
//! The [`whatsapp`] module classifies raw lines; the record-building state
//! machine lives in [`crate::parsers`].

pub mod whatsapp;

pub use whatsapp::{LineKind, classify_line, is_header_line, parse_header_timestamp};
