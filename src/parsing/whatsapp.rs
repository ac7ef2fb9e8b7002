//! Shared WhatsApp line grammar.
//!
//! Exports do not escape newlines inside a message, so a continuation line is
//! only recognizable by the absence of a header. Classification is therefore a
//! two-state decision: header or not, with "attach to previous" as fallback.
//!
//! Supported header:
//! - `15/01/2024, 10:30 - Sender: Message`
//! - `5/1/24, 9:05 - Sender: Message`

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Header pattern: `D/M/Y, H:MM - author: body`.
///
/// Author is lazy so it stops at the first `": "`.
pub const HEADER_PATTERN: &str = r"^(\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}:\d{2}) - (.+?): (.*)$";

/// Marker that identifies a media line without a header.
pub const MEDIA_MARKER: &str = "Media omitted";

/// Date formats tried in order: two-digit year first, then literal year.
const DATE_PARSE_FORMATS: &[&str] = &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"];

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// Classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A new message with a valid timestamp.
    Header {
        timestamp: NaiveDateTime,
        author: &'a str,
        body: &'a str,
    },
    /// Header-shaped line whose date/time does not exist.
    MalformedHeader { raw_timestamp: &'a str },
    /// Media line without its own header.
    MediaMarker,
    /// Text belonging to the previous message.
    Continuation(&'a str),
    /// Whitespace only.
    Blank,
}

/// Parse a header timestamp such as `5/1/24, 14:30` (day/month/year, 24h).
pub fn parse_header_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DATE_PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Classify a raw line. Author, body and continuation text are trimmed.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(caps) = HEADER_REGEX.captures(line) {
        let raw_timestamp = caps.get(1).map_or("", |m| m.as_str());
        let author = caps.get(2).map_or("", |m| m.as_str().trim());
        let body = caps.get(3).map_or("", |m| m.as_str().trim());

        return match parse_header_timestamp(raw_timestamp) {
            Some(timestamp) => LineKind::Header {
                timestamp,
                author,
                body,
            },
            None => LineKind::MalformedHeader { raw_timestamp },
        };
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if line.contains(MEDIA_MARKER) {
        LineKind::MediaMarker
    } else {
        LineKind::Continuation(trimmed)
    }
}

/// Returns `true` if the line has the header shape, valid date or not.
pub fn is_header_line(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}
