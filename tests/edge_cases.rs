//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of the line grammar and of the
//! aggregations that unit tests next to the code do not reach.

use chatlens::config::{MalformedHeaderPolicy, WhatsAppConfig};
use chatlens::core::{
    ChatLog, UserFilter, activity_heatmap, fetch_stats, monthly_timeline, most_busy_users,
    most_common_emoji,
};
use chatlens::parser::Parser;
use chatlens::parsers::{WhatsAppParser, parse_lines};
use chrono::{Datelike, NaiveDate, Timelike};

// =========================================================================
// Empty and noise-only input
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse_lines(&[]).is_empty());
    assert!(WhatsAppParser::new().parse_str("").unwrap().is_empty());
}

#[test]
fn test_noise_only_input() {
    let messages = parse_lines(&["", "   ", "just some text", "<Media omitted>", "\t"]);
    assert!(messages.is_empty());
}

#[test]
fn test_aggregations_on_empty_log() {
    let log = ChatLog::default();
    let stats = fetch_stats(log.records(), &UserFilter::Overall);
    assert_eq!(stats.messages, 0);
    assert_eq!(stats.words, 0);

    let busy = most_busy_users(log.records());
    assert!(busy.top.is_empty());
    assert!(busy.shares.is_empty());

    assert!(monthly_timeline(log.records(), &UserFilter::Overall).is_empty());
    assert!(activity_heatmap(log.records(), &UserFilter::Overall).is_empty());
    assert!(log.authors().is_empty());
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_four_digit_year() {
    let messages = parse_lines(&["15/01/2024, 10:30 - Alice: Hi"]);
    let ts = messages[0].timestamp;
    assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 15));
    assert_eq!((ts.hour(), ts.minute()), (10, 30));
}

#[test]
fn test_two_digit_year_pivot() {
    let messages = parse_lines(&["1/1/99, 10:00 - Alice: old", "1/1/00, 10:00 - Bob: new"]);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].timestamp.year(), 1999);
    assert_eq!(messages[1].timestamp.year(), 2000);
}

#[test]
fn test_single_digit_hour() {
    let messages = parse_lines(&["5/1/24, 9:05 - Alice: morning"]);
    assert_eq!(messages[0].timestamp.hour(), 9);
    let log = ChatLog::from_messages(messages);
    assert_eq!(log.records()[0].period(), "9-10");
}

#[test]
fn test_leap_day_and_invalid_dates() {
    let messages = parse_lines(&[
        "29/2/24, 12:00 - Alice: leap",
        "29/2/23, 12:00 - Alice: not a leap year",
        "31/4/24, 12:00 - Alice: april has 30 days",
        "5/1/24, 24:00 - Alice: no such hour",
    ]);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].timestamp.date(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn test_header_requires_two_digit_minutes() {
    let messages = parse_lines(&["5/1/24, 14:30 - Alice: Hi", "5/1/24, 14:3 - Bob: not a header"]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "Hi\n5/1/24, 14:3 - Bob: not a header");
}

// =========================================================================
// Malformed headers
// =========================================================================

#[test]
fn test_malformed_header_dropped() {
    let messages = parse_lines(&[
        "5/1/24, 14:30 - Alice: Hi",
        "32/13/24, 10:00 - Mallory: impossible",
        "more text",
    ]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "Hi\nmore text");
}

#[test]
fn test_malformed_header_as_continuation() {
    let parser = WhatsAppParser::with_config(
        WhatsAppConfig::new().with_malformed_headers(MalformedHeaderPolicy::Continuation),
    );
    let messages = parser.parse_lines(&[
        "5/1/24, 14:30 - Alice: Hi",
        "32/13/24, 10:00 - Mallory: impossible",
    ]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "Hi\n32/13/24, 10:00 - Mallory: impossible");
}

// =========================================================================
// Authors and bodies
// =========================================================================

#[test]
fn test_unicode_authors() {
    let messages = parse_lines(&[
        "5/1/24, 14:30 - Иван: Привет мир!",
        "5/1/24, 14:31 - 田中太郎: こんにちは",
        "5/1/24, 14:32 - Mom ❤️: dinner?",
    ]);
    let authors: Vec<&str> = messages.iter().map(|m| m.author.as_str()).collect();
    assert_eq!(authors, ["Иван", "田中太郎", "Mom ❤️"]);
}

#[test]
fn test_phone_number_author() {
    let messages = parse_lines(&["5/1/24, 14:30 - +91 98765 43210: hello"]);
    assert_eq!(messages[0].author, "+91 98765 43210");
}

#[test]
fn test_body_with_colons() {
    let messages = parse_lines(&["5/1/24, 14:30 - Alice: note: meet at 10:30"]);
    assert_eq!(messages[0].author, "Alice");
    assert_eq!(messages[0].body, "note: meet at 10:30");
}

#[test]
fn test_author_and_body_trimmed() {
    let messages = parse_lines(&["5/1/24, 14:30 - Alice : Hello   "]);
    assert_eq!(messages[0].author, "Alice");
    assert_eq!(messages[0].body, "Hello");
}

#[test]
fn test_empty_body_header() {
    let messages = parse_lines(&["5/1/24, 14:30 - Alice: ", "second line"]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "\nsecond line");
}

#[test]
fn test_continuation_lines_trimmed() {
    let messages = parse_lines(&["5/1/24, 14:30 - Alice: list", "   - one  ", "\t- two"]);
    assert_eq!(messages[0].body, "list\n- one\n- two");
}

#[test]
fn test_author_named_overall() {
    let log = ChatLog::from_messages(parse_lines(&[
        "5/1/24, 14:30 - Overall: I am a person",
        "5/1/24, 14:31 - Bob: hi",
    ]));
    let overall = fetch_stats(log.records(), &UserFilter::Overall);
    let person = fetch_stats(log.records(), &UserFilter::author("Overall"));
    assert_eq!(overall.messages, 2);
    assert_eq!(person.messages, 1);
}

// =========================================================================
// Media markers
// =========================================================================

#[test]
fn test_orphan_media_marker_dropped() {
    let messages = parse_lines(&["<Media omitted>", "5/1/24, 14:30 - Alice: Hi"]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, "Alice");
}

#[test]
fn test_consecutive_media_markers() {
    let messages = parse_lines(&[
        "5/1/24, 14:30 - Alice: photos",
        "<Media omitted>",
        "<Media omitted>",
    ]);
    assert_eq!(messages.len(), 3);
    assert!(messages[1..].iter().all(|m| m.author == "Media omitted"));
    assert!(messages.iter().all(|m| m.timestamp == messages[0].timestamp));
}

// =========================================================================
// Ordering
// =========================================================================

#[test]
fn test_out_of_order_headers_sorted_stably() {
    let messages = parse_lines(&[
        "6/1/24, 10:00 - Carol: later",
        "5/1/24, 10:00 - Alice: first",
        "5/1/24, 10:00 - Bob: second",
    ]);
    let bodies: Vec<&str> = messages.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, ["first", "second", "later"]);
}

#[test]
fn test_sorting_can_be_disabled() {
    let parser =
        WhatsAppParser::with_config(WhatsAppConfig::new().with_sort_by_timestamp(false));
    let messages = parser.parse_lines(&[
        "6/1/24, 10:00 - Carol: later",
        "5/1/24, 10:00 - Alice: first",
    ]);
    assert_eq!(messages[0].author, "Carol");
}

// =========================================================================
// Emoji
// =========================================================================

#[test]
fn test_emoji_sequences() {
    let log = ChatLog::from_messages(parse_lines(&[
        "5/1/24, 14:30 - Alice: 🙏 🇮🇳 👨‍👩‍👧",
        "5/1/24, 14:31 - Bob: 🙏",
    ]));
    let emoji = most_common_emoji(log.records(), &UserFilter::Overall);
    let terms: Vec<(&str, usize)> = emoji.iter().map(|t| (t.term.as_str(), t.count)).collect();
    assert_eq!(terms, [("🙏", 2), ("🇮🇳", 1), ("👨‍👩‍👧", 1)]);
}
