//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing activity
//! analytics over them.
//!
//! ## Overview
//!
//! Chatlens turns the plaintext log produced by WhatsApp's "Export chat"
//! into an ordered list of [`Message`]s, enriches each one with calendar
//! fields, and answers read-only questions about the result:
//!
//! - message, word, media and link counts
//! - monthly and daily timelines, busiest weekdays and months
//! - a weekday × hour activity heatmap
//! - the busiest participants and their share of the conversation
//! - the most common words (minus a stop-word list) and emoji
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = WhatsAppParser::new();
//!     let log = ChatLog::from_messages(parser.parse("chat.txt".as_ref())?);
//!
//!     let stop_words = StopWords::from_path("stop_hinglish.txt")?;
//!     let report = AnalysisReport::build(
//!         log.records(),
//!         &UserFilter::Overall,
//!         Some(&stop_words),
//!         &AnalysisConfig::default(),
//!     );
//!
//!     println!("{}", report_to_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing Rules
//!
//! A line is one of:
//! - a **header** `D/M/YY, HH:MM - Author: Body` starting a new message
//! - a **bare media marker** containing `Media omitted`, recorded as its own
//!   system message at the previous timestamp
//! - a **continuation**, appended to the previous message on a new line
//!
//! Blank lines and text before the first header are ignored. Header-shaped
//! lines with an impossible date are dropped. Messages come out stably
//! sorted by timestamp.
//!
//! ## Module Structure
//!
//! - [`parser`] — the [`Parser`](parser::Parser) trait
//! - [`parsers`] — [`WhatsAppParser`](parsers::WhatsAppParser)
//! - [`parsing`] — line classification shared by parsers
//! - [`config`] — [`WhatsAppConfig`](config::WhatsAppConfig),
//!   [`AnalysisConfig`](config::AnalysisConfig), [`StopWords`](config::StopWords)
//! - [`core`] — enrichment, filters, aggregations, [`AnalysisReport`](core::AnalysisReport)
//!   - [`core::output`] — CSV, JSON and text writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat) for reports
//! - [`cli`] — CLI arguments (requires the `cli` feature)
//! - [`error`] — Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::Parser;
    pub use crate::parsers::WhatsAppParser;

    // Configuration
    pub use crate::config::{AnalysisConfig, MalformedHeaderPolicy, StopWords, WhatsAppConfig};

    // Records and filters
    pub use crate::core::{ChatLog, FilterConfig, MessageRecord, UserFilter};

    // Aggregations
    pub use crate::core::{
        AnalysisReport, activity_heatmap, daily_timeline, fetch_stats, month_activity_map,
        monthly_timeline, most_busy_users, most_common_emoji, most_common_words,
        week_activity_map, word_cloud_source,
    };

    // Output
    pub use crate::core::output::report_to_text;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{records_to_csv, write_records_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{report_to_json, write_report_json};
    pub use crate::format::OutputFormat;
}
