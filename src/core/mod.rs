//! Enrichment and aggregation over parsed messages.
//!
//! This module contains:
//! - [`models`] - [`MessageRecord`] and the immutable [`ChatLog`]
//! - [`enrich`] - derived calendar fields and hour buckets
//! - [`filter`] - [`UserFilter`] and date-range [`FilterConfig`]
//! - [`stats`], [`timeline`], [`vocabulary`] - the aggregations
//! - [`report`] - [`AnalysisReport`], every aggregation for one filter
//! - [`output`] - CSV, JSON and text writers
//!
//! Every aggregation is a pure function of `&[MessageRecord]` and a
//! [`UserFilter`].
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{ChatLog, UserFilter, fetch_stats, most_busy_users};
//! use chatlens::parsers::parse_lines;
//!
//! let log = ChatLog::from_messages(parse_lines(&[
//!     "5/1/24, 14:30 - Alice: see example.com",
//!     "5/1/24, 14:31 - Bob: <Media omitted>",
//! ]));
//!
//! let stats = fetch_stats(log.records(), &UserFilter::Overall);
//! assert_eq!((stats.messages, stats.media, stats.links), (2, 1, 1));
//!
//! let busy = most_busy_users(log.records());
//! assert_eq!(busy.shares[0].percent, 50.0);
//! ```

pub mod counter;
pub mod enrich;
pub mod filter;
pub mod models;
pub mod output;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod vocabulary;

pub use enrich::{TimeFields, enrich, period_label};
pub use filter::{FilterConfig, UserFilter};
pub use models::{ChatLog, MessageRecord};
pub use report::AnalysisReport;
pub use stats::{AuthorCount, AuthorShare, BusyUsers, ChatStats, fetch_stats, most_busy_users};
pub use timeline::{
    ActivityHeatmap, DailyPoint, LabelCount, MonthlyPoint, activity_heatmap, daily_timeline,
    month_activity_map, monthly_timeline, week_activity_map,
};
pub use vocabulary::{TermCount, most_common_emoji, most_common_words, word_cloud_source};

// Re-export Message from the crate root
pub use crate::Message;
