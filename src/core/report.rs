//! Every aggregation for one author filter, bundled.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, StopWords};
//! use chatlens::core::{AnalysisReport, ChatLog, UserFilter};
//! use chatlens::parsers::parse_lines;
//!
//! let log = ChatLog::from_messages(parse_lines(&[
//!     "5/1/24, 14:30 - Alice: Hello there 👋",
//!     "5/1/24, 14:31 - Bob: <Media omitted>",
//! ]));
//! let stop_words = StopWords::parse("there");
//!
//! let report = AnalysisReport::build(
//!     log.records(),
//!     &UserFilter::Overall,
//!     Some(&stop_words),
//!     &AnalysisConfig::default(),
//! );
//!
//! assert_eq!(report.stats.messages, 2);
//! assert_eq!(report.stats.media, 1);
//! assert!(report.busy_users.is_some());
//! ```

use serde::{Serialize, Serializer};

use super::filter::UserFilter;
use super::models::MessageRecord;
use super::stats::{BusyUsers, ChatStats, fetch_stats, most_busy_users_n};
use super::timeline::{
    ActivityHeatmap, DailyPoint, LabelCount, MonthlyPoint, activity_heatmap, daily_timeline,
    month_activity_map, monthly_timeline, week_activity_map,
};
use super::vocabulary::{TermCount, most_common_emoji_n, most_common_words_n, word_cloud_source};
use crate::config::{AnalysisConfig, StopWords};
use crate::error::{ChatlensError, Result};

/// Results of every aggregation for one [`UserFilter`].
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub user: UserFilter,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub busiest_days: Vec<LabelCount>,
    pub busiest_months: Vec<LabelCount>,
    pub heatmap: ActivityHeatmap,
    /// Only present for [`UserFilter::Overall`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub word_cloud: String,
    /// Fails on its own when no stop-word set is available.
    #[serde(serialize_with = "serialize_words")]
    pub common_words: Result<Vec<TermCount>>,
    pub common_emoji: Vec<TermCount>,
}

impl AnalysisReport {
    /// Runs every aggregation over `records` for `user`.
    pub fn build(
        records: &[MessageRecord],
        user: &UserFilter,
        stop_words: Option<&StopWords>,
        config: &AnalysisConfig,
    ) -> Self {
        let common_words = match stop_words {
            Some(stop_words) => Ok(most_common_words_n(
                records,
                user,
                stop_words,
                config.top_words,
            )),
            None => Err(ChatlensError::missing_resource("stop words")),
        };
        if let Err(e) = &common_words {
            tracing::warn!(error = %e, "skipping most common words");
        }

        Self {
            user: user.clone(),
            stats: fetch_stats(records, user),
            monthly_timeline: monthly_timeline(records, user),
            daily_timeline: daily_timeline(records, user),
            busiest_days: week_activity_map(records, user),
            busiest_months: month_activity_map(records, user),
            heatmap: activity_heatmap(records, user),
            busy_users: user
                .is_overall()
                .then(|| most_busy_users_n(records, config.top_users)),
            word_cloud: word_cloud_source(records, user),
            common_words,
            common_emoji: most_common_emoji_n(records, user, config.top_emoji),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum WordsOutcome<'a> {
    Ok(&'a [TermCount]),
    Error(String),
}

fn serialize_words<S: Serializer>(
    words: &Result<Vec<TermCount>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match words {
        Ok(words) => WordsOutcome::Ok(words.as_slice()),
        Err(e) => WordsOutcome::Error(e.to_string()),
    }
    .serialize(serializer)
}
