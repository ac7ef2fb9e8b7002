//! Filter records by author and date.
//!
//! - [`UserFilter`] selects the author every aggregation works on
//! - [`FilterConfig`] narrows a [`ChatLog`](super::ChatLog) to a date range
//!
//! # Examples
//!
//! ## Filter by Author
//!
//! ```
//! use chatlens::core::UserFilter;
//! use chatlens::core::stats::fetch_stats;
//! use chatlens::core::ChatLog;
//! use chatlens::parsers::parse_lines;
//!
//! let log = ChatLog::from_messages(parse_lines(&[
//!     "5/1/24, 14:30 - Alice: Hello",
//!     "5/1/24, 14:31 - Bob: Hi there",
//!     "5/1/24, 14:32 - Alice: How are you?",
//! ]));
//!
//! let stats = fetch_stats(log.records(), &UserFilter::author("Alice"));
//! assert_eq!(stats.messages, 2);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::{ChatLog, FilterConfig};
//! use chatlens::parsers::parse_lines;
//!
//! # fn main() -> chatlens::Result<()> {
//! let log = ChatLog::from_messages(parse_lines(&[
//!     "1/1/24, 12:00 - Alice: Old",
//!     "15/6/24, 12:00 - Alice: New",
//! ]));
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = log.filtered(&config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.records()[0].body(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact (case-sensitive)
//! - An author that does not occur simply selects nothing
//! - Date bounds are inclusive and combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::models::MessageRecord;
use crate::error::ChatlensError;

/// Which author an aggregation looks at.
///
/// `Overall` is a variant, not a name, so a participant literally called
/// "Overall" can still be selected with [`UserFilter::author`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserFilter {
    /// All authors.
    #[default]
    Overall,
    /// A single author, matched exactly.
    Author(String),
}

impl UserFilter {
    /// Selects a single author.
    pub fn author(name: impl Into<String>) -> Self {
        UserFilter::Author(name.into())
    }

    /// Returns `true` for [`UserFilter::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, UserFilter::Overall)
    }

    /// Returns `true` if `record` passes this filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::Author(name) => record.author() == name,
        }
    }

    /// Iterates over the records that pass this filter.
    pub fn select<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl From<Option<String>> for UserFilter {
    fn from(name: Option<String>) -> Self {
        name.map_or(UserFilter::Overall, UserFilter::Author)
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserFilter::Overall => write!(f, "Overall"),
            UserFilter::Author(name) => write!(f, "{}", name),
        }
    }
}

/// Date range for narrowing a chat log.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this time.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this time.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        // End of the day to include the full day
        let end = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(end);
        Ok(self)
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `record` falls inside the range.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        let ts = record.timestamp();
        if self.after.is_some_and(|after| ts < after) {
            return false;
        }
        if self.before.is_some_and(|before| ts > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    fn make_record(author: &str, date: &str) -> MessageRecord {
        let ts = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        MessageRecord::new(Message::new(ts, author, "text"))
    }

    #[test]
    fn test_user_filter_overall_matches_all() {
        let filter = UserFilter::Overall;
        assert!(filter.matches(&make_record("Alice", "2024-01-01")));
        assert!(filter.matches(&make_record("Media omitted", "2024-01-01")));
    }

    #[test]
    fn test_user_filter_is_exact() {
        let filter = UserFilter::author("Alice");
        assert!(filter.matches(&make_record("Alice", "2024-01-01")));
        assert!(!filter.matches(&make_record("alice", "2024-01-01")));
    }

    #[test]
    fn test_author_named_overall() {
        let records = vec![
            make_record("Overall", "2024-01-01"),
            make_record("Bob", "2024-01-01"),
        ];
        assert_eq!(UserFilter::author("Overall").select(&records).count(), 1);
        assert_eq!(UserFilter::Overall.select(&records).count(), 2);
    }

    #[test]
    fn test_user_filter_from_option() {
        assert_eq!(UserFilter::from(None), UserFilter::Overall);
        assert_eq!(
            UserFilter::from(Some("Bob".to_string())),
            UserFilter::author("Bob")
        );
    }

    #[test]
    fn test_filter_by_date_after() {
        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        assert!(!config.matches(&make_record("Alice", "2024-01-01")));
        assert!(config.matches(&make_record("Alice", "2024-06-15")));
    }

    #[test]
    fn test_filter_by_date_before_is_inclusive() {
        let config = FilterConfig::new().with_date_to("2024-03-01").unwrap();
        assert!(config.matches(&make_record("Alice", "2024-03-01")));
        assert!(!config.matches(&make_record("Alice", "2024-03-02")));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatlensError::InvalidDate { .. })));
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(
            FilterConfig::new()
                .with_date_from("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
