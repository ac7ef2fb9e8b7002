//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`WhatsAppConfig`] - line parser settings
//! - [`AnalysisConfig`] - top-N limits and the stop-word location
//! - [`StopWords`] - the stop-word resource used by vocabulary analysis
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{MalformedHeaderPolicy, WhatsAppConfig};
//! use chatlens::parsers::WhatsAppParser;
//!
//! let config = WhatsAppConfig::new()
//!     .with_malformed_headers(MalformedHeaderPolicy::Drop)
//!     .with_sort_by_timestamp(true);
//!
//! let parser = WhatsAppParser::with_config(config);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// What to do with a header-shaped line whose date or time does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedHeaderPolicy {
    /// Discard the line entirely (default).
    #[default]
    Drop,
    /// Treat the line as text belonging to the previous message.
    Continuation,
}

/// Configuration for WhatsApp export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::WhatsAppConfig;
///
/// let config = WhatsAppConfig::new().with_sort_by_timestamp(false);
/// assert!(!config.sort_by_timestamp);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Stable-sort the records by timestamp once parsing is done (default: true)
    pub sort_by_timestamp: bool,

    /// Handling of header lines with impossible dates (default: drop)
    pub malformed_headers: MalformedHeaderPolicy,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            sort_by_timestamp: true,
            malformed_headers: MalformedHeaderPolicy::Drop,
        }
    }
}

impl WhatsAppConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the final timestamp sort.
    #[must_use]
    pub fn with_sort_by_timestamp(mut self, enabled: bool) -> Self {
        self.sort_by_timestamp = enabled;
        self
    }

    /// Sets the malformed header policy.
    #[must_use]
    pub fn with_malformed_headers(mut self, policy: MalformedHeaderPolicy) -> Self {
        self.malformed_headers = policy;
        self
    }
}

/// Default number of entries in the busy-user ranking.
pub const DEFAULT_TOP_USERS: usize = 5;

/// Default number of entries in word and emoji rankings.
pub const DEFAULT_TOP_TERMS: usize = 20;

/// Configuration for report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Entries in the busy-user ranking (default: 5)
    pub top_users: usize,

    /// Entries in the word ranking (default: 20)
    pub top_words: usize,

    /// Entries in the emoji ranking (default: 20)
    pub top_emoji: usize,

    /// Location of the stop-word list, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: DEFAULT_TOP_USERS,
            top_words: DEFAULT_TOP_TERMS,
            top_emoji: DEFAULT_TOP_TERMS,
            stop_words_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stop-word file location.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Sets the busy-user ranking size.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the word ranking size.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the emoji ranking size.
    #[must_use]
    pub fn with_top_emoji(mut self, n: usize) -> Self {
        self.top_emoji = n;
        self
    }

    /// Loads the configured stop words.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`] when no path is configured
    /// and [`ChatlensError::StopWords`] when the file cannot be read.
    pub fn load_stop_words(&self) -> Result<StopWords> {
        match &self.stop_words_path {
            Some(path) => StopWords::from_path(path),
            None => Err(ChatlensError::missing_resource("stop words")),
        }
    }
}

/// Words excluded from vocabulary rankings.
///
/// Loaded once and shared by reference. Tokens are matched verbatim against
/// lower-cased message words.
///
/// # Example
///
/// ```rust
/// use chatlens::config::StopWords;
///
/// let stop_words = StopWords::parse("the a\nhai");
/// assert!(stop_words.contains("hai"));
/// assert_eq!(stop_words.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from whitespace- or newline-delimited text.
    pub fn parse(content: &str) -> Self {
        content.split_whitespace().map(str::to_string).collect()
    }

    /// Reads the set from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ChatlensError::stop_words(path, e))?;
        let words = Self::parse(&content);
        tracing::debug!(path = %path.display(), count = words.len(), "loaded stop words");
        Ok(words)
    }

    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl std::str::FromStr for StopWords {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
