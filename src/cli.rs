//! Command-line interface definition using clap.
//!
//! [`Args`] holds the raw arguments and converts them into the library's
//! configuration types, so `main.rs` only wires things together.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use chatlens::core::UserFilter;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice"]);
//! assert_eq!(args.user_filter(), UserFilter::author("Alice"));
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::AnalysisConfig;
use crate::core::{FilterConfig, UserFilter};
use crate::error::Result;
use crate::format::OutputFormat;

/// Analyze a WhatsApp chat export: activity, timelines, busy users,
/// common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --users
    chatlens chat.txt --user Alice --stop-words stop_hinglish.txt
    chatlens chat.txt --after 2024-01-01 -f json -o report.json
    chatlens chat.txt --records records.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze a single author instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Stop-word list for the most common words
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Only include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also export the parsed records as CSV
    #[arg(long, value_name = "PATH")]
    pub records: Option<PathBuf>,

    /// List the authors found in the chat and exit
    #[arg(long)]
    pub users: bool,
}

impl Args {
    /// The author selection, `Overall` when `--user` is absent.
    pub fn user_filter(&self) -> UserFilter {
        UserFilter::from(self.user.clone())
    }

    /// Builds the date-range filter from `--after` and `--before`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`](crate::ChatlensError::InvalidDate)
    /// for a date not in `YYYY-MM-DD` form.
    pub fn date_filter(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        Ok(config)
    }

    /// Analysis settings carrying the stop-word location.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::new();
        match &self.stop_words {
            Some(path) => config.with_stop_words_path(path),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatlens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.user_filter(), UserFilter::Overall);
        assert!(args.output.is_none());
        assert!(args.records.is_none());
        assert!(!args.users);
        assert!(!args.date_filter().unwrap().is_active());
        assert!(args.analysis_config().stop_words_path.is_none());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "chat.txt",
            "--user",
            "Bob",
            "--stop-words",
            "stop.txt",
            "--after",
            "2024-01-01",
            "--before",
            "2024-06-30",
            "-f",
            "json",
            "-o",
            "report.json",
            "--records",
            "records.csv",
        ]);
        assert_eq!(args.user_filter(), UserFilter::author("Bob"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert_eq!(args.records, Some(PathBuf::from("records.csv")));
        assert_eq!(
            args.analysis_config().stop_words_path,
            Some(PathBuf::from("stop.txt"))
        );

        let dates = args.date_filter().unwrap();
        assert!(dates.after.is_some());
        assert!(dates.before.is_some());
    }

    #[test]
    fn test_invalid_date_in_date_filter() {
        let args = parse(&["chat.txt", "--after", "01/01/2024"]);
        assert!(args.date_filter().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Args::try_parse_from(["chatlens", "chat.txt", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["chatlens"]).is_err());
    }
}
