//! Output writers.
//!
//! - [`write_records_csv`] / [`records_to_csv`] - enriched records as CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_report_json`] / [`report_to_json`] - an [`AnalysisReport`](crate::core::AnalysisReport) as JSON - requires `json-output` feature
//! - [`report_to_text`] - an analysis report as aligned plain text
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::output::{report_to_text, write_records_csv, write_report_json};
//! use chatlens::core::{AnalysisReport, ChatLog, UserFilter};
//! use chatlens::parsers::parse_lines;
//!
//! let log = ChatLog::from_messages(parse_lines(&[
//!     "5/1/24, 14:30 - Alice: Hello!",
//!     "5/1/24, 14:31 - Bob: Hi there!",
//! ]));
//! let report =
//!     AnalysisReport::build(log.records(), &UserFilter::Overall, None, &AnalysisConfig::default());
//!
//! write_records_csv(log.records(), "records.csv")?;
//! write_report_json(&report, "report.json")?;
//! println!("{}", report_to_text(&report));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{records_to_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, write_report_json};
pub use text_writer::report_to_text;
