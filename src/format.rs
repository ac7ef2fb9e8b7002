//! Report output formats.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks. The `chatlens` binary parses `--format` straight into
//! [`OutputFormat`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{AnalysisReport, ChatLog, UserFilter};
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::parsers::parse_lines;
//!
//! let log = ChatLog::from_messages(parse_lines(&["5/1/24, 14:30 - Alice: Hello!"]));
//! let report =
//!     AnalysisReport::build(log.records(), &UserFilter::Overall, None, &AnalysisConfig::default());
//!
//! let json = to_format_string(&report, OutputFormat::Json)?;
//! assert!(json.contains("\"messages\": 1"));
//!
//! let format = OutputFormat::from_path("report.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::AnalysisReport;
use crate::core::output::report_to_text;
use crate::error::{ChatlensError, Result};

/// How an [`AnalysisReport`] is rendered.
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Aligned plain-text sections (default)
    #[default]
    Text,

    /// Pretty-printed JSON, one object for the whole report
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("report.txt").unwrap();
    /// assert_eq!(format, OutputFormat::Text);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatlensError::invalid_format(
                "report",
                format!("Unknown file extension: '.{}'. Expected one of: txt, json", ext),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the specified format.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled.
pub fn to_format_string(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report_to_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::report_to_json(report),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_format(
            "report",
            format!(
                "Output format {} requires the 'json-output' feature to be enabled",
                format
            ),
        )),
    }
}

/// Writes a rendered report to a file.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    report: &AnalysisReport,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let rendered = to_format_string(report, format)?;
    fs::write(path, rendered)?;
    Ok(())
}
