//! JSON rendering of an analysis report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::AnalysisReport;
use crate::error::Result;

/// Converts a report to a pretty-printed JSON string.
///
/// `common_words` serializes as `{"ok": [...]}` or `{"error": "..."}` so a
/// missing stop-word list does not hide the rest of the report.
pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report to a JSON file.
pub fn write_report_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
