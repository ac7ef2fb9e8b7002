//! CSV export of enriched records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::MessageRecord;
use crate::error::{ChatlensError, Result};

const HEADER: [&str; 6] = ["Timestamp", "Author", "Body", "Date", "Day", "Period"];

/// Writes records to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Body`, `Date`, `Day`, `Period`
/// - Multi-line bodies are quoted, so one record stays one CSV row
/// - Encoding: UTF-8
pub fn write_records_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_records_csv`].
pub fn records_to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ChatlensError::utf8("CSV output", e))
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(record: &MessageRecord) -> [String; 6] {
    [
        record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        record.author().to_string(),
        record.body().to_string(),
        record.date().format("%Y-%m-%d").to_string(),
        record.time.day_name.clone(),
        record.period().to_string(),
    ]
}
