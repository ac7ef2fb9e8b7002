//! Calendar fields derived from message timestamps.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::models::MessageRecord;
use crate::Message;

/// Calendar and time-of-day buckets for one timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    pub year: i32,
    /// 1-12
    pub month_number: u32,
    /// English month name, e.g. `January`.
    pub month_name: String,
    pub date_only: NaiveDate,
    /// English weekday name, e.g. `Monday`.
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    /// One-hour bucket label, see [`period_label`].
    pub period: String,
}

impl TimeFields {
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month_number: ts.month(),
            month_name: ts.format("%B").to_string(),
            date_only: ts.date(),
            day_name: ts.format("%A").to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            period: period_label(ts.hour()),
        }
    }
}

/// Hour bucket label: `"14-15"`, with `"23-00"` and `"00-1"` at the edges.
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// Enriches every message, preserving order.
pub fn enrich(messages: Vec<Message>) -> Vec<MessageRecord> {
    messages.into_iter().map(MessageRecord::new).collect()
}
