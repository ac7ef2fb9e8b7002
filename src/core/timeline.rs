//! Temporal distributions: timelines, busiest days and months, heatmap.
//!
//! Timelines are in calendar order. Activity maps are ranked by count with
//! ties kept in first-appearance order. The heatmap lists only the weekdays
//! and hour buckets that actually occur; every other cell is zero.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::counter::OrderedCounter;
use super::enrich::period_label;
use super::filter::UserFilter;
use super::models::MessageRecord;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    /// `"<MonthName>-<Year>"`, e.g. `"January-2024"`.
    pub label: String,
    pub messages: usize,
}

/// Messages on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// A label with its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub messages: usize,
}

/// Messages per month, in chronological order.
pub fn monthly_timeline(records: &[MessageRecord], filter: &UserFilter) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for record in filter.select(records) {
        let time = &record.time;
        months
            .entry((time.year, time.month_number))
            .or_insert((time.month_name.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (name, messages))| MonthlyPoint {
            year,
            month,
            label: format!("{}-{}", name, year),
            messages,
        })
        .collect()
}

/// Messages per calendar day, in chronological order.
pub fn daily_timeline(records: &[MessageRecord], filter: &UserFilter) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in filter.select(records) {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}

/// Messages per weekday name, busiest first.
pub fn week_activity_map(records: &[MessageRecord], filter: &UserFilter) -> Vec<LabelCount> {
    ranked(filter.select(records).map(|r| r.time.day_name.as_str()))
}

/// Messages per month name, busiest first.
pub fn month_activity_map(records: &[MessageRecord], filter: &UserFilter) -> Vec<LabelCount> {
    ranked(filter.select(records).map(|r| r.time.month_name.as_str()))
}

fn ranked<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    labels
        .collect::<OrderedCounter>()
        .ranked()
        .into_iter()
        .map(|(label, messages)| LabelCount { label, messages })
        .collect()
}

/// Weekday × hour-bucket message counts.
///
/// Rows run Monday to Sunday and columns by hour, keeping only the rows and
/// columns that have at least one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    /// Row labels (weekday names).
    pub days: Vec<String>,
    /// Column labels (hour buckets such as `"14-15"`).
    pub periods: Vec<String>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    /// Count for one weekday and hour bucket; zero when either is absent.
    pub fn cell(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// Total messages on a weekday.
    pub fn row_total(&self, day: &str) -> usize {
        self.days
            .iter()
            .position(|d| d == day)
            .map_or(0, |r| self.counts[r].iter().sum())
    }

    /// Total messages in an hour bucket.
    pub fn column_total(&self, period: &str) -> usize {
        self.periods
            .iter()
            .position(|p| p == period)
            .map_or(0, |c| self.counts.iter().map(|row| row[c]).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the weekday × hour heatmap for `filter`.
pub fn activity_heatmap(records: &[MessageRecord], filter: &UserFilter) -> ActivityHeatmap {
    let mut cells = [[0usize; 24]; 7];
    for record in filter.select(records) {
        let weekday = record.timestamp().weekday();
        cells[weekday.num_days_from_monday() as usize][record.time.hour as usize] += 1;
    }

    let rows: Vec<usize> = (0..7).filter(|&d| cells[d].iter().any(|&n| n > 0)).collect();
    let cols: Vec<usize> = (0..24).filter(|&h| cells.iter().any(|row| row[h] > 0)).collect();

    ActivityHeatmap {
        days: rows.iter().map(|&d| weekday_name(d).to_string()).collect(),
        periods: cols.iter().map(|&h| period_label(h as u32)).collect(),
        counts: rows
            .iter()
            .map(|&d| cols.iter().map(|&h| cells[d][h]).collect())
            .collect(),
    }
}

fn weekday_name(days_from_monday: usize) -> &'static str {
    match days_from_monday {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        _ => "Sunday",
    }
}
