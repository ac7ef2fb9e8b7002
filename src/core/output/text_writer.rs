//! Plain-text rendering of an analysis report.

use std::fmt::Write;

use crate::core::report::AnalysisReport;
use crate::core::timeline::ActivityHeatmap;
use crate::core::vocabulary::TermCount;

/// Renders a report as aligned, human-readable sections.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::output::report_to_text;
/// use chatlens::core::{AnalysisReport, ChatLog, UserFilter};
/// use chatlens::parsers::parse_lines;
///
/// let log = ChatLog::from_messages(parse_lines(&["5/1/24, 14:30 - Alice: Hi"]));
/// let report =
///     AnalysisReport::build(log.records(), &UserFilter::Overall, None, &AnalysisConfig::default());
///
/// let text = report_to_text(&report);
/// assert!(text.contains("Total messages:  1"));
/// ```
pub fn report_to_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = render(report, &mut out);
    out
}

fn render(report: &AnalysisReport, out: &mut String) -> std::fmt::Result {
    let stats = &report.stats;
    writeln!(out, "Top Statistics ({})", report.user)?;
    writeln!(out, "  Total messages:  {}", stats.messages)?;
    writeln!(out, "  Total words:     {}", stats.words)?;
    writeln!(out, "  Media shared:    {}", stats.media)?;
    writeln!(out, "  Links shared:    {}", stats.links)?;

    section(out, "Monthly Timeline")?;
    for point in &report.monthly_timeline {
        writeln!(out, "  {:<20} {}", point.label, point.messages)?;
    }

    section(out, "Daily Timeline")?;
    for point in &report.daily_timeline {
        writeln!(out, "  {:<20} {}", point.date.to_string(), point.messages)?;
    }

    section(out, "Most Busy Days")?;
    for entry in &report.busiest_days {
        writeln!(out, "  {:<20} {}", entry.label, entry.messages)?;
    }

    section(out, "Most Busy Months")?;
    for entry in &report.busiest_months {
        writeln!(out, "  {:<20} {}", entry.label, entry.messages)?;
    }

    section(out, "Weekly Activity Map")?;
    render_heatmap(&report.heatmap, out)?;

    if let Some(busy) = &report.busy_users {
        section(out, "Most Busy Users")?;
        for user in &busy.top {
            writeln!(out, "  {:<20} {}", user.author, user.messages)?;
        }
        writeln!(out)?;
        writeln!(out, "  {:<20} Percent", "Name")?;
        for share in &busy.shares {
            writeln!(out, "  {:<20} {:.2}", share.author, share.percent)?;
        }
    }

    section(out, "Most Common Words")?;
    match &report.common_words {
        Ok(words) => render_terms(words, out)?,
        Err(e) => writeln!(out, "  unavailable: {}", e)?,
    }

    section(out, "Emoji Analysis")?;
    render_terms(&report.common_emoji, out)?;

    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)
}

fn render_terms(terms: &[TermCount], out: &mut String) -> std::fmt::Result {
    if terms.is_empty() {
        return writeln!(out, "  (none)");
    }
    for term in terms {
        writeln!(out, "  {:<20} {}", term.term, term.count)?;
    }
    Ok(())
}

fn render_heatmap(heatmap: &ActivityHeatmap, out: &mut String) -> std::fmt::Result {
    if heatmap.is_empty() {
        return writeln!(out, "  (none)");
    }

    write!(out, "  {:<10}", "")?;
    for period in &heatmap.periods {
        write!(out, "{:>7}", period)?;
    }
    writeln!(out)?;

    for (day, row) in heatmap.days.iter().zip(&heatmap.counts) {
        write!(out, "  {:<10}", day)?;
        for count in row {
            write!(out, "{:>7}", count)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
