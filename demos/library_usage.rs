//! Example: Using chatlens as a library
//!
//! This example parses a small export held in memory, narrows it by date and
//! prints a few aggregations next to the full text report.
//!
//! Run with: cargo run --example library_usage

use chatlens::prelude::*;

const EXPORT: &str = "\
Messages and calls are end-to-end encrypted.
1/1/24, 00:15 - Alice: Happy new year 🎉
1/1/24, 00:16 - Bob: Happy new year! 😂
1/1/24, 00:17 - Bob: <Media omitted>
3/1/24, 18:02 - Alice: dinner at 8?
see the menu at example.com
3/1/24, 18:05 - Bob: sure 👍
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatlens Library Usage Examples ===\n");

    // Example 1: Parse an export
    println!("1. Parsing:");
    let parser = WhatsAppParser::new();
    let log = ChatLog::from_messages(parser.parse_str(EXPORT)?);
    for record in log.records() {
        println!(
            "   [{} {}] {}: {}",
            record.time.day_name,
            record.period(),
            record.author(),
            record.body().replace('\n', " | ")
        );
    }

    // Example 2: Headline numbers per author
    println!("\n2. Stats per author:");
    for author in log.authors() {
        let stats = fetch_stats(log.records(), &UserFilter::author(author.as_str()));
        println!(
            "   {}: {} messages, {} words, {} media, {} links",
            author, stats.messages, stats.words, stats.media, stats.links
        );
    }

    // Example 3: Who talks the most
    println!("\n3. Activity shares:");
    for share in most_busy_users(log.records()).shares {
        println!("   {}: {:.2}%", share.author, share.percent);
    }

    // Example 4: Narrow by date
    println!("\n4. From 2 January on:");
    let later = log.filtered(&FilterConfig::new().with_date_from("2024-01-02")?);
    println!("   {} of {} messages", later.len(), log.len());

    // Example 5: Full report
    println!("\n5. Report:");
    let stop_words = StopWords::parse("the at");
    let report = AnalysisReport::build(
        log.records(),
        &UserFilter::Overall,
        Some(&stop_words),
        &AnalysisConfig::default(),
    );
    println!("{}", report_to_text(&report));

    Ok(())
}
