//! # chatlens CLI
//!
//! Command-line front end for the chatlens library. Status lines go to
//! stderr so stdout carries only the report (or the author list).

use std::env;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::output::write_records_csv;
use chatlens::core::{AnalysisReport, ChatLog};
use chatlens::format::{to_format_string, write_to_format};
use chatlens::parser::Parser;
use chatlens::parsers::WhatsAppParser;

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let debug_enabled = env::var("CHATLENS_DEBUG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    let filter = if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let user = args.user_filter();
    let date_filter = args.date_filter()?;
    let config = args.analysis_config();

    eprintln!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("📂 Input:   {}", args.input.display());
    eprintln!("👤 User:    {}", user);
    if let Some(after) = &args.after {
        eprintln!("📅 After:   {}", after);
    }
    if let Some(before) = &args.before {
        eprintln!("📅 Before:  {}", before);
    }

    let parser = WhatsAppParser::new();
    let parse_start = Instant::now();
    let log = ChatLog::from_messages(parser.parse(&args.input)?);
    eprintln!(
        "⏳ Parsed {} messages with {} ({:.2}s)",
        log.len(),
        parser.name(),
        parse_start.elapsed().as_secs_f64()
    );

    let log = if date_filter.is_active() {
        let filtered = log.filtered(&date_filter);
        eprintln!("🔍 {} messages after filtering", filtered.len());
        filtered
    } else {
        log
    };

    if args.users {
        for author in log.authors() {
            println!("{}", author);
        }
        return Ok(());
    }

    if let Some(path) = &args.records {
        write_records_csv(log.records(), path)?;
        eprintln!("💾 Records written to {}", path.display());
    }

    let stop_words = config.load_stop_words();
    let mut report = AnalysisReport::build(
        log.records(),
        &user,
        stop_words.as_ref().ok(),
        &config,
    );
    if let Err(e) = stop_words {
        report.common_words = Err(e);
    }

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, args.format)?;
            eprintln!("✅ {} report saved to {}", args.format, path.display());
        }
        None => println!("{}", to_format_string(&report, args.format)?.trim_end()),
    }

    tracing::debug!(
        elapsed_ms = total_start.elapsed().as_millis() as u64,
        "analysis finished"
    );
    Ok(())
}
