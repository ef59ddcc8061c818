//! Shared components for CLI commands
//!
//! Logging setup, progress-bar styling and import-summary reporting used
//! across the command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::app::services::importer::ImportStats;
use crate::Result;

/// Machine-readable import report for `--output-format json`
#[derive(Debug, Serialize)]
pub struct ImportReport<'a> {
    /// Element source file
    pub source: String,
    /// Store the records were written to, absent on dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Wall-clock import time in seconds
    pub duration_secs: f64,
    /// Batch statistics
    pub stats: &'a ImportStats,
}

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mpc_importer={log_level}")));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Create a progress bar with appropriate styling
///
/// The length is set by the importer once the source has been read.
pub fn create_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print the human-readable import summary
pub fn report_human(stats: &ImportStats, store: Option<&str>, dry_run: bool, duration: Duration) {
    if dry_run {
        println!("{}", "Dry run - store not modified".yellow().bold());
    }

    let accepted = stats.records_accepted.to_string();
    println!(
        "Imported {} of {} lines in {:.2}s",
        accepted.as_str().green().bold(),
        stats.lines_read,
        duration.as_secs_f64()
    );
    if stats.lines_rejected > 0 {
        let rejected = stats.lines_rejected.to_string();
        println!(
            "Rejected {} malformed lines ({:.1}% of parseable lines accepted)",
            rejected.as_str().red().bold(),
            stats.success_rate()
        );
    }
    if stats.lines_empty > 0 {
        println!("Skipped {} empty lines", stats.lines_empty);
    }
    if let Some(store) = store {
        println!("Store: {store}");
    }

    // Per-line reasons go to the diagnostic log, not the primary summary
    for error in &stats.errors {
        debug!("{}", error);
    }
}

/// Print the JSON import summary
pub fn report_json(report: &ImportReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| crate::Error::configuration(format!("Failed to serialize report: {e}")))?;
    println!("{json}");
    Ok(())
}
