//! Batch importer for MPC one-line comet-element sources
//!
//! Reads an element file, parses each line and upserts accepted records into
//! the sink, keyed by the normalized section key. A later record with the
//! same key replaces the earlier one. Per-line failures are recovered here;
//! only stream-level failures (unreadable source, failing sink flush) abort
//! a batch.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, info};

use super::{ElementSink, ImportStats};
use crate::app::services::mpc_parser::{ParserOptions, RecordParser};
use crate::{Error, Result};

/// Importer for files of one-line comet-element records
pub struct BatchImporter {
    parser: RecordParser,
    progress: Option<ProgressBar>,
}

impl BatchImporter {
    /// Create an importer with the given parser options
    pub fn new(options: ParserOptions) -> Self {
        Self {
            parser: RecordParser::new(options),
            progress: None,
        }
    }

    /// Attach a progress bar, ticked once per consumed line
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Import every record of an element file into the sink
    ///
    /// The whole file is buffered up front; element files are bounded by
    /// their line format (about 200 bytes per record) and stay small even
    /// at thousands of records. Fails with
    /// [`Error::SourceUnavailable`] when the file cannot be read.
    pub fn import_file(&self, path: &Path, sink: &mut dyn ElementSink) -> Result<ImportStats> {
        info!("Importing MPC comet elements from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::source_unavailable(path.display().to_string(), e))?;

        if let Some(progress) = &self.progress {
            progress.set_length(content.lines().count() as u64);
        }

        self.import_lines(content.lines(), sink)
    }

    /// Import records from pre-split lines into the sink
    ///
    /// Line terminators must already be stripped; a trailing carriage return
    /// is tolerated. Empty lines are skipped and counted separately from
    /// rejections. The sink is flushed exactly once, after the last line.
    pub fn import_lines<'a, I>(&self, lines: I, sink: &mut dyn ElementSink) -> Result<ImportStats>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = ImportStats::new();

        for (index, raw) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            stats.lines_read += 1;

            if let Some(progress) = &self.progress {
                progress.inc(1);
            }

            if line.is_empty() {
                debug!("Skipping empty line {}", line_number);
                stats.lines_empty += 1;
                continue;
            }

            match self.parser.parse(line) {
                Ok(elements) => {
                    debug!(
                        "Accepted record {} as [{}]",
                        line_number, elements.section_key
                    );
                    sink.upsert(&elements.section_key, elements.to_store_fields());
                    stats.records_accepted += 1;
                }
                Err(reason) => {
                    debug!("Rejected line {}: {}", line_number, reason);
                    stats.lines_rejected += 1;
                    stats.errors.push(format!("line {line_number}: {reason}"));
                }
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }

        sink.flush()?;

        info!(
            "Import finished: {} accepted, {} rejected, {} empty of {} lines",
            stats.records_accepted, stats.lines_rejected, stats.lines_empty, stats.lines_read
        );

        Ok(stats)
    }
}

/// Sink that drops every record
///
/// Backs dry runs: records flow through the full parse path and counters,
/// nothing reaches a store.
#[derive(Debug, Default)]
pub struct DiscardSink {
    /// Number of upserts received
    pub upserts: usize,
}

impl ElementSink for DiscardSink {
    fn upsert(&mut self, _key: &str, _fields: Vec<(String, String)>) {
        self.upserts += 1;
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
