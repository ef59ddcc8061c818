//! Test fixtures for the batch importer
//!
//! Provides a recording sink that captures upsert/flush traffic so tests can
//! assert on sink interaction without touching the filesystem.

use crate::app::services::importer::ElementSink;


/// Sink that records every upsert and counts flushes
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub upserts: Vec<(String, Vec<(String, String)>)>,
    pub flushes: usize,
    pub fail_flush: bool,
}

impl ElementSink for RecordingSink {
    fn upsert(&mut self, key: &str, fields: Vec<(String, String)>) {
        self.upserts.push((key.to_string(), fields));
    }

    fn flush(&mut self) -> crate::Result<()> {
        self.flushes += 1;
        if self.fail_flush {
            return Err(crate::Error::sink_unavailable(
                "recording-sink",
                "flush forced to fail",
            ));
        }
        Ok(())
    }
}

/// The 2P/Encke reference record (see the parser fixtures)
pub const ENCKE_LINE: &str = crate::app::services::mpc_parser::tests::ENCKE_LINE;
