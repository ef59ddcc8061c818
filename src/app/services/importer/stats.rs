//! Import statistics and result reporting
//!
//! Tracks per-batch outcomes so the caller can report aggregate counts,
//! with per-line rejection reasons preserved for the diagnostic log.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one import batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportStats {
    /// Total number of lines consumed from the source
    pub lines_read: usize,

    /// Number of records parsed and handed to the sink
    pub records_accepted: usize,

    /// Number of non-empty lines the parser rejected
    pub lines_rejected: usize,

    /// Number of empty lines skipped without parsing
    pub lines_empty: usize,

    /// Per-line rejection diagnostics, in source order
    pub errors: Vec<String>,
}

impl ImportStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            records_accepted: 0,
            lines_rejected: 0,
            lines_empty: 0,
            errors: Vec::new(),
        }
    }

    /// Share of parseable lines accepted, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.records_accepted + self.lines_rejected;
        if attempted == 0 {
            0.0
        } else {
            (self.records_accepted as f64 / attempted as f64) * 100.0
        }
    }

    /// An import succeeds when at least one record was accepted
    pub fn is_successful(&self) -> bool {
        self.records_accepted > 0
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
