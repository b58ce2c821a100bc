//! Run statistics

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Counters collected over a single pipeline run
///
/// Counters only ever grow; the caller reads them once the run is over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Files written to the document
    pub files_processed: u64,
    /// Sum of the original byte sizes of those files
    pub bytes_processed: u64,
    /// Estimated tokens in the final document (0 when counting is off)
    pub tokens: u64,
    /// Entries skipped because of a per-entry failure
    pub errors: u64,
}

impl Stats {
    /// Create an empty set of counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a file that made it into the document
    pub fn record_file(&mut self, size: u64) {
        self.files_processed += 1;
        self.bytes_processed += size;
    }

    /// Count a skipped entry
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Fold an estimated token count into the totals
    pub fn add_tokens(&mut self, tokens: u64) {
        self.tokens += tokens;
    }

    /// Total size in megabytes
    pub fn megabytes(&self) -> f64 {
        self.bytes_processed as f64 / (1024.0 * 1024.0)
    }
}

/// What a finished run hands back to its caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub stats: Stats,
    /// Final document path, `None` when written to stdout
    pub output: Option<PathBuf>,
    /// Whether the whole document was held in memory before writing
    pub buffered: bool,
}
