//! Device log ingest.
//!
//! - tolerant line-level parsing (`parse`)
//! - batch ingest over many blobs, with drop counters for reporting

pub mod parse;

pub use parse::*;

use crate::domain::Reading;

/// Ingest output for a batch of blobs: one reading sequence per blob, plus
/// counters so data quality is visible in the run summary.
///
/// Malformed lines are dropped, never raised; the counters are the only
/// trace they leave.
#[derive(Debug, Clone, Default)]
pub struct IngestSummary {
    /// One sequence per blob, in blob order (order matters for dedup
    /// precedence downstream).
    pub sequences: Vec<Vec<Reading>>,
    pub blobs_read: usize,
    /// Candidate data lines seen (blank lines and header lines excluded).
    pub lines_read: usize,
    pub readings_parsed: usize,
    pub lines_dropped: usize,
}

/// Parse every blob, keeping per-blob sequences and aggregate counters.
pub fn ingest_blobs(blobs: &[String]) -> IngestSummary {
    let mut out = IngestSummary::default();
    for blob in blobs {
        let (readings, counts) = parse::parse_blob_counted(blob);
        out.blobs_read += 1;
        out.lines_read += counts.lines_read;
        out.readings_parsed += readings.len();
        out.lines_dropped += counts.lines_dropped;
        out.sequences.push(readings);
    }
    out
}
