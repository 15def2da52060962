//! Shared dashboard pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! parse -> merge/dedup -> range filter -> { stats, chart projection }
//!
//! The pipeline is a total, pure function of `(config, blobs, now)`: blob
//! acquisition and clock reads stay in `app.rs`, so callers (and tests) can
//! run it on fixed inputs and expect identical output every time.

use chrono::NaiveDateTime;

use crate::chart;
use crate::domain::{ChartPoint, DashboardConfig, Reading, StatsSummary};
use crate::ingest::{self, IngestSummary};
use crate::series;
use crate::stats;

/// All computed outputs of a single dashboard run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestSummary,
    /// Merged sequence length before range filtering; `ingest.readings_parsed
    /// - merged_total` is the number of duplicate timestamps collapsed.
    pub merged_total: usize,
    /// Readings inside the requested range, sorted, deduplicated.
    pub readings: Vec<Reading>,
    /// `None` when no readings remain ("no data available yet").
    pub summary: Option<StatsSummary>,
    pub chart: Vec<ChartPoint>,
}

/// Execute the full pipeline over pre-fetched blobs.
pub fn run_dashboard(config: &DashboardConfig, blobs: &[String], now: NaiveDateTime) -> RunOutput {
    let ingest = ingest::ingest_blobs(blobs);
    let merged = series::merge(&ingest.sequences);
    let merged_total = merged.len();

    let readings = series::filter_range(&merged, config.range, now);
    let summary = stats::compute(&readings);
    let chart = chart::project(&readings);

    RunOutput {
        ingest,
        merged_total,
        readings,
        summary,
        chart,
    }
}
