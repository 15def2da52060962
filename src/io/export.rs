//! Write the dashboard to a JSON file.
//!
//! Dashboard JSON is the "portable" representation of a run:
//! - the filtered, deduplicated readings
//! - the statistics summary (or `null` when there is no data)
//! - the chart series
//!
//! Instants cross this boundary as ISO-8601 strings; JSON has no native
//! instant type and cache layers round-trip through it. The schema is
//! defined by `domain::DashboardFile`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::app::pipeline::RunOutput;
use crate::domain::{DashboardFile, ISO_FMT, RangeSelector, ReadingRecord, SummaryRecord};
use crate::error::AppError;

/// Write a dashboard JSON file.
pub fn write_dashboard_json(
    path: &Path,
    run: &RunOutput,
    range: RangeSelector,
    generated_at: NaiveDateTime,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create dashboard JSON '{}': {e}", path.display()))
    })?;

    let dashboard = build_dashboard_file(run, range, generated_at);

    serde_json::to_writer_pretty(file, &dashboard)
        .map_err(|e| AppError::new(2, format!("Failed to write dashboard JSON: {e}")))?;

    Ok(())
}

fn build_dashboard_file(run: &RunOutput, range: RangeSelector, generated_at: NaiveDateTime) -> DashboardFile {
    DashboardFile {
        tool: "wx".to_string(),
        generated_at: generated_at.format(ISO_FMT).to_string(),
        range,
        readings: run.readings.iter().map(ReadingRecord::from).collect(),
        summary: run.summary.as_ref().map(SummaryRecord::from),
        chart: run.chart.clone(),
    }
}
