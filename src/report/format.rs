//! Formatted terminal output: run summary, statistics block, recent readings.
//!
//! We keep formatting code in one place so:
//! - the pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{BlobSource, DashboardConfig, Reading, StatsSummary};

/// Format the full run summary (source, ingest counters, statistics).
pub fn format_summary(run: &RunOutput, config: &DashboardConfig) -> String {
    let mut out = String::new();

    out.push_str("=== wx - Weather Station Dashboard ===\n");
    out.push_str(&format!("Source: {}\n", source_label(&config.source)));
    out.push_str(&format!("Range: {}\n", config.range.token()));
    out.push_str(&format!(
        "Ingest: {} blobs | {} lines | {} parsed | {} dropped\n",
        run.ingest.blobs_read,
        run.ingest.lines_read,
        run.ingest.readings_parsed,
        run.ingest.lines_dropped,
    ));

    let collapsed = run.ingest.readings_parsed.saturating_sub(run.merged_total);
    out.push_str(&format!(
        "Merged: {} readings ({collapsed} duplicate timestamps collapsed) | {} in range\n",
        run.merged_total,
        run.readings.len(),
    ));

    out.push('\n');
    out.push_str(&format_stats_block(run.summary.as_ref()));
    out
}

/// Format the statistics block alone, or the no-data line.
pub fn format_stats_block(summary: Option<&StatsSummary>) -> String {
    let Some(s) = summary else {
        return "No data available yet.\n".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!(
        "Current:  {:.1} C | {:.1} %\n",
        s.current_temperature, s.current_humidity
    ));
    out.push_str(&format!(
        "Average:  {:.1} C | {:.1} %\n",
        s.avg_temperature, s.avg_humidity
    ));
    out.push_str(&format!(
        "Temp:     min {:.1} C | max {:.1} C\n",
        s.min_temperature, s.max_temperature
    ));
    out.push_str(&format!(
        "Humidity: min {:.1} % | max {:.1} %\n",
        s.min_humidity, s.max_humidity
    ));
    out.push_str(&format!("Readings: {}\n", s.total_readings));
    out.push_str(&format!(
        "Updated:  {}\n",
        s.last_updated.format("%Y-%m-%d %H:%M:%S")
    ));
    out
}

/// Format the most recent `n` readings as a fixed-width table, newest first.
pub fn format_recent(readings: &[Reading], n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Recent readings (last {n}):\n"));
    out.push_str(&format!(
        "{:<20} {:>8} {:>10}\n",
        "timestamp", "temp C", "humidity %"
    ));
    out.push_str(&format!("{:-<20} {:-<8} {:-<10}\n", "", "", ""));

    for r in readings.iter().rev().take(n) {
        out.push_str(&format!(
            "{:<20} {:>8.1} {:>10.1}\n",
            r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            r.temperature,
            r.humidity,
        ));
    }

    out
}

fn source_label(source: &BlobSource) -> String {
    match source {
        BlobSource::Remote => "remote store".to_string(),
        BlobSource::Dir(path) => format!("dir '{}'", path.display()),
        BlobSource::Sample => "synthetic sample".to_string(),
    }
}
