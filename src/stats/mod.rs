//! Statistics aggregation over a reading sequence.

use crate::domain::{Reading, StatsSummary};

/// Reduce a chronologically sorted sequence to summary statistics, or `None`
/// when there is nothing to summarize.
///
/// Callers pass an already-merged (sorted, deduplicated) sequence; this
/// function does not re-sort, so "current" and "last updated" come straight
/// from the final element. Averages are rounded to one decimal place;
/// extrema are exact.
pub fn compute(readings: &[Reading]) -> Option<StatsSummary> {
    let last = readings.last()?;
    let n = readings.len() as f64;

    let mut sum_temp = 0.0;
    let mut sum_hum = 0.0;
    let mut min_temp = f64::INFINITY;
    let mut max_temp = f64::NEG_INFINITY;
    let mut min_hum = f64::INFINITY;
    let mut max_hum = f64::NEG_INFINITY;

    for r in readings {
        sum_temp += r.temperature;
        sum_hum += r.humidity;
        min_temp = min_temp.min(r.temperature);
        max_temp = max_temp.max(r.temperature);
        min_hum = min_hum.min(r.humidity);
        max_hum = max_hum.max(r.humidity);
    }

    Some(StatsSummary {
        current_temperature: last.temperature,
        current_humidity: last.humidity,
        avg_temperature: round1(sum_temp / n),
        avg_humidity: round1(sum_hum / n),
        min_temperature: min_temp,
        max_temperature: max_temp,
        min_humidity: min_hum,
        max_humidity: max_hum,
        total_readings: readings.len(),
        last_updated: last.timestamp,
    })
}

/// Round to one decimal place, half away from zero (`f64::round` semantics).
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
