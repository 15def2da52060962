//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory throughout the parse/merge/stats pipeline
//! - exported to JSON for the dashboard/cache boundary
//! - reloaded later by downstream consumers without re-parsing device logs

use std::path::PathBuf;

use chrono::{Duration, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Timestamp format used whenever an instant crosses a text boundary
/// (JSON export, cache layers). Caches round-trip through JSON, which has no
/// native instant type, so we always serialize instants as ISO-8601 strings.
pub const ISO_FMT: &str = "%Y-%m-%dT%H:%M:%S";

/// One timestamped temperature/humidity observation from the device.
///
/// A `Reading` is only constructed when both values parsed as finite numbers;
/// partial records never enter a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Observation instant, second precision (the device does not report
    /// sub-second times or a UTC offset).
    pub timestamp: NaiveDateTime,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
}

impl Reading {
    /// Numeric instant value used as the dedup/sort key and as the chart
    /// sort key. Millisecond resolution; source precision is whole seconds,
    /// so two readings in the same second share a key.
    pub fn epoch_millis(&self) -> i64 {
        self.timestamp.and_utc().timestamp_millis()
    }
}

/// Serialized form of a `Reading` for the JSON boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// ISO-8601 (`YYYY-MM-DDTHH:MM:SS`), no offset.
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl From<&Reading> for ReadingRecord {
    fn from(r: &Reading) -> Self {
        ReadingRecord {
            timestamp: r.timestamp.format(ISO_FMT).to_string(),
            temperature: r.temperature,
            humidity: r.humidity,
        }
    }
}

/// Relative lookback window for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum RangeSelector {
    /// Last 24 hours.
    #[serde(rename = "24h")]
    #[value(name = "24h")]
    Day,
    /// Last 7 days.
    #[serde(rename = "7d")]
    #[value(name = "7d")]
    Week,
    /// Last 30 days.
    #[serde(rename = "30d")]
    #[value(name = "30d")]
    Month,
    /// No lookback limit.
    #[serde(rename = "all")]
    #[value(name = "all")]
    All,
}

impl RangeSelector {
    /// Lookback window, or `None` for `all`.
    pub fn window(self) -> Option<Duration> {
        match self {
            RangeSelector::Day => Some(Duration::hours(24)),
            RangeSelector::Week => Some(Duration::days(7)),
            RangeSelector::Month => Some(Duration::days(30)),
            RangeSelector::All => None,
        }
    }

    /// The literal token accepted on the CLI and written to exports.
    pub fn token(self) -> &'static str {
        match self {
            RangeSelector::Day => "24h",
            RangeSelector::Week => "7d",
            RangeSelector::Month => "30d",
            RangeSelector::All => "all",
        }
    }
}

/// Summary statistics over a reading sequence.
///
/// Recomputed fresh from the full deduplicated sequence on every run; never
/// incrementally updated. Absent entirely (`Option::None` at the call site)
/// when there are no readings.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Values of the chronologically last reading.
    pub current_temperature: f64,
    pub current_humidity: f64,

    /// Arithmetic means, rounded to one decimal place.
    pub avg_temperature: f64,
    pub avg_humidity: f64,

    /// Exact extrema, unrounded.
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,

    pub total_readings: usize,
    /// Timestamp of the chronologically last reading.
    pub last_updated: NaiveDateTime,
}

/// Serialized form of `StatsSummary` for the JSON boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub current_temperature: f64,
    pub current_humidity: f64,
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
    pub total_readings: usize,
    /// ISO-8601 (`YYYY-MM-DDTHH:MM:SS`).
    pub last_updated: String,
}

impl From<&StatsSummary> for SummaryRecord {
    fn from(s: &StatsSummary) -> Self {
        SummaryRecord {
            current_temperature: s.current_temperature,
            current_humidity: s.current_humidity,
            avg_temperature: s.avg_temperature,
            avg_humidity: s.avg_humidity,
            min_temperature: s.min_temperature,
            max_temperature: s.max_temperature,
            min_humidity: s.min_humidity,
            max_humidity: s.max_humidity,
            total_readings: s.total_readings,
            last_updated: s.last_updated.format(ISO_FMT).to_string(),
        }
    }
}

/// A display-ready chart sample.
///
/// `label` is for human axes only and is never used as a sort or merge key;
/// `sort_key` carries the exact instant (epoch milliseconds) so downstream
/// consumers can re-order or re-filter without re-parsing the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub sort_key: i64,
    pub temperature: f64,
    pub humidity: f64,
}

/// Where the raw log blobs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobSource {
    /// Remote store configured via `WX_STORE_URL` (and optional token).
    Remote,
    /// Every regular file in a local directory.
    Dir(PathBuf),
    /// Seeded synthetic device output (offline demos and smoke tests).
    Sample,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub source: BlobSource,
    pub range: RangeSelector,

    /// Rows shown in the recent-readings table.
    pub recent: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Synthetic sample settings (ignored unless `source == Sample`).
    pub sample_count: usize,
    pub sample_seed: u64,
}

/// The exported dashboard JSON file.
///
/// The schema is the crate's only persistent artifact: serialized readings,
/// the summary (or `null` when there is no data), and the chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardFile {
    pub tool: String,
    /// ISO-8601 instant the export was generated at.
    pub generated_at: String,
    /// Range token the readings were filtered with (`24h`/`7d`/`30d`/`all`).
    pub range: RangeSelector,
    pub readings: Vec<ReadingRecord>,
    pub summary: Option<SummaryRecord>,
    pub chart: Vec<ChartPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 8)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn epoch_millis_is_second_aligned() {
        let r = Reading {
            timestamp: ts(12, 0, 21),
            temperature: 18.1,
            humidity: 59.0,
        };
        assert_eq!(r.epoch_millis() % 1000, 0);
    }

    #[test]
    fn range_tokens_round_trip_serde() {
        for (sel, token) in [
            (RangeSelector::Day, "\"24h\""),
            (RangeSelector::Week, "\"7d\""),
            (RangeSelector::Month, "\"30d\""),
            (RangeSelector::All, "\"all\""),
        ] {
            assert_eq!(serde_json::to_string(&sel).unwrap(), token);
            let back: RangeSelector = serde_json::from_str(token).unwrap();
            assert_eq!(back, sel);
        }
    }

    #[test]
    fn reading_record_uses_iso_timestamp() {
        let r = Reading {
            timestamp: ts(12, 0, 21),
            temperature: 18.1,
            humidity: 59.0,
        };
        let rec = ReadingRecord::from(&r);
        assert_eq!(rec.timestamp, "2026-02-08T12:00:21");
    }

    #[test]
    fn windows_match_tokens() {
        assert_eq!(RangeSelector::Day.window(), Some(Duration::hours(24)));
        assert_eq!(RangeSelector::Week.window(), Some(Duration::days(7)));
        assert_eq!(RangeSelector::Month.window(), Some(Duration::days(30)));
        assert_eq!(RangeSelector::All.window(), None);
    }
}
