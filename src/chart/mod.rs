//! Projection of readings into display-ready chart points.

use crate::domain::{ChartPoint, Reading};

/// Axis label format: fixed English month abbreviation, day, hour:minute.
/// Display-only; ordering always goes through `sort_key`.
const LABEL_FMT: &str = "%b %d %H:%M";

/// Map readings 1:1 into chart points.
///
/// Length-preserving; no filtering or deduplication happens here (that
/// already happened upstream in the merge). `sort_key` is the exact epoch-
/// millisecond instant, so consumers can re-order or re-filter without
/// parsing `label`.
pub fn project(readings: &[Reading]) -> Vec<ChartPoint> {
    readings
        .iter()
        .map(|r| ChartPoint {
            label: r.timestamp.format(LABEL_FMT).to_string(),
            sort_key: r.epoch_millis(),
            temperature: r.temperature,
            humidity: r.humidity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn readings(n: usize) -> Vec<Reading> {
        let base = NaiveDate::from_ymd_opt(2026, 2, 8)
            .unwrap()
            .and_hms_opt(12, 0, 21)
            .unwrap();
        (0..n)
            .map(|i| Reading {
                timestamp: base + Duration::minutes(10 * i as i64),
                temperature: 18.0 + i as f64 * 0.1,
                humidity: 59.0,
            })
            .collect()
    }

    #[test]
    fn projection_is_length_preserving() {
        assert_eq!(project(&readings(5)).len(), 5);
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn labels_render_month_day_hour_minute() {
        let points = project(&readings(1));
        assert_eq!(points[0].label, "Feb 08 12:00");
    }

    #[test]
    fn sort_key_is_epoch_millis_and_ordered() {
        let rs = readings(3);
        let points = project(&rs);

        for (r, p) in rs.iter().zip(&points) {
            assert_eq!(p.sort_key, r.epoch_millis());
        }
        assert!(points.windows(2).all(|w| w[0].sort_key < w[1].sort_key));
    }

    #[test]
    fn values_carry_through_unchanged() {
        let rs = readings(2);
        let points = project(&rs);
        assert_eq!(points[1].temperature, rs[1].temperature);
        assert_eq!(points[1].humidity, rs[1].humidity);
    }
}
