//! Reading-sequence operations: multi-source merge/dedup and range filtering.
//!
//! Both operations are pure and total: empty input produces empty output,
//! never an error.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::domain::{RangeSelector, Reading};

/// Merge per-source sequences into one chronologically ordered, deduplicated
/// sequence.
///
/// The dedup key is the reading's numeric instant (epoch milliseconds, i.e.
/// whole-second granularity for this device). On a key collision the
/// earliest-encountered reading wins, regardless of value differences — the
/// input order of `sequences` (and of readings within each) defines
/// precedence. The result is sorted ascending by timestamp and contains no
/// duplicate keys.
pub fn merge(sequences: &[Vec<Reading>]) -> Vec<Reading> {
    let total: usize = sequences.iter().map(Vec::len).sum();
    let mut seen: HashSet<i64> = HashSet::with_capacity(total);
    let mut out: Vec<Reading> = Vec::with_capacity(total);

    for seq in sequences {
        for reading in seq {
            if seen.insert(reading.epoch_millis()) {
                out.push(*reading);
            }
        }
    }

    // Keys are unique at this point, so an unstable sort would also be fine;
    // stable keeps the intent obvious.
    out.sort_by_key(Reading::epoch_millis);
    out
}

/// Select the readings inside the lookback window ending at `now`.
///
/// `all` returns the input unchanged. Otherwise the cutoff is
/// `now - window(range)` and readings with `timestamp >= cutoff` are kept
/// (inclusive), preserving order. `now` is an explicit parameter so the
/// filter stays deterministic and testable; no ambient clock is read here.
pub fn filter_range(readings: &[Reading], range: RangeSelector, now: NaiveDateTime) -> Vec<Reading> {
    match range.window() {
        None => readings.to_vec(),
        Some(window) => {
            let cutoff = now - window;
            readings
                .iter()
                .filter(|r| r.timestamp >= cutoff)
                .copied()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 8)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn reading(offset_secs: i64, temperature: f64) -> Reading {
        Reading {
            timestamp: base() + Duration::seconds(offset_secs),
            temperature,
            humidity: 50.0,
        }
    }

    #[test]
    fn merge_sorts_ascending() {
        let a = vec![reading(300, 18.3), reading(0, 18.0), reading(600, 18.6)];
        let merged = merge(&[a]);

        assert_eq!(merged.len(), 3);
        for pair in merged.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        assert_eq!(merged[0].temperature, 18.0);
    }

    #[test]
    fn merge_with_itself_has_no_duplicates() {
        let a = vec![reading(0, 18.0), reading(60, 18.1), reading(120, 18.2)];
        let once = merge(&[a.clone()]);
        let twice = merge(&[a.clone(), a]);

        assert_eq!(once.len(), twice.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_is_idempotent() {
        let a = vec![reading(60, 18.1), reading(0, 18.0)];
        let b = vec![reading(0, 99.0), reading(120, 18.2)];

        let merged = merge(&[a, b]);
        let again = merge(&[merged.clone()]);
        assert_eq!(merged, again);
    }

    #[test]
    fn first_seen_wins_across_sources() {
        // Same second, different values: the earlier source's value survives.
        let a = vec![reading(0, 18.0)];
        let b = vec![reading(0, 99.0)];

        let merged = merge(&[a, b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].temperature, 18.0);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(merge(&[]).is_empty());
        assert!(merge(&[Vec::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn seven_day_window_keeps_recent_readings() {
        let now = base();
        let readings = vec![
            Reading {
                timestamp: now - Duration::hours(200),
                temperature: 17.0,
                humidity: 50.0,
            },
            Reading {
                timestamp: now - Duration::hours(100),
                temperature: 18.0,
                humidity: 51.0,
            },
            Reading {
                timestamp: now - Duration::hours(1),
                temperature: 19.0,
                humidity: 52.0,
            },
        ];

        let kept = filter_range(&readings, RangeSelector::Week, now);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].temperature, 18.0);
        assert_eq!(kept[1].temperature, 19.0);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let now = base();
        let at_cutoff = Reading {
            timestamp: now - Duration::hours(24),
            temperature: 18.0,
            humidity: 50.0,
        };
        let kept = filter_range(&[at_cutoff], RangeSelector::Day, now);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn all_time_returns_input_unchanged() {
        let readings = vec![reading(60, 18.1), reading(0, 18.0)];
        let kept = filter_range(&readings, RangeSelector::All, base());
        // Same elements, same order; no re-sorting.
        assert_eq!(kept, readings);
    }
}
