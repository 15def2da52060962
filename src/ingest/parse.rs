//! Tolerant parsing of raw device log text into `Reading`s.
//!
//! The logger firmware occasionally emits corrupted or partial lines, so the
//! parser's contract is deliberately lenient:
//!
//! - **Never errors**: malformed input degrades to fewer readings.
//! - **Line-level recovery**: one bad line never poisons its neighbors.
//! - **Deterministic behavior**: a fixed timestamp format list, no locale
//!   lookups or hidden state.
//!
//! Expected line shape (one record per line, CRLF or LF):
//!
//! ```text
//! 2026-02-08 12:00:21,Humidity: 59.00%  Temp: 18.10C
//! ```

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::domain::Reading;

/// First-field tokens that mark a header line (case-insensitive).
const HEADER_TOKENS: [&str; 3] = ["timestamp", "time", "date"];

static HUMIDITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)humidity\s*:\s*(-?\d+(?:\.\d+)?)\s*%").expect("humidity pattern")
});

static TEMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)temp\s*:\s*(-?\d+(?:\.\d+)?)\s*C").expect("temperature pattern")
});

/// Per-blob line accounting (candidate lines only; blanks and the header
/// line are not candidates).
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobCounts {
    pub lines_read: usize,
    pub lines_dropped: usize,
}

/// Parse one raw blob into readings, in appearance order.
///
/// Malformed lines (no comma, unparseable timestamp, missing either field,
/// non-finite value) are silently skipped.
pub fn parse_blob(raw: &str) -> Vec<Reading> {
    parse_blob_counted(raw).0
}

/// Like [`parse_blob`], but also reports how many candidate lines were seen
/// and how many were dropped.
pub fn parse_blob_counted(raw: &str) -> (Vec<Reading>, BlobCounts) {
    // Normalize CRLF up front so the split below treats both endings the same.
    let normalized = raw.replace("\r\n", "\n");

    let mut readings = Vec::new();
    let mut counts = BlobCounts::default();
    let mut first_content_line = true;

    for line in normalized.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if first_content_line {
            first_content_line = false;
            if is_header_line(line) {
                continue;
            }
        }

        counts.lines_read += 1;
        match parse_line(line) {
            Some(reading) => readings.push(reading),
            None => counts.lines_dropped += 1,
        }
    }

    (readings, counts)
}

/// Parse a single data line, or `None` if it is malformed in any way.
pub fn parse_line(line: &str) -> Option<Reading> {
    // Split at the *first* comma only; the payload may itself contain commas.
    // A line with a different delimiter (tabs, semicolons) has no comma and
    // is dropped here, by design.
    let (ts_field, payload) = line.split_once(',')?;

    let timestamp = parse_timestamp(ts_field.trim())?;
    let humidity = extract_value(&HUMIDITY_RE, payload)?;
    let temperature = extract_value(&TEMP_RE, payload)?;

    Some(Reading {
        timestamp,
        temperature,
        humidity,
    })
}

fn is_header_line(line: &str) -> bool {
    let first_field = line.split(',').next().unwrap_or(line).trim();
    HEADER_TOKENS
        .iter()
        .any(|t| first_field.eq_ignore_ascii_case(t))
}

/// Permissive timestamp parsing over a fixed format list.
///
/// The device writes `YYYY-MM-DD HH:MM:SS`, but exports that passed through
/// spreadsheets show up with `T` separators, slashes, or US-style ordering.
/// Ambiguous day/month cases resolve in list order (US `M/D/YYYY` wins),
/// which keeps parsing deterministic.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FMTS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %I:%M:%S %p",
    ];
    for fmt in FMTS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }
    None
}

/// Labeled-value extraction: first capture of `re` in `payload`, parsed as a
/// finite f64.
fn extract_value(re: &Regex, payload: &str) -> Option<f64> {
    let caps = re.captures(payload)?;
    let v = caps.get(1)?.as_str().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    const GOOD: &str = "2026-02-08 12:00:21,Humidity: 59.00%  Temp: 18.10C";

    #[test]
    fn parses_well_formed_line() {
        let readings = parse_blob(GOOD);
        assert_eq!(readings.len(), 1);

        let r = &readings[0];
        assert_eq!(r.temperature, 18.1);
        assert_eq!(r.humidity, 59.0);
        assert_eq!(r.timestamp.year(), 2026);
        assert_eq!(r.timestamp.month(), 2);
        assert_eq!(r.timestamp.day(), 8);
        assert_eq!(r.timestamp.second(), 21);
    }

    #[test]
    fn tolerates_malformed_lines_without_erroring() {
        // One good line plus three malformed ones: no delimiter, bad date,
        // missing temperature field.
        let blob = format!(
            "{GOOD}\n\
             2026-02-08 12:05:21\tHumidity: 59.00%  Temp: 18.10C\n\
             not-a-date,Humidity: 59.00%  Temp: 18.10C\n\
             2026-02-08 12:10:21,Humidity: 59.00%\n"
        );

        let readings = parse_blob(&blob);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].temperature, 18.1);
        assert_eq!(readings[0].humidity, 59.0);
    }

    #[test]
    fn skips_leading_header_line() {
        let with_header = format!("Timestamp,Data\n{GOOD}");
        assert_eq!(parse_blob(&with_header).len(), parse_blob(GOOD).len());
    }

    #[test]
    fn header_detection_is_case_insensitive() {
        let blob = format!("TIMESTAMP,data\n{GOOD}");
        assert_eq!(parse_blob(&blob).len(), 1);
    }

    #[test]
    fn header_only_applies_to_first_content_line() {
        // A mid-file "Timestamp,..." line is a candidate (and gets dropped
        // for its unparseable date), not a header.
        let blob = format!("{GOOD}\nTimestamp,Data\n");
        let (readings, counts) = parse_blob_counted(&blob);
        assert_eq!(readings.len(), 1);
        assert_eq!(counts.lines_read, 2);
        assert_eq!(counts.lines_dropped, 1);
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let blob = format!("\r\n{GOOD}\r\n   \r\n2026-02-08 12:10:21,Humidity: 60.00%  Temp: 18.20C\r\n");
        let readings = parse_blob(&blob);
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].humidity, 60.0);
    }

    #[test]
    fn field_order_and_spacing_are_flexible() {
        let blob = "2026-02-08 12:00:21,Temp:   18.10C   humidity : 59.00 %";
        let readings = parse_blob(blob);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].temperature, 18.1);
        assert_eq!(readings[0].humidity, 59.0);
    }

    #[test]
    fn payload_commas_stay_in_payload() {
        let blob = "2026-02-08 12:00:21,Humidity: 59.00%, Temp: 18.10C";
        assert_eq!(parse_blob(blob).len(), 1);
    }

    #[test]
    fn negative_temperature_parses() {
        let blob = "2026-02-08 12:00:21,Humidity: 80.00%  Temp: -3.50C";
        let readings = parse_blob(blob);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].temperature, -3.5);
    }

    #[test]
    fn alternate_timestamp_formats_parse() {
        for line in [
            "2026-02-08T12:00:21,Humidity: 59.00%  Temp: 18.10C",
            "2026/02/08 12:00:21,Humidity: 59.00%  Temp: 18.10C",
            "02/08/2026 12:00:21,Humidity: 59.00%  Temp: 18.10C",
        ] {
            let readings = parse_blob(line);
            assert_eq!(readings.len(), 1, "line: {line}");
            let ts = readings[0].timestamp;
            assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2026, 2, 8).unwrap());
        }
    }

    #[test]
    fn empty_blob_yields_no_readings() {
        assert!(parse_blob("").is_empty());
        assert!(parse_blob("\r\n\r\n").is_empty());
    }
}
