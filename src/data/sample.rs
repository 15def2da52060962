//! Synthetic device output for offline demos and smoke tests.
//!
//! Produces text blobs in the exact line format the logger uploads, seeded
//! and therefore fully deterministic for a given `(count, seed, now)`.

use chrono::{Duration, NaiveDateTime, Timelike};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::error::AppError;

/// Minutes between consecutive synthetic readings (the hardware's flush
/// cadence).
const CADENCE_MIN: i64 = 10;

/// Lines repeated across adjacent blobs, so merge/dedup is exercised end to
/// end even in sample mode.
const BLOB_OVERLAP: usize = 3;

/// Generate `count` readings ending at `now`, rendered to three raw blobs
/// with overlapping tails.
///
/// The temperature follows a mild diurnal cycle with Gaussian noise; the
/// humidity moves inversely to it, clamped to `[0, 100]`.
pub fn generate_blobs(count: usize, seed: u64, now: NaiveDateTime) -> Result<Vec<String>, AppError> {
    if count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let temp_noise = Normal::new(0.0, 0.3)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;
    let hum_noise = Normal::new(0.0, 1.5)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let offset = CADENCE_MIN * (count - 1 - i) as i64;
        let ts = now - Duration::minutes(offset);

        let hour_frac = (ts.hour() as f64 + ts.minute() as f64 / 60.0) / 24.0;
        let diurnal = (std::f64::consts::TAU * (hour_frac - 0.25)).sin();

        let temperature = 18.0 + 4.0 * diurnal + temp_noise.sample(&mut rng);
        let humidity = (58.0 - 8.0 * diurnal + hum_noise.sample(&mut rng)).clamp(0.0, 100.0);

        lines.push(format!(
            "{},Humidity: {humidity:.2}%  Temp: {temperature:.2}C",
            ts.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    Ok(split_into_blobs(&lines))
}

/// Split rendered lines across three blobs whose boundaries overlap, with a
/// header line on the first blob (the firmware writes one per file rotation).
fn split_into_blobs(lines: &[String]) -> Vec<String> {
    let n = lines.len();
    if n <= BLOB_OVERLAP * 2 {
        return vec![format!("Timestamp,Data\n{}\n", lines.join("\n"))];
    }

    let third = n / 3;
    let cuts = [
        (0, (third + BLOB_OVERLAP).min(n)),
        (third, (2 * third + BLOB_OVERLAP).min(n)),
        (2 * third, n),
    ];

    cuts.iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let body = lines[start..end].join("\n");
            if i == 0 {
                format!("Timestamp,Data\n{body}\n")
            } else {
                format!("{body}\n")
            }
        })
        .collect()
}
