//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - temperature: `o` (left axis, °C)
//! - humidity: `+` (right axis, %)

use crate::domain::ChartPoint;

const MIN_WIDTH: usize = 20;
const MIN_HEIGHT: usize = 5;

/// Render both series over time onto a fixed grid.
///
/// Each series is scaled to its own min/max so both stay readable; the left
/// axis labels temperature, the right axis humidity. Two points in the same
/// cell render as `o` (temperature wins).
pub fn render_ascii_chart(points: &[ChartPoint], width: usize, height: usize) -> String {
    if points.len() < 2 {
        return "(not enough data to chart)\n".to_string();
    }

    let width = width.max(MIN_WIDTH);
    let height = height.max(MIN_HEIGHT);

    let (k_min, k_max) = span(points.iter().map(|p| p.sort_key as f64));
    let (t_min, t_max) = pad_if_flat(span(points.iter().map(|p| p.temperature)));
    let (h_min, h_max) = pad_if_flat(span(points.iter().map(|p| p.humidity)));

    let mut grid = vec![vec![' '; width]; height];

    for p in points {
        let col = scale(p.sort_key as f64, k_min, k_max, width - 1);
        let hum_row = height - 1 - scale(p.humidity, h_min, h_max, height - 1);
        grid[hum_row][col] = '+';
    }
    for p in points {
        let col = scale(p.sort_key as f64, k_min, k_max, width - 1);
        let temp_row = height - 1 - scale(p.temperature, t_min, t_max, height - 1);
        grid[temp_row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str("temperature (o, C)  /  humidity (+, %)\n");

    for (row_idx, row) in grid.iter().enumerate() {
        let frac = 1.0 - row_idx as f64 / (height - 1) as f64;
        let left = axis_label(row_idx, height, t_min + frac * (t_max - t_min));
        let right = axis_label(row_idx, height, h_min + frac * (h_max - h_min));

        out.push_str(&format!("{left:>6} |"));
        out.extend(row.iter());
        out.push_str(&format!("| {right}\n"));
    }

    out.push_str(&format!("{:>6} +{}+\n", "", "-".repeat(width)));
    out.push_str(&format!(
        "{:>6}  {:<w$}\n",
        "",
        edge_labels(points, width),
        w = width
    ));

    out
}

/// Labels only at the top, middle, and bottom rows; blank elsewhere.
fn axis_label(row: usize, height: usize, value: f64) -> String {
    if row == 0 || row == height - 1 || row == (height - 1) / 2 {
        format!("{value:.1}")
    } else {
        String::new()
    }
}

/// First and last time labels, pushed to the grid's edges.
fn edge_labels(points: &[ChartPoint], width: usize) -> String {
    let first = &points[0].label;
    let last = &points[points.len() - 1].label;
    let gap = width.saturating_sub(first.len() + last.len());
    format!("{first}{}{last}", " ".repeat(gap))
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// A flat series would divide by zero when scaled; widen it symmetrically.
fn pad_if_flat((lo, hi): (f64, f64)) -> (f64, f64) {
    if (hi - lo).abs() < 1e-9 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn scale(v: f64, lo: f64, hi: f64, steps: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let frac = (v - lo) / (hi - lo);
    ((frac * steps as f64).round() as usize).min(steps)
}
