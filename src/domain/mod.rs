//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the in-memory observation type (`Reading`)
//! - the lookback window selector (`RangeSelector`)
//! - derived outputs (`StatsSummary`, `ChartPoint`)
//! - serialized boundary shapes (`ReadingRecord`, `SummaryRecord`, `DashboardFile`)

pub mod types;

pub use types::*;
