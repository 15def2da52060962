//! `wx-dash` library crate.
//!
//! The binary (`wx`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the parse/merge/stats pipeline is reusable (e.g., future web dashboard)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod io;
pub mod plot;
pub mod report;
pub mod series;
pub mod stats;
