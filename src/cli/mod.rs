//! Command-line parsing for the weather dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::RangeSelector;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "wx", version, about = "Weather-logger dashboard (CSV ingest, stats, charts)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch logs, print the summary, recent readings, and an ASCII chart.
    Show(FetchArgs),
    /// Print the statistics block only (useful for scripting).
    Stats(FetchArgs),
    /// Write the dashboard (readings + summary + chart series) to a JSON file.
    Export(ExportArgs),
}

/// Common options for fetching and filtering readings.
#[derive(Debug, Parser, Clone)]
pub struct FetchArgs {
    /// Lookback window (24h, 7d, 30d, all).
    #[arg(short = 'R', long, value_enum, default_value_t = RangeSelector::All)]
    pub range: RangeSelector,

    /// Read blobs from a local directory instead of the remote store.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Generate synthetic device output instead of fetching (offline demo).
    #[arg(long)]
    pub sample: bool,

    /// Number of synthetic readings (sample mode).
    #[arg(short = 'n', long, default_value_t = 288)]
    pub count: usize,

    /// Random seed for synthetic readings (sample mode).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Rows in the recent-readings table.
    #[arg(long, default_value_t = 10)]
    pub recent: usize,

    /// Disable the terminal chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,
}

/// Options for the JSON export.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Output file path.
    #[arg(short = 'o', long, value_name = "JSON")]
    pub out: PathBuf,
}
