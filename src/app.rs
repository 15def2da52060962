//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - acquires raw blobs (remote store / local dir / synthetic sample)
//! - runs the parse/merge/stats pipeline
//! - prints reports/charts
//! - writes optional exports
//!
//! This is also the only place that reads the wall clock: the pipeline takes
//! `now` as a parameter.

use chrono::NaiveDateTime;
use clap::Parser;

use crate::cli::{Command, ExportArgs, FetchArgs};
use crate::data;
use crate::domain::{BlobSource, DashboardConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `wx` binary.
pub fn run() -> Result<(), AppError> {
    // We want `wx` and `wx -R 24h` to behave like `wx show ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the bare invocation useful.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Show(args) => handle_fetch(args, OutputMode::Full),
        Command::Stats(args) => handle_fetch(args, OutputMode::StatsOnly),
        Command::Export(args) => handle_export(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    StatsOnly,
}

fn handle_fetch(args: FetchArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = dashboard_config_from_args(&args);
    let now = chrono::Local::now().naive_local();

    let blobs = acquire_blobs(&config, now)?;
    let run = pipeline::run_dashboard(&config, &blobs, now);

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_summary(&run, &config));
            if !run.readings.is_empty() {
                println!("{}", crate::report::format_recent(&run.readings, config.recent));
            }
            if config.plot && run.chart.len() >= 2 {
                println!(
                    "{}",
                    crate::plot::render_ascii_chart(&run.chart, config.plot_width, config.plot_height)
                );
            }
        }
        OutputMode::StatsOnly => {
            println!("{}", crate::report::format_stats_block(run.summary.as_ref()));
        }
    }

    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = dashboard_config_from_args(&args.fetch);
    let now = chrono::Local::now().naive_local();

    let blobs = acquire_blobs(&config, now)?;
    let run = pipeline::run_dashboard(&config, &blobs, now);

    crate::io::export::write_dashboard_json(&args.out, &run, config.range, now)?;
    println!(
        "Wrote {} readings to '{}'.",
        run.readings.len(),
        args.out.display()
    );
    Ok(())
}

/// Resolve the blob source and fetch. Source precedence: `--dir` over
/// `--sample` over the remote store from the environment.
fn acquire_blobs(config: &DashboardConfig, now: NaiveDateTime) -> Result<Vec<String>, AppError> {
    match &config.source {
        BlobSource::Dir(path) => data::local::read_blob_dir(path),
        BlobSource::Sample => data::sample::generate_blobs(config.sample_count, config.sample_seed, now),
        BlobSource::Remote => {
            let client = data::store::StoreClient::from_env()?;
            // Fetch failures degrade to zero blobs; the report then shows the
            // "no data" state instead of the process failing.
            Ok(client.fetch_blobs())
        }
    }
}

pub fn dashboard_config_from_args(args: &FetchArgs) -> DashboardConfig {
    let source = if let Some(dir) = &args.dir {
        BlobSource::Dir(dir.clone())
    } else if args.sample {
        BlobSource::Sample
    } else {
        BlobSource::Remote
    };

    DashboardConfig {
        source,
        range: args.range,
        recent: args.recent,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        sample_count: args.count,
        sample_seed: args.seed,
    }
}

/// Rewrite argv so `wx` defaults to `wx show`.
///
/// Rules:
/// - `wx`                      -> `wx show`
/// - `wx -R 24h ...`           -> `wx show -R 24h ...`
/// - `wx --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("show".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "stats" | "export");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "show flags".
    if arg1.starts_with('-') {
        argv.insert(1, "show".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
