//! CLI entry point for the agro_stats tool.
//!
//! Provides subcommands for printing the yearly extremes and crop
//! averages tables for a crop dataset, and for exporting the summaries
//! to CSV and JSON files.

use agro_stats::analyzers::crops::average_yield_and_area;
use agro_stats::analyzers::yearly::max_min_production_by_year;
use agro_stats::dataset::load_records;
use agro_stats::normalizer::normalize;
use agro_stats::output::{
    CROP_AVERAGE_LABELS, ReportSummary, YEARLY_EXTREME_LABELS, render_table, write_csv, write_json,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "agro_stats")]
#[command(about = "A tool to summarize crop production datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the yearly extremes and crop averages tables for a dataset
    Report {
        /// Path to a .json or .csv dataset
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the combined summary as JSON instead of tables
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export the summaries as CSV files plus a combined JSON document
    Export {
        /// Path to a .json or .csv dataset
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory to write the summary files into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/agro_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("agro_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { input, json } => {
            let summary = summarize(&input)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{}",
                    render_table(
                        "Max/Min Crop Production by Year",
                        &YEARLY_EXTREME_LABELS,
                        &summary.yearly_extremes,
                    )?
                );
                println!();
                println!(
                    "{}",
                    render_table(
                        "Average Yield and Area under Cultivation",
                        &CROP_AVERAGE_LABELS,
                        &summary.crop_averages,
                    )?
                );
            }
        }
        Commands::Export { input, output_dir } => {
            let summary = summarize(&input)?;

            std::fs::create_dir_all(&output_dir)?;
            write_csv(&output_dir.join("yearly_extremes.csv"), &summary.yearly_extremes)?;
            write_csv(&output_dir.join("crop_averages.csv"), &summary.crop_averages)?;
            write_json(&output_dir.join("summary.json"), &summary)?;

            info!(output_dir = %output_dir.display(), "Summaries exported");
        }
    }

    Ok(())
}

/// Runs the whole pipeline for one dataset file: load, normalize, and
/// aggregate into both summary views.
#[tracing::instrument(fields(input = %input.display()))]
fn summarize(input: &Path) -> Result<ReportSummary> {
    let raw = load_records(input)?;
    let batch = normalize(&raw)?;

    info!(
        rows = batch.records.len(),
        defaulted_fields = batch.defaulted_fields,
        "Dataset normalized"
    );

    let yearly_extremes = max_min_production_by_year(&batch.records);
    let crop_averages = average_yield_and_area(&batch.records);

    Ok(ReportSummary::new(yearly_extremes, crop_averages))
}
