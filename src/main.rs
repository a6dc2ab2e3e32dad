//! Iris Pipeline - load a CSV, build features, print a summary.

use anyhow::{Context, Result};
use clap::Parser;
use iris_pipeline::config::PipelineConfig;
use iris_pipeline::data::{column_names, DataLoader};
use iris_pipeline::features::FeatureBuilder;
use iris_pipeline::stats::{describe, ColumnSummary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iris-pipeline", about = "Load a CSV dataset and summarise its features")]
struct Cli {
    /// Path to the CSV file
    path: PathBuf,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PipelineConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let loader = DataLoader::new(config.csv_options()?);
    let df = loader.load_csv(&cli.path)?;
    let df = FeatureBuilder.build(df);

    let summaries = describe(&df);

    if cli.json {
        let json = serde_json::to_string_pretty(&summaries).context("Failed to encode summary")?;
        println!("{json}");
    } else {
        println!(
            "{}: {} rows x {} columns",
            cli.path.display(),
            df.height(),
            df.width()
        );
        println!("columns: {}", column_names(&df).join(", "));
        print_table(&summaries);
    }

    Ok(())
}

fn print_table(summaries: &[ColumnSummary]) {
    println!(
        "{:<20} {:>6} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>7}",
        "column", "dtype", "count", "nulls", "mean", "std", "min", "25%", "50%", "75%", "max",
        "unique"
    );
    for s in summaries {
        println!(
            "{:<20} {:>6} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>7}",
            s.name,
            s.dtype,
            s.count,
            s.null_count,
            fmt_stat(s.mean),
            fmt_stat(s.std),
            fmt_stat(s.min),
            fmt_stat(s.p25),
            fmt_stat(s.median),
            fmt_stat(s.p75),
            fmt_stat(s.max),
            s.unique.map(|u| u.to_string()).unwrap_or_else(|| "-".to_string()),
        );
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "-".to_string())
}
