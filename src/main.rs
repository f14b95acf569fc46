//! Suburb Dashboard CLI
//!
//! Loads the market CSV, computes every view and prints the dashboard as
//! text or JSON, optionally exporting one CSV per view.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use suburb_dashboard::config::DisplayLabels;
use suburb_dashboard::observation::DatasetCache;
use suburb_dashboard::report::{export_csv, render_json, render_text};
use suburb_dashboard::{Dashboard, DashboardConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "suburb-dashboard", version, about = "Property price dashboard for one suburb")]
struct Cli {
    /// Market CSV (overrides the config file)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suburb name shown in titles and legends
    #[arg(long)]
    suburb: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write summary.csv and one CSV per view into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_path(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(suburb) = &cli.suburb {
        config.labels = DisplayLabels::for_suburb(suburb);
    }

    let mut cache = DatasetCache::new();
    let data_path = config.data_path.clone();
    let dashboard = Dashboard::load(&mut cache, config)
        .with_context(|| format!("Failed to load {}", data_path.display()))?;

    let report = dashboard.report();

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    if let Some(dir) = &cli.export_dir {
        let written = export_csv(&report, dir)
            .with_context(|| format!("Failed to export to {}", dir.display()))?;
        eprintln!("Wrote {} files to {}", written.len(), dir.display());
    }

    if report.failed_views() == 4 {
        bail!("No dashboard view could be computed");
    }

    Ok(())
}
