use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use superstore_dash::app::DashboardApp;
use superstore_dash::data;

/// Superstore sales dashboard.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Sales CSV to load at startup.
    #[arg(default_value = "data/superstore.csv")]
    path: PathBuf,

    /// Print the aggregates as JSON and exit instead of opening a window.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = data::load(&cli.path);

    if cli.summary {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &dataset.aggregates)
            .context("writing summary JSON")?;
        writeln!(out).context("writing summary JSON")?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Superstore Sales",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
