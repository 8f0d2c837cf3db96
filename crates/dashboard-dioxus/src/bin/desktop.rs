// File: crates/dashboard-dioxus/src/bin/desktop.rs
// Summary: Launcher for the desktop gyroscope dashboard.

use anyhow::{Context, Result};
use clap::Parser;
use gyro_dash::{Dashboard, DashboardConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive gyroscope dashboard window", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// CSV with X, Y, Z and optionally Time columns
    #[arg(short, long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();

    let args = Cli::parse();
    let mut config = DashboardConfig::load(args.config.as_deref()).context("loading config")?;
    if let Some(data) = args.data {
        config.data_path = data;
    }
    let data_path = config.data_path.clone();
    let dashboard = Dashboard::load(config)
        .with_context(|| format!("failed to load data file '{}'", data_path.display()))?;
    launch(dashboard)
}

#[cfg(feature = "desktop")]
fn launch(dashboard: Dashboard) -> Result<()> {
    dashboard_dioxus::ui::run_dashboard_ui(std::sync::Arc::new(dashboard));
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch(_dashboard: Dashboard) -> Result<()> {
    anyhow::bail!("gyro-dash-desktop built without `desktop` feature; rebuild with --features desktop")
}
