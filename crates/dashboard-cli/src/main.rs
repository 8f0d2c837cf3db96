// File: crates/dashboard-cli/src/main.rs
// Summary: Runs one dashboard update from CLI controls and writes chart PNG/JSON, summary HTML, and a page.

use anyhow::{Context, Result};
use clap::Parser;
use gyro_dash::summary::escape_html;
use gyro_dash::{
    ChartOutcome, Dashboard, DashboardConfig, GraphType, Navigation, NavigationMode, SummaryOutcome,
    UpdateOutput, VariableSelection, ViewRequest,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(version, about = "Render one view of the gyroscope dashboard", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// CSV with X, Y, Z and optionally Time columns
    #[arg(short, long)]
    data: Option<PathBuf>,
    /// scatter, line or distribution
    #[arg(long)]
    graph_type: Option<String>,
    /// X, Y, Z or all
    #[arg(long)]
    variables: Option<VariableSelection>,
    /// Number of data samples per page
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    samples: Option<u64>,
    #[arg(long, default_value_t = 0)]
    prev_clicks: u64,
    #[arg(long, default_value_t = 0)]
    next_clicks: u64,
    /// literal or cursor
    #[arg(long)]
    navigation: Option<NavigationMode>,
    #[arg(long)]
    theme: Option<String>,
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
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
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if let Some(mode) = args.navigation {
        config.navigation = mode;
    }
    if let Some(theme) = &args.theme {
        config.render.theme = theme.clone();
    }

    let data_path = config.data_path.clone();
    let dashboard = Dashboard::load(config)
        .with_context(|| format!("failed to load data file '{}'", data_path.display()))?;

    let mut req = dashboard.initial_request();
    if let Some(graph) = &args.graph_type {
        req.graph_type = GraphType::from(graph.as_str());
    }
    if let Some(vars) = args.variables {
        req.variables = vars;
    }
    if let Some(samples) = args.samples {
        req.sample_count = usize::try_from(samples).unwrap_or(usize::MAX);
    }
    req.nav = Navigation::new(args.prev_clicks, args.next_clicks);

    let out = dashboard.update(&req);
    report(&out);
    write_outputs(&dashboard, &req, &out, &args.out_dir)
}

fn report(out: &UpdateOutput) {
    info!(start = out.window.start, rows = out.window.len, "window");
    if let ChartOutcome::Empty(reason) = &out.chart {
        warn!(%reason, "chart is blank");
    }
    if let SummaryOutcome::Empty(reason) = &out.summary {
        warn!(%reason, "summary unavailable");
    }
}

fn write_outputs(dashboard: &Dashboard, req: &ViewRequest, out: &UpdateOutput, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let chart = out.chart_or_blank();
    let opts = dashboard.config().render.render_options();
    let png = dir.join("chart.png");
    chart.render_to_png(&opts, &png).with_context(|| format!("rendering {}", png.display()))?;
    info!("Wrote {}", png.display());

    let json = dir.join("chart.json");
    std::fs::write(&json, chart.to_json()?).with_context(|| format!("writing {}", json.display()))?;
    info!("Wrote {}", json.display());

    let summary_html = out.summary_html();
    let summary = dir.join("summary.html");
    std::fs::write(&summary, &summary_html).with_context(|| format!("writing {}", summary.display()))?;
    info!("Wrote {}", summary.display());

    let page = dir.join("index.html");
    std::fs::write(&page, render_page(req, out, "chart.png", &summary_html))
        .with_context(|| format!("writing {}", page.display()))?;
    info!("Wrote {}", page.display());
    Ok(())
}

/// Static snapshot of the dashboard: controls as text, chart image, summary table.
fn render_page(req: &ViewRequest, out: &UpdateOutput, chart_src: &str, summary_html: &str) -> String {
    let end = out.window.end();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Gyroscope Data Visualization</title></head>
<body>
<h1>Gyroscope Data Visualization</h1>
<ul>
  <li>Graph Type: {graph}</li>
  <li>Data Variables: {vars}</li>
  <li>Number of Data Samples: {samples}</li>
  <li>Previous clicks: {prev}, Next clicks: {next}</li>
  <li>Rows: {start}..{end}</li>
</ul>
<img src="{chart_src}" alt="chart">
<div id="summary">
{summary_html}
</div>
</body>
</html>
"#,
        graph = escape_html(req.graph_type.label()),
        vars = req.variables,
        samples = req.sample_count,
        prev = req.nav.prev_clicks,
        next = req.nav.next_clicks,
        start = out.window.start,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyro_dash::Dataset;

    #[test]
    fn page_embeds_chart_and_summary() {
        let mut ds = Dataset::from_columns(vec![("X", vec![1.0, 2.0]), ("Y", vec![0.0, 0.0]), ("Z", vec![3.0, 3.0])]).unwrap();
        ds.ensure_time_column();
        let dash = Dashboard::new(ds, DashboardConfig::default());
        let req = dash.initial_request();
        let out = dash.update(&req);
        let page = render_page(&req, &out, "chart.png", &out.summary_html());
        assert!(page.contains("<h1>Gyroscope Data Visualization</h1>"));
        assert!(page.contains("Graph Type: Scatter Plot"));
        assert!(page.contains("Rows: 0..2"));
        assert!(page.contains("<img src=\"chart.png\""));
        assert!(page.contains("class=\"dataframe\""));
    }

    #[test]
    fn write_outputs_creates_all_files() {
        let mut ds = Dataset::from_columns(vec![("X", vec![1.0, 2.0, 4.0]), ("Y", vec![0.5, 0.0, 1.0]), ("Z", vec![3.0, 2.0, 1.0])]).unwrap();
        ds.ensure_time_column();
        let dash = Dashboard::new(ds, DashboardConfig::default());
        let req = dash.initial_request();
        let out = dash.update(&req);

        let dir = PathBuf::from("target/test_out/cli_outputs");
        let _ = std::fs::remove_dir_all(&dir);
        write_outputs(&dash, &req, &out, &dir).expect("write outputs");

        for name in ["chart.png", "chart.json", "summary.html", "index.html"] {
            assert!(dir.join(name).is_file(), "missing {name}");
        }
        let png = std::fs::read(dir.join("chart.png")).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
        let page = std::fs::read_to_string(dir.join("index.html")).unwrap();
        assert!(page.contains("<img src=\"chart.png\""));
        let summary = std::fs::read_to_string(dir.join("summary.html")).unwrap();
        assert!(page.contains(&summary));
    }
}
