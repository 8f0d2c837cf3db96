// File: crates/gyro-dash/src/update.rs
// Summary: Update orchestrator; turns one set of control values into a chart and a summary.

use chart_core::Chart;
use tracing::{debug, warn};

use crate::chart_builder::{build_chart, ChartOptions, GraphType, VariableSelection};
use crate::config::{ControlDefaults, DashboardConfig};
use crate::dataset::Dataset;
use crate::error::{ChartBuildError, DatasetError, SummaryError};
use crate::summary::{self, Summary, NO_DATA};
use crate::window::{Navigation, Window};

/// Current control values, passed in whole on every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRequest {
    pub graph_type: GraphType,
    pub variables: VariableSelection,
    pub sample_count: usize,
    pub nav: Navigation,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self::from_defaults(&ControlDefaults::default())
    }
}

impl ViewRequest {
    /// Controls as first shown: configured defaults, no clicks yet.
    pub fn from_defaults(defaults: &ControlDefaults) -> Self {
        let variables = defaults.variables.parse().unwrap_or_else(|e| {
            warn!(error = %e, "invalid default variable selection, using all");
            VariableSelection::All
        });
        Self {
            graph_type: GraphType::from(defaults.graph_type.as_str()),
            variables,
            sample_count: defaults.samples.max(1),
            nav: Navigation::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartOutcome {
    Ready(Chart),
    Empty(ChartBuildError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SummaryOutcome {
    Ready(Summary),
    Empty(SummaryError),
}

/// Both outputs of one update; always produced together.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOutput {
    pub window: Window,
    pub chart: ChartOutcome,
    pub summary: SummaryOutcome,
}

impl UpdateOutput {
    /// The chart to display: the built one, or a blank chart if building failed.
    pub fn chart_or_blank(&self) -> Chart {
        match &self.chart {
            ChartOutcome::Ready(chart) => chart.clone(),
            ChartOutcome::Empty(_) => Chart::blank(),
        }
    }

    /// Summary HTML, or "No data available" when there is nothing to show.
    pub fn summary_html(&self) -> String {
        match &self.summary {
            SummaryOutcome::Ready(s) => s.to_html(),
            SummaryOutcome::Empty(_) => NO_DATA.to_string(),
        }
    }
}

/// Owns the immutable dataset and the configuration the updates run against.
#[derive(Clone, Debug)]
pub struct Dashboard {
    dataset: Dataset,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        Self { dataset, config }
    }

    /// Load the configured data file. Only non-missing-file read errors fail.
    pub fn load(config: DashboardConfig) -> Result<Self, DatasetError> {
        let dataset = Dataset::load(&config.data_path)?;
        Ok(Self::new(dataset, config))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn initial_request(&self) -> ViewRequest {
        ViewRequest::from_defaults(&self.config.defaults)
    }

    pub fn update(&self, req: &ViewRequest) -> UpdateOutput {
        debug!(
            graph_type = %req.graph_type,
            variables = %req.variables,
            samples = req.sample_count,
            prev_clicks = req.nav.prev_clicks,
            next_clicks = req.nav.next_clicks,
            "update triggered"
        );

        let window = Window::compute_with(self.config.navigation, req.sample_count, req.nav, self.dataset.len());
        let data = self.dataset.slice(window.range()).unwrap_or_else(|e| {
            warn!(error = %e, "selecting window failed, using empty data");
            Dataset::default()
        });
        debug!(start = window.start, rows = data.len(), "window selected");

        let opts = ChartOptions { histogram_bins: self.config.histogram_bins };
        let chart = match build_chart(&req.graph_type, req.variables, &data, &opts) {
            Ok(chart) => ChartOutcome::Ready(chart),
            Err(e) => {
                debug!(reason = %e, "showing blank chart");
                ChartOutcome::Empty(e)
            }
        };
        let summary = match summary::describe(&data) {
            Ok(s) => SummaryOutcome::Ready(s),
            Err(e) => {
                debug!(reason = %e, "no summary");
                SummaryOutcome::Empty(e)
            }
        };

        UpdateOutput { window, chart, summary }
    }
}
