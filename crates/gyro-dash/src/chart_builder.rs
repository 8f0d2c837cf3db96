// File: crates/gyro-dash/src/chart_builder.rs
// Summary: Chooses a chart specification from graph type, variable selection, and windowed rows.

use std::fmt;

use chart_core::{histogram_bins, sturges_bins, Axis, Chart, Series, SeriesType};
use tracing::debug;

use crate::dataset::{Dataset, TIME_COLUMN};
use crate::error::ChartBuildError;

/// Column histograms fall back to when several variables are selected.
const FALLBACK_COLUMN: &str = "X";

/// Plot type requested by the user. Any other value is kept so it can be reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphType {
    Scatter,
    Line,
    Distribution,
    Other(String),
}

impl From<&str> for GraphType {
    fn from(s: &str) -> Self {
        match s {
            "scatter" => Self::Scatter,
            "line" => Self::Line,
            "distribution" => Self::Distribution,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scatter => f.write_str("scatter"),
            Self::Line => f.write_str("line"),
            Self::Distribution => f.write_str("distribution"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

impl GraphType {
    /// Human-readable label used in chart titles and dropdowns.
    pub fn label(&self) -> &str {
        match self {
            Self::Scatter => "Scatter Plot",
            Self::Line => "Line Chart",
            Self::Distribution => "Distribution Plot",
            Self::Other(s) => s,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VariableSelection {
    X,
    Y,
    Z,
    #[default]
    All,
}

impl VariableSelection {
    /// Columns plotted for this selection, in series order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::X => &["X"],
            Self::Y => &["Y"],
            Self::Z => &["Z"],
            Self::All => &["X", "Y", "Z"],
        }
    }
}

impl std::str::FromStr for VariableSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Self::X),
            "Y" | "y" => Ok(Self::Y),
            "Z" | "z" => Ok(Self::Z),
            "all" | "All" | "ALL" => Ok(Self::All),
            other => Err(format!("unknown variable selection: {other}")),
        }
    }
}

impl fmt::Display for VariableSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            single => f.write_str(single.columns()[0]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartOptions {
    /// Fixed histogram bin count; Sturges' rule when unset.
    pub histogram_bins: Option<usize>,
}

/// Build the chart for one window of rows.
///
/// Scatter and line plot every selected column against `Time`. A distribution
/// plot is a histogram of the single selected column, or of `X` when several
/// are selected. Unrecognized graph types plot `Time` vs `X` as a scatter.
pub fn build_chart(
    graph_type: &GraphType,
    selection: VariableSelection,
    data: &Dataset,
    opts: &ChartOptions,
) -> Result<Chart, ChartBuildError> {
    if data.is_empty() {
        return Err(ChartBuildError::EmptyData);
    }
    let columns = selection.columns();

    match graph_type {
        GraphType::Scatter => xy_chart(SeriesType::Scatter, graph_type.label(), columns, data),
        GraphType::Line => xy_chart(SeriesType::Line, graph_type.label(), columns, data),
        GraphType::Distribution => {
            let column = match columns {
                [single] => *single,
                _ => {
                    debug!(?selection, "distribution with several variables, using {FALLBACK_COLUMN}");
                    FALLBACK_COLUMN
                }
            };
            histogram_chart(column, data, opts)
        }
        GraphType::Other(name) => {
            debug!(graph_type = %name, "unrecognized graph type, using default scatter");
            xy_chart(SeriesType::Scatter, GraphType::Scatter.label(), &[FALLBACK_COLUMN], data)
        }
    }
}

fn require<'a>(data: &'a Dataset, name: &str) -> Result<&'a [f64], ChartBuildError> {
    data.column(name).ok_or_else(|| ChartBuildError::MissingColumn(name.to_string()))
}

fn xy_chart(
    series_type: SeriesType,
    label: &str,
    columns: &[&str],
    data: &Dataset,
) -> Result<Chart, ChartBuildError> {
    let time = require(data, TIME_COLUMN)?;
    let mut chart = Chart::new().with_title(format!("{label}: {} vs {TIME_COLUMN}", columns.join(", ")));
    for &name in columns {
        let values = require(data, name)?;
        let points = time.iter().copied().zip(values.iter().copied()).collect();
        chart.add_series(Series::with_data(name, series_type, points));
    }
    // Every point had a missing coordinate.
    if chart.is_blank() {
        return Err(ChartBuildError::EmptyData);
    }
    let y_label = match columns {
        [single] => *single,
        _ => "value",
    };
    chart.x_axis = Axis::new(TIME_COLUMN, 0.0, 1.0);
    chart.y_axis = Axis::new(y_label, 0.0, 1.0);
    chart.autoscale_axes(0.02);
    Ok(chart)
}

fn histogram_chart(column: &str, data: &Dataset, opts: &ChartOptions) -> Result<Chart, ChartBuildError> {
    let values = require(data, column)?;
    let finite = values.iter().filter(|v| v.is_finite()).count();
    if finite == 0 {
        return Err(ChartBuildError::EmptyData);
    }
    let bins = opts.histogram_bins.unwrap_or_else(|| sturges_bins(finite)).max(1);

    let mut chart = Chart::new().with_title(format!("{}: {column}", GraphType::Distribution.label()));
    chart.add_series(Series::from_bins(column, histogram_bins(values, bins)));
    chart.x_axis = Axis::new(column, 0.0, 1.0);
    chart.y_axis = Axis::new("count", 0.0, 1.0);
    chart.autoscale_axes(0.02);
    Ok(chart)
}
