// File: crates/chart-core/src/series.rs
// Summary: Series model for scatter, line, and histogram data.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Scatter,     // markers at (x, y)
    Line,        // polyline through (x, y) in order
    Histogram,   // binned counts, drawn from a zero baseline
}

/// One histogram bucket covering `[start, end)` (the last bucket is closed).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 { self.end - self.start }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_xy: Vec<(f64, f64)>, // used by Scatter/Line
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bins: Vec<Bin>,           // used by Histogram
}

impl Series {
    pub fn new(name: impl Into<String>, series_type: SeriesType) -> Self {
        Self { name: name.into(), series_type, data_xy: Vec::new(), bins: Vec::new() }
    }

    /// XY series; points with a non-finite coordinate are dropped so they render as gaps.
    pub fn with_data(name: impl Into<String>, series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        let data_xy = data.into_iter().filter(|(x, y)| x.is_finite() && y.is_finite()).collect();
        Self { name: name.into(), series_type, data_xy, bins: Vec::new() }
    }

    pub fn from_bins(name: impl Into<String>, bins: Vec<Bin>) -> Self {
        Self { name: name.into(), series_type: SeriesType::Histogram, data_xy: Vec::new(), bins }
    }

    /// Number of drawable elements (points or bins).
    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Scatter | SeriesType::Line => self.data_xy.len(),
            SeriesType::Histogram => self.bins.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Downsample XY data using LTTB to at most `max_points`; histograms are returned unchanged.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        match self.series_type {
            SeriesType::Scatter | SeriesType::Line if self.data_xy.len() > max_points && max_points >= 2 => {
                Series { data_xy: lttb(&self.data_xy, max_points), ..self.clone() }
            }
            _ => self.clone(),
        }
    }
}
