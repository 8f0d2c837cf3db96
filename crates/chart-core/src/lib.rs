// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart specification model and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod view;
pub mod theme;
pub mod bins;
pub mod downsample;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::{Bin, Series, SeriesType};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use bins::{histogram_bins, sturges_bins};
pub use downsample::lttb;
pub use error::ChartError;
