// File: crates/chart-core/src/error.rs
// Summary: Error type for rendering and exporting charts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
