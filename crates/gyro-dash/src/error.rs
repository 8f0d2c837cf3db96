// File: crates/gyro-dash/src/error.rs
// Summary: Error kinds for loading, slicing, chart building, summarizing, and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("column {name} has {got} rows, expected {expected}")]
    RaggedColumns { name: String, expected: usize, got: usize },
    #[error("rows {start}..{end} out of bounds for {len} rows")]
    SliceOutOfBounds { start: usize, end: usize, len: usize },
}

/// Why a chart could not be built; the orchestrator shows a blank chart instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartBuildError {
    #[error("no rows in the selected window")]
    EmptyData,
    #[error("column {0} not present in dataset")]
    MissingColumn(String),
}

/// Why no statistics table was produced; rendered as "No data available".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("no rows in the selected window")]
    NoData,
    #[error("no numeric columns to summarize")]
    NoNumericColumns,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parsing failed: {0}")]
    Toml(#[from] toml::de::Error),
}
