// File: crates/gyro-dash/src/lib.rs
// Summary: Gyroscope dashboard logic: load readings, page through windows, build chart and summary.

pub mod chart_builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod summary;
pub mod update;
pub mod window;

pub use chart_builder::{build_chart, ChartOptions, GraphType, VariableSelection};
pub use config::DashboardConfig;
pub use dataset::{Dataset, TIME_COLUMN};
pub use error::{ChartBuildError, ConfigError, DatasetError, SummaryError};
pub use summary::{describe, Summary, NO_DATA};
pub use update::{ChartOutcome, Dashboard, SummaryOutcome, UpdateOutput, ViewRequest};
pub use window::{Navigation, NavigationMode, Window};
