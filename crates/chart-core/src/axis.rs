// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("value", 0.0, 1.0)
    }

    /// Width of the visible range, never zero.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}
