// File: crates/gyro-dash/src/window.rs
// Summary: Maps sample count and navigation click counters to a contiguous row range.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Click counters owned by the presentation layer; both only ever grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    pub prev_clicks: u64,
    pub next_clicks: u64,
}

impl Navigation {
    pub const fn new(prev_clicks: u64, next_clicks: u64) -> Self {
        Self { prev_clicks, next_clicks }
    }
}

/// How click counters translate into a window start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Start is recomputed from zero each call: any next click moves one page
    /// forward, any previous click one page back. Repeated clicks add nothing.
    #[default]
    Literal,
    /// Start is `(next - prev) * samples`, clamped to the last full page.
    Cursor,
}

impl std::str::FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "cursor" => Ok(Self::Cursor),
            other => Err(format!("unknown navigation mode: {other}")),
        }
    }
}

/// Visible rows `[start, start + len)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub len: usize,
}

impl Window {
    /// Literal navigation: clamp the sample count, then apply next and previous in that order.
    pub fn compute(sample_count: usize, nav: Navigation, dataset_len: usize) -> Self {
        if dataset_len == 0 {
            return Self::default();
        }
        let samples = sample_count.min(dataset_len);
        let last_start = dataset_len - samples;

        let mut start = 0usize;
        if nav.next_clicks > 0 {
            start = (start + samples).min(last_start);
        }
        if nav.prev_clicks > 0 {
            start = start.saturating_sub(samples);
        }
        Self { start, len: samples }
    }

    /// Cursor navigation: the net click count is a page offset, clamped at use time.
    pub fn compute_cursor(sample_count: usize, nav: Navigation, dataset_len: usize) -> Self {
        if dataset_len == 0 {
            return Self::default();
        }
        let samples = sample_count.min(dataset_len);
        let last_start = (dataset_len - samples) as i128;

        let pages = nav.next_clicks as i128 - nav.prev_clicks as i128;
        let start = pages.saturating_mul(samples as i128).clamp(0, last_start) as usize;
        Self { start, len: samples }
    }

    pub fn compute_with(mode: NavigationMode, sample_count: usize, nav: Navigation, dataset_len: usize) -> Self {
        match mode {
            NavigationMode::Literal => Self::compute(sample_count, nav, dataset_len),
            NavigationMode::Cursor => Self::compute_cursor(sample_count, nav, dataset_len),
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
