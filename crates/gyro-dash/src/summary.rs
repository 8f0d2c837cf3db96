// File: crates/gyro-dash/src/summary.rs
// Summary: Descriptive statistics per column and their HTML table rendering.

use std::fmt::Write as _;

use crate::dataset::Dataset;
use crate::error::SummaryError;

/// Shown in place of the table whenever there is nothing to summarize.
pub const NO_DATA: &str = "No data available";

/// Row labels of the statistics table, top to bottom.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Statistics over the non-missing values of one column.
/// Everything but `count` is NaN when the column has no values; `std` also when it has one.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    pub fn compute(name: &str, values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        let mean = if n == 0 { f64::NAN } else { sorted.iter().sum::<f64>() / n as f64 };
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        Self {
            name: name.to_string(),
            count: n,
            mean,
            std,
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q25: percentile(&sorted, 0.25),
            q50: percentile(&sorted, 0.50),
            q75: percentile(&sorted, 0.75),
            max: sorted.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Values in `STAT_LABELS` order.
    pub fn values(&self) -> [f64; 8] {
        [self.count as f64, self.mean, self.std, self.min, self.q25, self.q50, self.q75, self.max]
    }
}

/// Linear interpolation between closest ranks; `q` in `[0, 1]`, input sorted ascending.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub columns: Vec<ColumnStats>,
}

/// Summarize every numeric column of the window, in dataset column order.
pub fn describe(data: &Dataset) -> Result<Summary, SummaryError> {
    if data.is_empty() {
        return Err(SummaryError::NoData);
    }
    let columns: Vec<ColumnStats> = data
        .columns()
        .iter()
        .filter(|c| c.numeric)
        .map(|c| ColumnStats::compute(&c.name, &c.values))
        .collect();
    if columns.is_empty() {
        return Err(SummaryError::NoNumericColumns);
    }
    Ok(Summary { columns })
}

/// HTML for a summary result; any error renders as [`NO_DATA`].
pub fn render(result: &Result<Summary, SummaryError>) -> String {
    match result {
        Ok(summary) => summary.to_html(),
        Err(_) => NO_DATA.to_string(),
    }
}

impl Summary {
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Statistics as a table: one header cell per column, one row per statistic.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
        for c in &self.columns {
            let _ = writeln!(html, "      <th>{}</th>", escape_html(&c.name));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

        let rows: Vec<[f64; 8]> = self.columns.iter().map(ColumnStats::values).collect();
        for (i, label) in STAT_LABELS.iter().enumerate() {
            let _ = writeln!(html, "    <tr>\n      <th>{label}</th>");
            for row in &rows {
                let _ = writeln!(html, "      <td>{:.6}</td>", row[i]);
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
