// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a tick value compactly: integers without decimals, small spans with more precision.
pub fn tick_label(value: f64, span: f64) -> String {
    if value.fract().abs() < 1e-9 && span >= 10.0 {
        format!("{}", value as i64)
    } else if span >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}
