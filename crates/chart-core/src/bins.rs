// File: crates/chart-core/src/bins.rs
// Summary: Histogram binning over raw values.

use crate::series::Bin;

/// Sturges' rule: `ceil(log2(n)) + 1`, at least one bin.
pub fn sturges_bins(n: usize) -> usize {
    if n <= 1 { return 1; }
    (n as f64).log2().ceil() as usize + 1
}

/// Split finite `values` into `bins` equal-width buckets spanning their min..max.
/// Non-finite values are ignored. A constant input produces one unit-wide bin centred on it.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 { return Vec::new(); }

    let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < 1e-12 {
        return vec![Bin { start: lo - 0.5, end: lo + 0.5, count: finite.len() }];
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin { start: lo + width * i as f64, end: lo + width * (i + 1) as f64, count: 0 })
        .collect();
    // Pin the outer edge so rounding cannot leave the max outside the last bin.
    if let Some(last) = out.last_mut() { last.end = hi; }

    for v in finite {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}
