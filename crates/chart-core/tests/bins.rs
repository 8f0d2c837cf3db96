// File: crates/chart-core/tests/bins.rs
// Purpose: Histogram binning and LTTB downsampling behavior.

use chart_core::{histogram_bins, lttb, sturges_bins};

#[test]
fn sturges_rule() {
    assert_eq!(sturges_bins(0), 1);
    assert_eq!(sturges_bins(1), 1);
    assert_eq!(sturges_bins(2), 2);
    assert_eq!(sturges_bins(100), 8);
    assert_eq!(sturges_bins(1024), 11);
}

#[test]
fn bins_cover_every_finite_value() {
    let values = [0.0, 1.0, 2.0, 3.0, 4.0, f64::NAN, 10.0];
    let bins = histogram_bins(&values, 5);
    assert_eq!(bins.len(), 5);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 6);
    assert_eq!(bins[0].start, 0.0);
    assert_eq!(bins[4].end, 10.0);
    // The max lands in the last bin, not past it.
    assert_eq!(bins[4].count, 1);
    assert_eq!(bins[0].count, 2);
}

#[test]
fn constant_values_make_one_bin() {
    let bins = histogram_bins(&[3.0, 3.0, 3.0], 4);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 3);
    assert!(bins[0].start < 3.0 && bins[0].end > 3.0);
}

#[test]
fn no_values_no_bins() {
    assert!(histogram_bins(&[], 4).is_empty());
    assert!(histogram_bins(&[f64::NAN], 4).is_empty());
    assert!(histogram_bins(&[1.0], 0).is_empty());
}

#[test]
fn lttb_keeps_endpoints_and_threshold() {
    let pts: Vec<(f64, f64)> = (0..1000).map(|i| (i as f64, (i as f64 * 0.05).sin())).collect();
    let out = lttb(&pts, 100);
    assert_eq!(out.len(), 100);
    assert_eq!(out.first(), pts.first());
    assert_eq!(out.last(), pts.last());
    assert!(out.windows(2).all(|w| w[0].0 < w[1].0), "x must stay ordered");
}

#[test]
fn lttb_short_input_untouched() {
    let pts = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)];
    assert_eq!(lttb(&pts, 10), pts);
    assert!(lttb(&pts, 0).is_empty());
}
