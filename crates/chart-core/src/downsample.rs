// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for XY series drawn as lines.

/// Returns up to `threshold` points preserving overall shape.
/// The first and last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket_bounds = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * every).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * every).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);
    let mut anchor = points[0];

    for i in 0..(threshold - 2) {
        let (start, end) = bucket_bounds(i);

        // Average of the following bucket, or the final point for the last bucket.
        let (avg_x, avg_y) = if i + 1 < threshold - 2 {
            let (ns, ne) = bucket_bounds(i + 1);
            let next = &points[ns..ne];
            let k = next.len() as f64;
            next.iter().fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x / k, sy + y / k))
        } else {
            points[n - 1]
        };

        let (ax, ay) = anchor;
        let best = points[start..end]
            .iter()
            .copied()
            .max_by(|&(x1, y1), &(x2, y2)| {
                let a1 = ((ax - avg_x) * (y1 - ay) - (ax - x1) * (avg_y - ay)).abs();
                let a2 = ((ax - avg_x) * (y2 - ay) - (ax - x2) * (avg_y - ay)).abs();
                a1.total_cmp(&a2)
            })
            .unwrap_or(points[start]);
        sampled.push(best);
        anchor = best;
    }

    sampled.push(points[n - 1]);
    sampled
}
