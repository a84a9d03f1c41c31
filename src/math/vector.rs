/// Squared Euclidean distance between two equal-length vectors.
///
/// The square root is never taken: nearest-centroid comparisons only need
/// the ordering, which the squared distance preserves.
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum()
}

/// Per-dimension arithmetic mean of a non-empty set of equal-length vectors.
pub fn mean(points: &[&[f64]]) -> Vec<f64> {
    assert!(!points.is_empty(), "mean of zero points is undefined");
    let dim = points[0].len();
    let mut acc = vec![0.0; dim];
    for point in points {
        for (a, x) in acc.iter_mut().zip(point.iter()) {
            *a += x;
        }
    }
    let n = points.len() as f64;
    for a in &mut acc {
        *a /= n;
    }
    acc
}
