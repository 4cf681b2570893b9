//! Small utilities: geometric dedup and plane quantization.

use nalgebra::{Point3, Vector3};

pub(crate) fn dedup_points_in_place(points: &mut Vec<Point3<f64>>, tol: f64) {
    if points.len() < 2 {
        return;
    }
    points.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| a.z.partial_cmp(&b.z).unwrap_or(std::cmp::Ordering::Equal))
    });
    // Sorting is only lexicographic, so sweep the full list instead of
    // relying on neighbours being adjacent.
    let mut kept: Vec<Point3<f64>> = Vec::with_capacity(points.len());
    for &p in points.iter() {
        if !kept.iter().any(|q| (p - q).norm() < tol) {
            kept.push(p);
        }
    }
    *points = kept;
}

pub(crate) fn quantize_plane(n: Vector3<f64>, c: f64, tol: f64) -> (i64, i64, i64, i64) {
    let s = 1.0 / tol;
    (
        (n.x * s).round() as i64,
        (n.y * s).round() as i64,
        (n.z * s).round() as i64,
        (c * s).round() as i64,
    )
}
