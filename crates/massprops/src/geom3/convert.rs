//! H↔V conversions and supporting plane helpers.
//!
//! - H→V enumerates plane triples (fine for the handful of facets a box or a
//!   hand-written H-rep has).
//! - V→H goes through a quickhull (`chull`) and turns the hull triangles into
//!   outward half-spaces, merging coplanar triangles into one facet.

use std::collections::HashSet;

use chull::ConvexHullWrapper;
use nalgebra::{Matrix3, Point3, Vector3};

use super::cfg::{DEDUP_EPS, DET_EPS, PLANE_QUANT};
use super::types::Hs3;
use super::util::{dedup_points_in_place, quantize_plane};

pub(crate) fn h_to_vertices(hs: &[Hs3]) -> Vec<Point3<f64>> {
    let mut out = Vec::new();
    if hs.len() < 4 {
        return out;
    }
    // Enumerate triples and intersect their planes (if non-parallel and feasible).
    for i in 0..hs.len() {
        for j in i + 1..hs.len() {
            for k in j + 1..hs.len() {
                let (h1, h2, h3) = (hs[i], hs[j], hs[k]);
                let a = Matrix3::from_rows(&[h1.n.transpose(), h2.n.transpose(), h3.n.transpose()]);
                if a.determinant().abs() <= DET_EPS {
                    continue;
                }
                if let Some(inv) = a.try_inverse() {
                    let x = Point3::from(inv * Vector3::new(h1.c, h2.c, h3.c));
                    if hs.iter().all(|h| h.satisfies(&x)) {
                        out.push(x);
                    }
                }
            }
        }
    }
    dedup_points_in_place(&mut out, DEDUP_EPS);
    out
}

/// Hull vertices and outward half-spaces of a point set.
///
/// Returns `None` for fewer than four points or when the hull is flat
/// (quickhull reports a degenerate simplex).
pub(crate) fn quickhull(points: &[Point3<f64>]) -> Option<(Vec<Point3<f64>>, Vec<Hs3>)> {
    if points.len() < 4 {
        return None;
    }
    let coords: Vec<Vec<f64>> = points.iter().map(|p| vec![p.x, p.y, p.z]).collect();
    let hull = ConvexHullWrapper::try_new(&coords, None).ok()?;
    let (verts, indices) = hull.vertices_indices();
    let verts: Vec<Point3<f64>> = verts.iter().map(|v| Point3::new(v[0], v[1], v[2])).collect();

    let triangles: Vec<[usize; 3]> = indices
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();
    let mut used: Vec<Point3<f64>> = triangles
        .iter()
        .flatten()
        .map(|&i| verts[i])
        .collect();
    dedup_points_in_place(&mut used, DEDUP_EPS);
    let hs = halfspaces_from_triangles(&used, &verts, &triangles);
    if hs.len() < 4 || used.len() < 4 {
        return None;
    }
    Some((used, hs))
}

/// One outward half-space per distinct triangle plane.
///
/// Orientation is fixed against the vertex centroid, which lies strictly
/// inside a non-degenerate hull, so the triangle winding does not matter.
fn halfspaces_from_triangles(
    hull_vertices: &[Point3<f64>],
    verts: &[Point3<f64>],
    triangles: &[[usize; 3]],
) -> Vec<Hs3> {
    let Some(first) = hull_vertices.first() else {
        return Vec::new();
    };
    let mut offset = Vector3::zeros();
    for v in hull_vertices {
        offset += v - first;
    }
    let inside = first + offset / hull_vertices.len() as f64;

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(triangles.len());
    for &[i, j, k] in triangles {
        let Some((n, c)) = plane_through(verts[i], verts[j], verts[k]) else {
            continue;
        };
        let (n, c) = if n.dot(&inside.coords) > c { (-n, -c) } else { (n, c) };
        // quantize to dedup coplanar triangles
        if seen.insert(quantize_plane(n, c, PLANE_QUANT)) {
            out.push(Hs3::new(n, c));
        }
    }
    out
}

/// Unit normal `n` and offset `c` of the plane through three points, if they
/// are not collinear.
fn plane_through(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Option<(Vector3<f64>, f64)> {
    let n = (b - a).cross(&(c - a));
    let norm = n.norm();
    if norm <= DET_EPS || !norm.is_finite() {
        return None;
    }
    let n = n / norm;
    Some((n, n.dot(&a.coords)))
}
