//! Core 3D types: half-spaces and convex polytopes with lazy H/V caches.

use nalgebra::{Point3, Vector3};

use super::aabb::Aabb3;
use super::cfg::FEAS_EPS;
use super::convert::{h_to_vertices, quickhull};

/// Closed half-space `n · x <= c` in R³.
///
/// Invariants:
/// - `n` is not normalized; `c` is any finite real.
/// - Membership uses `<= c + FEAS_EPS`.
#[derive(Clone, Copy, Debug)]
pub struct Hs3 {
    pub n: Vector3<f64>,
    pub c: f64,
}

impl Hs3 {
    #[inline]
    pub fn new(n: Vector3<f64>, c: f64) -> Self {
        Self { n, c }
    }
    #[inline]
    pub fn satisfies(&self, p: &Point3<f64>) -> bool {
        self.n.dot(&p.coords) <= self.c + FEAS_EPS
    }
}

/// Convex polytope in R³; either representation may be empty, compute on demand.
///
/// Invariants:
/// - `h` and `v` are caches; one or both may be empty.
/// - Use `ensure_vertices_from_h()` or `ensure_halfspaces_from_v()` to populate.
/// - Membership queries (`contains`) read `h` only.
#[derive(Clone, Debug, Default)]
pub struct Poly3 {
    pub h: Vec<Hs3>,
    pub v: Vec<Point3<f64>>,
}

impl Poly3 {
    #[inline]
    pub fn from_h(h: Vec<Hs3>) -> Self {
        Self { h, v: Vec::new() }
    }
    #[inline]
    pub fn from_v(v: Vec<Point3<f64>>) -> Self {
        Self { h: Vec::new(), v }
    }

    /// Append inequality (intersection).
    #[inline]
    pub fn intersect_halfspace(&mut self, hs: Hs3) {
        self.h.push(hs);
        // Invalidate cached vertices; callers may recompute as needed.
        self.v.clear();
    }

    /// H→V conversion by enumerating triples of active constraints.
    ///
    /// Complexity: O(H^4).
    pub fn ensure_vertices_from_h(&mut self) {
        if !self.v.is_empty() {
            return;
        }
        self.v = h_to_vertices(&self.h);
    }

    /// V→H conversion through a quickhull of the vertices.
    ///
    /// Complexity: O(V log V) expected. Planes are oriented so that `n·x <= c`
    /// holds for every vertex. Flat vertex sets yield no half-spaces.
    pub fn ensure_halfspaces_from_v(&mut self) {
        if !self.h.is_empty() {
            return;
        }
        self.h = quickhull(&self.v).map(|(_, h)| h).unwrap_or_default();
    }

    /// Membership in the H-representation. An empty H-rep contains nothing.
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        !self.h.is_empty() && self.h.iter().all(|h| h.satisfies(p))
    }

    /// Bounding box of the vertex set, deriving vertices from `h` if needed.
    ///
    /// Assumes the polytope is bounded; an unbounded H-rep may still return
    /// the box of whatever vertices it has.
    pub fn bounding_box(&self) -> Option<Aabb3> {
        if self.v.is_empty() {
            Aabb3::from_points(&h_to_vertices(&self.h))
        } else {
            Aabb3::from_points(&self.v)
        }
    }
}

/// Convex hull of a point set as a `Poly3` with both caches populated.
///
/// Returns `None` for fewer than four points or a flat (coplanar) set.
/// Interior points are dropped from `v`.
pub fn convex_hull(points: &[Point3<f64>]) -> Option<Poly3> {
    let (v, h) = quickhull(points)?;
    Some(Poly3 { h, v })
}
