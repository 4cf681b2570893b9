//! Axis-aligned bounding boxes.

use nalgebra::{Point3, Vector3};

use super::types::{Hs3, Poly3};

/// Closed box `min <= x <= max` (componentwise).
///
/// Invariant: `min <= max` in every coordinate; a zero extent is allowed and
/// reported by `is_degenerate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb3 {
    /// Box from two corners in any order.
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Smallest box containing all `points`; `None` if empty or non-finite.
    pub fn from_points(points: &[Point3<f64>]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in points {
            if !p.coords.iter().all(|x| x.is_finite()) {
                return None;
            }
            min = min.inf(p);
            max = max.sup(p);
        }
        Some(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    #[inline]
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.extent().product()
    }

    /// True if any side has zero (or non-positive) length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.extent().iter().any(|&e| e <= 0.0)
    }

    /// The eight corners, x varying slowest.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (lo, hi) = (self.min, self.max);
        let mut out = [lo; 8];
        for (idx, c) in out.iter_mut().enumerate() {
            c.x = if idx & 4 != 0 { hi.x } else { lo.x };
            c.y = if idx & 2 != 0 { hi.y } else { lo.y };
            c.z = if idx & 1 != 0 { hi.z } else { lo.z };
        }
        out
    }

    /// The box as a polytope with six facets and eight vertices.
    pub fn to_poly(&self) -> Poly3 {
        let mut h = Vec::with_capacity(6);
        for axis in 0..3 {
            let mut pos = Vector3::zeros();
            pos[axis] = 1.0;
            h.push(Hs3::new(pos, self.max[axis]));
            h.push(Hs3::new(-pos, -self.min[axis]));
        }
        Poly3 {
            h,
            v: self.corners().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn from_points_spans_extremes() {
        let b = Aabb3::from_points(&[
            point![1.0, -2.0, 0.5],
            point![-1.0, 3.0, 0.0],
            point![0.0, 0.0, 2.0],
        ])
        .unwrap();
        assert_eq!(b.min, point![-1.0, -2.0, 0.0]);
        assert_eq!(b.max, point![1.0, 3.0, 2.0]);
        assert_eq!(b.volume(), 2.0 * 5.0 * 2.0);
        assert_eq!(b.center(), point![0.0, 0.5, 1.0]);
    }

    #[test]
    fn empty_or_nan_has_no_box() {
        assert!(Aabb3::from_points(&[]).is_none());
        assert!(Aabb3::from_points(&[point![0.0, f64::NAN, 0.0]]).is_none());
    }

    #[test]
    fn flat_box_is_degenerate() {
        let b = Aabb3::new(point![0.0, 0.0, 0.0], point![1.0, 1.0, 0.0]);
        assert!(b.is_degenerate());
        assert_eq!(b.volume(), 0.0);
    }

    #[test]
    fn to_poly_agrees_with_box_membership() {
        let b = Aabb3::new(point![2.0, 1.0, -1.0], point![-1.0, 0.0, 1.0]);
        let poly = b.to_poly();
        assert_eq!(poly.h.len(), 6);
        assert_eq!(poly.v.len(), 8);
        for v in &poly.v {
            assert!(poly.contains(v));
        }
        for p in [point![0.0, 0.5, 0.0], point![2.5, 0.5, 0.0], point![0.0, -0.1, 0.0]] {
            assert_eq!(poly.contains(&p), b.contains(&p));
        }
    }
}
