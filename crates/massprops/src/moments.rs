//! Centroid and axis-aligned moments of a sampled point cloud.
//!
//! Purpose
//! - Reduce a finite set of points (each carrying unit mass) to its center of
//!   mass and the three second moments about the coordinate axes through it.
//!
//! Conventions
//! - `moments[0]` is about the x-axis and sums `(y−cy)² + (z−cz)²`; the other
//!   two follow cyclically.
//! - Raw moments are sums over points. `normalize = true` divides them by the
//!   sample count (per-point mean). The centroid is always a mean.
//! - The mean is accumulated as offsets from the first point. Coincident
//!   inputs therefore produce their own coordinates as centroid and exactly
//!   zero moments.

use std::fmt;

use nalgebra::{Point3, Vector3};

/// Errors surfaced by [`compute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MomentsError {
    /// The point collection has no elements.
    EmptyInput,
}

impl fmt::Display for MomentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MomentsError::EmptyInput => write!(f, "point sample is empty (need at least one point)"),
        }
    }
}

impl std::error::Error for MomentsError {}

/// Centroid plus axis-aligned moments of a point sample.
///
/// Invariants:
/// - `count >= 1`.
/// - `normalized` tells whether `moments` are sums or per-point means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentResult {
    pub centroid: Point3<f64>,
    pub moments: Vector3<f64>,
    pub count: usize,
    pub normalized: bool,
}

impl MomentResult {
    /// Per-point mean moments; identity if already normalized.
    pub fn normalized(&self) -> Self {
        if self.normalized {
            return *self;
        }
        Self {
            centroid: self.centroid,
            moments: self.moments / self.count as f64,
            count: self.count,
            normalized: true,
        }
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }
}

/// Compute centroid and axis moments of `points` (unit mass per point).
///
/// Pre: `points` is non-empty, otherwise `MomentsError::EmptyInput`.
/// Post: `centroid` is the component-wise mean; `moments[i]` is the sum (or
/// mean, if `normalize`) of squared distances to axis `i` through the centroid.
pub fn compute(points: &[Point3<f64>], normalize: bool) -> Result<MomentResult, MomentsError> {
    let first = *points.first().ok_or(MomentsError::EmptyInput)?;
    let n = points.len() as f64;

    let mut offset = Vector3::zeros();
    for p in points {
        offset += p - first;
    }
    let centroid = first + offset / n;

    let mut moments = Vector3::zeros();
    for p in points {
        let d = p - centroid;
        let sq = d.component_mul(&d);
        moments.x += sq.y + sq.z;
        moments.y += sq.x + sq.z;
        moments.z += sq.x + sq.y;
    }
    if normalize {
        moments /= n;
    }

    Ok(MomentResult {
        centroid,
        moments,
        count: points.len(),
        normalized: normalize,
    })
}
