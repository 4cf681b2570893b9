//! Uniform random points inside a solid (rejection sampling).
//!
//! Purpose
//! - Stand-in for a particle emitter that spawns `count` particles uniformly
//!   at random inside an object's volume.
//! - Every draw is reproducible: the same solid, config and seed yield the
//!   same points in the same order.
//!
//! Model
//! - Draw uniformly inside `solid.bounds()`, keep points with
//!   `solid.contains(p)`. The acceptance ratio times the box volume is a
//!   consistent estimate of the solid's volume. Stopping at the `count`-th
//!   acceptance biases it upward by O(1/count).
//! - The attempt budget is `count * attempts_per_point`; running out is an
//!   error rather than a silently short sample.

use std::fmt;

use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom3::{Aabb3, Poly3, TriMesh};

/// Default particle count per sample.
pub const DEFAULT_COUNT: usize = 5000;
/// Default rejection budget per requested point.
pub const DEFAULT_ATTEMPTS_PER_POINT: usize = 200;

/// Anything with a finite box and a membership test can be sampled.
pub trait Solid {
    /// Box enclosing the solid; `None` if unbounded or empty.
    fn bounds(&self) -> Option<Aabb3>;
    fn contains(&self, p: &Point3<f64>) -> bool;
}

impl Solid for Aabb3 {
    fn bounds(&self) -> Option<Aabb3> {
        Some(*self)
    }
    fn contains(&self, p: &Point3<f64>) -> bool {
        Aabb3::contains(self, p)
    }
}

/// Membership reads the H-rep; call `ensure_halfspaces_from_v()` on V-only
/// polytopes first or nothing gets accepted.
impl Solid for Poly3 {
    fn bounds(&self) -> Option<Aabb3> {
        self.bounding_box()
    }
    fn contains(&self, p: &Point3<f64>) -> bool {
        Poly3::contains(self, p)
    }
}

impl Solid for TriMesh {
    fn bounds(&self) -> Option<Aabb3> {
        self.bounding_box()
    }
    fn contains(&self, p: &Point3<f64>) -> bool {
        TriMesh::contains(self, p)
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub attempts_per_point: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            attempts_per_point: DEFAULT_ATTEMPTS_PER_POINT,
        }
    }
}

impl SampleCfg {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    #[inline]
    pub fn budget(&self) -> usize {
        self.count.saturating_mul(self.attempts_per_point.max(1))
    }
}

/// Errors surfaced by the sampler.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// `count == 0` was requested.
    ZeroCount,
    /// The solid reports no bounding box.
    Unbounded,
    /// The bounding box has zero volume; nothing can be sampled inside it.
    DegenerateBounds { bounds: Aabb3 },
    /// The attempt budget ran out before `requested` points were accepted.
    Exhausted { accepted: usize, requested: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::ZeroCount => write!(f, "sample count must be positive"),
            SampleError::Unbounded => write!(f, "solid has no finite bounding box"),
            SampleError::DegenerateBounds { bounds } => write!(
                f,
                "bounding box {:?}..{:?} has zero volume",
                bounds.min, bounds.max
            ),
            SampleError::Exhausted {
                accepted,
                requested,
            } => write!(
                f,
                "attempt budget exhausted after accepting {accepted} of {requested} points"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Accepted points plus the bookkeeping needed for a volume estimate.
#[derive(Clone, Debug)]
pub struct VolumeSample {
    pub points: Vec<Point3<f64>>,
    /// Candidate draws made, accepted or not.
    pub attempts: usize,
    pub bounds: Aabb3,
}

impl VolumeSample {
    /// Fraction of candidates that landed inside the solid.
    pub fn acceptance(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.points.len() as f64 / self.attempts as f64
    }

    /// `bounds.volume() × acceptance`; consistent, not unbiased (see module doc).
    pub fn volume_estimate(&self) -> f64 {
        self.bounds.volume() * self.acceptance()
    }
}

/// Draw `cfg.count` uniform points inside `solid`, seeded by `seed`.
pub fn sample_volume<S: Solid + ?Sized>(
    solid: &S,
    cfg: &SampleCfg,
    seed: u64,
) -> Result<VolumeSample, SampleError> {
    if cfg.count == 0 {
        return Err(SampleError::ZeroCount);
    }
    let bounds = solid.bounds().ok_or(SampleError::Unbounded)?;
    if bounds.is_degenerate() {
        return Err(SampleError::DegenerateBounds { bounds });
    }
    let budget = cfg.budget();
    let extent = bounds.extent();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(cfg.count);
    let mut attempts = 0usize;
    while points.len() < cfg.count {
        if attempts >= budget {
            return Err(SampleError::Exhausted {
                accepted: points.len(),
                requested: cfg.count,
            });
        }
        attempts += 1;
        let u: [f64; 3] = rng.gen();
        let p = Point3::new(
            bounds.min.x + u[0] * extent.x,
            bounds.min.y + u[1] * extent.y,
            bounds.min.z + u[2] * extent.z,
        );
        if solid.contains(&p) {
            points.push(p);
        }
    }
    Ok(VolumeSample {
        points,
        attempts,
        bounds,
    })
}
