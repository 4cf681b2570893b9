//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is the convenience surface the CLI
//!   and experiments import from; breaking changes are allowed.

// Point-cloud reduction
pub use crate::moments::{compute as point_cloud_moments, MomentResult, MomentsError};
// Solids and proxies
pub use crate::geom3::{convex_hull, Aabb3, Hs3, MeshError, Poly3, TriMesh};
// Sampling
pub use crate::sample::{
    sample_volume, SampleCfg, SampleError, Solid, VolumeSample, DEFAULT_ATTEMPTS_PER_POINT,
    DEFAULT_COUNT,
};
// Estimation
pub use crate::estimate::{
    build_proxy, estimate_mass_properties, estimate_mesh, EstimateCfg, EstimateError,
    MassEstimate, Proxy, ProxySolid,
};

use nalgebra::Point3;

/// Pre: `points` is non-empty.
/// Post: returns the per-point mean moments about the centroid axes.
pub fn mean_moments(points: &[Point3<f64>]) -> Result<MomentResult, MomentsError> {
    point_cloud_moments(points, true)
}
