//! Mass properties of solids from random volume samples.
//!
//! Layers, bottom-up:
//! - `moments`: centroid and axis-aligned moments of a point cloud.
//! - `geom3`: the solids (convex polytopes, boxes, closed triangle meshes).
//! - `sample`: seeded uniform rejection sampling inside a solid.
//! - `estimate`: sample + reduce, scaled to volume, mass and inertia.
//!
//! API Policy
//! - `api` is the curated surface for the CLI and experiments. Breaking
//!   changes are fine when they improve the design.

pub mod api;
pub mod estimate;
pub mod geom3;
pub mod moments;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Point3, Vector3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::estimate::{
        estimate_mass_properties, estimate_mesh, EstimateCfg, MassEstimate, Proxy,
    };
    pub use crate::geom3::{convex_hull, Aabb3, Hs3, Poly3, TriMesh};
    pub use crate::moments::{compute, MomentResult, MomentsError};
    pub use crate::sample::{sample_volume, SampleCfg, Solid, VolumeSample};
    pub use nalgebra::{Point3, Vector3};
}
