//! 3D solids: convex polytopes (H- and V-representations), boxes, meshes.
//!
//! Purpose
//! - Describe the solids whose volume gets sampled for mass estimation, and
//!   the two proxies a mesh can be replaced with (convex hull, bounding box).
//!
//! Assumptions and conventions
//! - Half-spaces use `n·x <= c`; `n` is not required to be unit length.
//! - H→V enumerates plane triples (O(H^4)); it is meant for small H-reps.
//! - V→H and `convex_hull` run a quickhull (`chull`), then keep one plane per
//!   distinct hull triangle, oriented so every vertex satisfies `n·x <= c`
//!   (outward normal). Flat inputs produce an empty H-rep.
//! - Meshes are assumed closed for containment and volume.

mod aabb;
pub(crate) mod cfg;
mod convert;
mod mesh;
mod types;
mod util;

pub use aabb::Aabb3;
pub use mesh::{MeshError, TriMesh};
pub use types::{convex_hull, Hs3, Poly3};

#[cfg(test)]
mod tests;
