//! Mass properties estimated from a random volume sample.
//!
//! Pipeline: pick the solid to sample (a mesh, or a proxy built from it),
//! draw a uniform sample, reduce it with [`crate::moments::compute`], and
//! scale to physical units with the estimated volume and a density.
//!
//! Proxies are plain values built from the mesh and dropped when the call
//! returns. The input mesh is only borrowed, never modified.

use std::fmt;

use nalgebra::{Point3, Vector3};

use crate::geom3::{Aabb3, Poly3, TriMesh};
use crate::moments::{compute, MomentsError};
use crate::sample::{sample_volume, SampleCfg, SampleError, Solid};

/// Which solid stands in for a mesh during sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Proxy {
    /// Sample the mesh itself (ray-parity containment).
    #[default]
    Exact,
    /// Sample the convex hull of the mesh vertices.
    ConvexHull,
    /// Sample the axis-aligned bounding box of the mesh.
    BoundingBox,
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Proxy::Exact => "exact",
            Proxy::ConvexHull => "hull",
            Proxy::BoundingBox => "bbox",
        };
        f.write_str(name)
    }
}

/// The solid actually sampled for a mesh.
#[derive(Clone, Debug)]
pub enum ProxySolid<'a> {
    Mesh(&'a TriMesh),
    Hull(Poly3),
    Box(Aabb3),
}

impl Solid for ProxySolid<'_> {
    fn bounds(&self) -> Option<Aabb3> {
        match self {
            ProxySolid::Mesh(m) => m.bounds(),
            ProxySolid::Hull(p) => p.bounds(),
            ProxySolid::Box(b) => Some(*b),
        }
    }
    fn contains(&self, p: &Point3<f64>) -> bool {
        match self {
            ProxySolid::Mesh(m) => m.contains(p),
            ProxySolid::Hull(h) => h.contains(p),
            ProxySolid::Box(b) => b.contains(p),
        }
    }
}

/// Estimation configuration: sampler settings plus a uniform density.
#[derive(Clone, Copy, Debug)]
pub struct EstimateCfg {
    pub sample: SampleCfg,
    pub density: f64,
}

impl Default for EstimateCfg {
    fn default() -> Self {
        Self {
            sample: SampleCfg::default(),
            density: 1.0,
        }
    }
}

/// Errors surfaced by the estimators.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    Sample(SampleError),
    Moments(MomentsError),
    /// The requested proxy could not be built (flat or empty mesh).
    DegenerateProxy { proxy: Proxy },
    /// Density must be finite and non-negative.
    InvalidDensity { density: f64 },
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::Sample(e) => write!(f, "sampling failed: {e}"),
            EstimateError::Moments(e) => write!(f, "moment reduction failed: {e}"),
            EstimateError::DegenerateProxy { proxy } => {
                write!(f, "cannot build {proxy} proxy: mesh is empty or flat")
            }
            EstimateError::InvalidDensity { density } => {
                write!(f, "density must be finite and >= 0, got {density}")
            }
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EstimateError::Sample(e) => Some(e),
            EstimateError::Moments(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SampleError> for EstimateError {
    fn from(e: SampleError) -> Self {
        EstimateError::Sample(e)
    }
}

impl From<MomentsError> for EstimateError {
    fn from(e: MomentsError) -> Self {
        EstimateError::Moments(e)
    }
}

/// Center of mass, moments and scaled inertia of a sampled solid.
///
/// - `moments` are raw sums over the sample (unit mass per point).
/// - `mean_moments = moments / samples`.
/// - `inertia = mean_moments × mass`, i.e. the diagonal of the inertia tensor
///   about the center of mass for a body of uniform `density`.
#[derive(Clone, Copy, Debug)]
pub struct MassEstimate {
    pub centroid: Point3<f64>,
    pub moments: Vector3<f64>,
    pub mean_moments: Vector3<f64>,
    pub samples: usize,
    pub attempts: usize,
    pub volume: f64,
    pub density: f64,
    pub mass: f64,
    pub inertia: Vector3<f64>,
}

/// Sample `solid` and derive its mass properties.
pub fn estimate_mass_properties<S: Solid + ?Sized>(
    solid: &S,
    cfg: &EstimateCfg,
    seed: u64,
) -> Result<MassEstimate, EstimateError> {
    if !cfg.density.is_finite() || cfg.density < 0.0 {
        return Err(EstimateError::InvalidDensity {
            density: cfg.density,
        });
    }
    let sample = sample_volume(solid, &cfg.sample, seed)?;
    let raw = compute(&sample.points, false)?;
    let mean = raw.normalized();
    let volume = sample.volume_estimate();
    let mass = cfg.density * volume;
    Ok(MassEstimate {
        centroid: raw.centroid,
        moments: raw.moments,
        mean_moments: mean.moments,
        samples: raw.count,
        attempts: sample.attempts,
        volume,
        density: cfg.density,
        mass,
        inertia: mean.moments * mass,
    })
}

/// Build the solid that stands in for `mesh`.
pub fn build_proxy(mesh: &TriMesh, proxy: Proxy) -> Result<ProxySolid<'_>, EstimateError> {
    let degenerate = || EstimateError::DegenerateProxy { proxy };
    match proxy {
        Proxy::Exact => {
            if mesh.faces.is_empty() {
                return Err(degenerate());
            }
            Ok(ProxySolid::Mesh(mesh))
        }
        Proxy::ConvexHull => mesh.convex_hull().map(ProxySolid::Hull).ok_or_else(degenerate),
        Proxy::BoundingBox => mesh
            .bounding_box()
            .filter(|b| !b.is_degenerate())
            .map(ProxySolid::Box)
            .ok_or_else(degenerate),
    }
}

/// Estimate mass properties of `mesh` through the chosen proxy.
pub fn estimate_mesh(
    mesh: &TriMesh,
    proxy: Proxy,
    cfg: &EstimateCfg,
    seed: u64,
) -> Result<MassEstimate, EstimateError> {
    let solid = build_proxy(mesh, proxy)?;
    estimate_mass_properties(&solid, cfg, seed)
}
