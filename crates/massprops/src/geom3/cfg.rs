//! Tolerance defaults for 3D geometry (internal).
//!
//! Policy
//! - Fixed constants, mirroring the fixed-epsilon style of the other geometry
//!   code. If callers ever need to tune them we can thread a small config
//!   through without touching call sites broadly.

/// Membership epsilon used by `Hs3::satisfies` and supporting-plane side tests.
pub(crate) const FEAS_EPS: f64 = 1e-9;
/// Distance below which two enumerated vertices are considered the same.
pub(crate) const DEDUP_EPS: f64 = 1e-7;
/// Quantization step for deduplicating numerically equal planes.
pub(crate) const PLANE_QUANT: f64 = 1e-7;
/// Determinant / cross-product magnitude below which a system is singular.
pub(crate) const DET_EPS: f64 = 1e-12;
