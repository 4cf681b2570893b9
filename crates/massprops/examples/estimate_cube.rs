//! Estimate mass properties of a box through each proxy.
//!
//! Usage:
//!   cargo run -p massprops --example estimate_cube -- [count]

use massprops::prelude::*;
use nalgebra::point;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);
    let mesh = TriMesh::cuboid(&Aabb3::new(point![0.0, 0.0, 0.0], point![2.0, 1.0, 0.5]));
    let cfg = EstimateCfg {
        sample: SampleCfg::with_count(count),
        density: 1.0,
    };
    for proxy in [Proxy::Exact, Proxy::ConvexHull, Proxy::BoundingBox] {
        match estimate_mesh(&mesh, proxy, &cfg, 2025) {
            Ok(est) => println!(
                "{proxy}: com=({:.3}, {:.3}, {:.3}) inertia=({:.4}, {:.4}, {:.4}) mass={:.4}",
                est.centroid.x,
                est.centroid.y,
                est.centroid.z,
                est.inertia.x,
                est.inertia.y,
                est.inertia.z,
                est.mass
            ),
            Err(e) => eprintln!("{proxy}: {e}"),
        }
    }
}
