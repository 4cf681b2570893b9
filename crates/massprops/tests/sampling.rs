//! End-to-end checks: sample a known solid, reduce, compare with closed forms.

use massprops::api::*;
use nalgebra::point;

#[test]
fn uniform_cube_mean_moment_approaches_side_squared_over_six() {
    let side = 2.0;
    let cube = Aabb3::new(point![1.0, 1.0, 1.0], point![1.0 + side, 1.0 + side, 1.0 + side]);
    let s = sample_volume(&cube, &SampleCfg::with_count(DEFAULT_COUNT), 2024).unwrap();
    let r = mean_moments(&s.points).unwrap();
    let expected = side * side / 6.0;
    for axis in 0..3 {
        assert!((r.centroid[axis] - 2.0).abs() < 0.05);
        assert!((r.moments[axis] - expected).abs() < 0.05, "axis {axis}: {}", r.moments[axis]);
    }
}

#[test]
fn mesh_sample_lies_inside_mesh_and_box() {
    let b = Aabb3::new(point![-0.5, -1.0, 0.0], point![0.5, 1.0, 3.0]);
    let mesh = TriMesh::cuboid(&b);
    let s = sample_volume(&mesh, &SampleCfg::with_count(500), 17).unwrap();
    assert_eq!(s.points.len(), 500);
    assert!(s.points.iter().all(|p| b.contains(p) && mesh.contains(p)));
}

#[test]
fn hull_proxy_estimate_matches_tetrahedron() {
    let mesh = TriMesh::new(
        vec![
            point![0.0, 0.0, 0.0],
            point![3.0, 0.0, 0.0],
            point![0.0, 3.0, 0.0],
            point![0.0, 0.0, 3.0],
        ],
        vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    )
    .unwrap();
    let cfg = EstimateCfg {
        sample: SampleCfg::with_count(6000),
        density: 1.0,
    };
    let est = estimate_mesh(&mesh, Proxy::ConvexHull, &cfg, 8).unwrap();
    // V = 27/6 = 4.5, centroid = (0.75, 0.75, 0.75)
    assert!((est.volume - 4.5).abs() < 0.3, "{}", est.volume);
    for axis in 0..3 {
        assert!((est.centroid[axis] - 0.75).abs() < 0.05);
    }
    assert!((est.mass - est.volume).abs() < 1e-12);
}
