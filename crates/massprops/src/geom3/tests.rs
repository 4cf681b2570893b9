use super::*;
use nalgebra::{point, vector, Point3, Vector3};

fn box_h(h: f64) -> Vec<Hs3> {
    let mut hs = Vec::new();
    for axis in 0..3 {
        let mut pos = Vector3::zeros();
        pos[axis] = 1.0;
        hs.push(Hs3::new(pos, h));
        hs.push(Hs3::new(-pos, h));
    }
    hs
}

#[test]
fn h_rep_cube_populates_vertices_on_demand() {
    let mut p = Poly3::from_h(box_h(2.0));
    assert!(p.v.is_empty());
    p.ensure_vertices_from_h();
    assert_eq!(p.v.len(), 8);
    let b = p.bounding_box().unwrap();
    assert_eq!(b.min, point![-2.0, -2.0, -2.0]);
    assert_eq!(b.max, point![2.0, 2.0, 2.0]);
}

#[test]
fn bounding_box_from_h_without_cached_vertices() {
    let p = Poly3::from_h(box_h(1.0));
    let b = p.bounding_box().unwrap();
    assert!((b.volume() - 8.0).abs() < 1e-9);
}

#[test]
fn intersect_halfspace_invalidates_vertices() {
    let mut p = Poly3::from_h(box_h(1.0));
    p.ensure_vertices_from_h();
    p.intersect_halfspace(Hs3::new(vector![1.0, 1.0, 1.0], 0.0));
    assert!(p.v.is_empty());
    p.ensure_vertices_from_h();
    // cut removes the corner (1,1,1) and all corners with positive sum
    assert!(p.v.iter().all(|v| v.x + v.y + v.z <= 1e-9));
    assert!(!p.contains(&point![0.5, 0.5, 0.5]));
    assert!(p.contains(&point![-0.5, -0.5, 0.2]));
}

#[test]
fn hull_drops_interior_points() {
    let mut pts: Vec<Point3<f64>> = vec![
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
        point![0.0, 0.0, 1.0],
    ];
    pts.push(point![0.1, 0.1, 0.1]);
    pts.push(point![0.2, 0.3, 0.1]);
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.h.len(), 4);
    assert_eq!(hull.v.len(), 4);
    assert!(hull.contains(&point![0.2, 0.2, 0.2]));
    assert!(!hull.contains(&point![0.5, 0.5, 0.5]));
}

#[test]
fn hull_rejects_flat_and_tiny_sets() {
    assert!(convex_hull(&[point![0.0, 0.0, 0.0], point![1.0, 0.0, 0.0]]).is_none());
    let flat = [
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
        point![0.3, 0.3, 0.0],
        point![1.0, 1.0, 0.0],
    ];
    assert!(convex_hull(&flat).is_none());
}

#[test]
fn v_rep_cube_gets_halfspaces() {
    let b = Aabb3::new(point![-1.0, -1.0, -1.0], point![1.0, 1.0, 1.0]);
    let mut p = Poly3::from_v(b.corners().to_vec());
    assert!(!p.contains(&Point3::origin()));
    p.ensure_halfspaces_from_v();
    assert_eq!(p.h.len(), 6);
    assert!(p.contains(&Point3::origin()));
}

fn fibonacci_sphere(n: usize) -> Vec<Point3<f64>> {
    let golden = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
            let r = (1.0 - y * y).sqrt();
            let th = golden * i as f64;
            point![r * th.cos(), y, r * th.sin()]
        })
        .collect()
}

#[test]
fn hull_of_dense_sphere_keeps_every_point() {
    let pts = fibonacci_sphere(400);
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.v.len(), 400);
    // triangulated sphere: F = 2V - 4 when no four points are coplanar
    assert!(hull.h.len() > 700, "{} facets", hull.h.len());
    assert!(pts.iter().all(|p| hull.contains(p)));
    assert!(hull.contains(&Point3::origin()));
    assert!(!hull.contains(&point![0.0, 1.01, 0.0]));
    let b = hull.bounding_box().unwrap();
    assert!(b.max.y < 1.0 && b.min.y > -1.0);
}

#[test]
fn hull_of_large_cloud_drops_interior_points() {
    let mut pts = fibonacci_sphere(2000);
    // interior clutter must not show up as hull vertices
    pts.extend(fibonacci_sphere(500).into_iter().map(|p| Point3::from(p.coords * 0.5)));
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.v.len(), 2000);
    assert!(hull.contains(&point![0.0, 0.0, 0.45]));
}
