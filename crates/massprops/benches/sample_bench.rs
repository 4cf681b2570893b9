//! Criterion benchmarks for volume sampling on the three solid kinds.
//!
//! Mesh containment is linear in the face count, so the cuboid mesh is the
//! slowest of the three per accepted point.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use massprops::api::{convex_hull, sample_volume, Aabb3, SampleCfg, TriMesh};
use nalgebra::point;

fn bench_sampling(c: &mut Criterion) {
    let b = Aabb3::new(point![-1.0, -1.0, -1.0], point![1.0, 1.0, 1.0]);
    let mesh = TriMesh::cuboid(&b);
    let octahedron = convex_hull(&[
        point![1.0, 0.0, 0.0],
        point![-1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
        point![0.0, -1.0, 0.0],
        point![0.0, 0.0, 1.0],
        point![0.0, 0.0, -1.0],
    ])
    .unwrap();
    let cfg = SampleCfg::default();

    let mut group = c.benchmark_group("sample_volume");
    group.bench_function("aabb", |bch| {
        bch.iter(|| black_box(sample_volume(&b, &cfg, 1).unwrap()))
    });
    group.bench_function("octahedron", |bch| {
        bch.iter(|| black_box(sample_volume(&octahedron, &cfg, 1).unwrap()))
    });
    group.bench_function("cuboid_mesh", |bch| {
        bch.iter(|| black_box(sample_volume(&mesh, &cfg, 1).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
