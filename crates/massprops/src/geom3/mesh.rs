//! Closed triangle meshes: validation, containment, hull and box proxies.
//!
//! Containment uses ray parity. The ray direction is skewed off the axes so
//! that axis-aligned meshes (boxes, extrusions) do not put edges or vertices
//! on the ray for generic query points.

use std::fmt;

use nalgebra::{Point3, Vector3};

use super::aabb::Aabb3;
use super::cfg::{DET_EPS, FEAS_EPS};
use super::types::{convex_hull, Poly3};

/// Errors raised when building a mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face references a vertex that does not exist.
    IndexOutOfRange { face: usize, index: usize, vertices: usize },
    /// A face repeats a vertex index.
    DegenerateFace { face: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IndexOutOfRange {
                face,
                index,
                vertices,
            } => write!(
                f,
                "face {face} references vertex {index}, but the mesh has {vertices} vertices"
            ),
            MeshError::DegenerateFace { face } => {
                write!(f, "face {face} repeats a vertex index")
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// Triangle mesh with indexed faces. Containment assumes it is watertight.
#[derive(Clone, Debug, Default)]
pub struct TriMesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<[usize; 3]>,
}

impl TriMesh {
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Result<Self, MeshError> {
        for (fi, face) in faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::IndexOutOfRange {
                    face: fi,
                    index,
                    vertices: vertices.len(),
                });
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Closed box mesh (12 triangles, outward winding).
    pub fn cuboid(b: &Aabb3) -> Self {
        let vertices = b.corners().to_vec();
        // corner index bits: x=4, y=2, z=1
        let faces = vec![
            [0, 1, 3],
            [0, 3, 2], // -x
            [4, 6, 7],
            [4, 7, 5], // +x
            [0, 4, 5],
            [0, 5, 1], // -y
            [2, 3, 7],
            [2, 7, 6], // +y
            [0, 2, 6],
            [0, 6, 4], // -z
            [1, 5, 7],
            [1, 7, 3], // +z
        ];
        Self { vertices, faces }
    }

    #[inline]
    pub fn triangle(&self, face: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.faces[face];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    pub fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.vertices)
    }

    /// Convex hull of the vertex set (the mesh itself is left untouched).
    pub fn convex_hull(&self) -> Option<Poly3> {
        convex_hull(&self.vertices)
    }

    /// Signed enclosed volume via the divergence theorem.
    ///
    /// Positive for outward-wound closed meshes; meaningless for open ones.
    pub fn signed_volume(&self) -> f64 {
        let mut acc = 0.0;
        for fi in 0..self.faces.len() {
            let [a, b, c] = self.triangle(fi);
            acc += a.coords.dot(&b.coords.cross(&c.coords));
        }
        acc / 6.0
    }

    /// Point-in-mesh by counting ray crossings (odd = inside).
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        let dir = ray_direction();
        let mut hits = 0usize;
        for fi in 0..self.faces.len() {
            let [a, b, c] = self.triangle(fi);
            if ray_hits_triangle(p, &dir, a, b, c) {
                hits += 1;
            }
        }
        hits % 2 == 1
    }
}

fn ray_direction() -> Vector3<f64> {
    Vector3::new(1.0, 2.0_f64.sqrt() * 1e-3, 3.0_f64.sqrt() * 1e-3).normalize()
}

/// Möller–Trumbore intersection restricted to the forward half-ray.
fn ray_hits_triangle(
    orig: &Point3<f64>,
    dir: &Vector3<f64>,
    a: Point3<f64>,
    b: Point3<f64>,
    c: Point3<f64>,
) -> bool {
    let e1 = b - a;
    let e2 = c - a;
    let pvec = dir.cross(&e2);
    let det = e1.dot(&pvec);
    if det.abs() <= DET_EPS {
        return false;
    }
    let inv = 1.0 / det;
    let tvec = orig - a;
    let u = tvec.dot(&pvec) * inv;
    if !(0.0..=1.0).contains(&u) {
        return false;
    }
    let qvec = tvec.cross(&e1);
    let v = dir.dot(&qvec) * inv;
    if v < 0.0 || u + v > 1.0 {
        return false;
    }
    e2.dot(&qvec) * inv > FEAS_EPS
}
