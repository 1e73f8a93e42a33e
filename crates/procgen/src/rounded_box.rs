//! Rounded rectangular prism ("rounded cube") generation.
//!
//! Vertices sit on an integer lattice over the box surface. Each lattice point is
//! clamped into the box inset by `roundness`; the offset from that inner point
//! gives the normal, and the vertex is pushed out from the inner point along the
//! normal by `roundness`. Faces, edges and corners come out rounded without any
//! explicit curve.
//!
//! Buffer layout, which [`crate::box_faces`] relies on:
//! 1. `y_size + 1` rings, one per layer, each walking the perimeter once;
//! 2. the top cap interior, row-major (z outer, x inner);
//! 3. the bottom cap interior in the same order.

use crate::box_colliders::approximate_colliders;
use crate::box_faces::BoxFaces;
use crate::params::RoundedBoxParams;
use glam::Vec3;
use mesh_core::{BoxVertex, MeshData, MeshError, RoundedBoxColliders};

/// Output of one rounded box generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedBoxMesh {
    pub mesh: MeshData<BoxVertex>,
    pub colliders: RoundedBoxColliders,
}

/// Validate `params` and build the mesh and its colliders.
pub fn generate_rounded_box(params: RoundedBoxParams) -> Result<RoundedBoxMesh, MeshError> {
    Ok(RoundedBoxGenerator::new(params)?.generate())
}

/// Clamp lattice point `(x, y, z)` into the box inset by `roundness`.
pub fn inner_point(params: &RoundedBoxParams, x: u32, y: u32, z: u32) -> Vec3 {
    let r = params.roundness;
    let clamp = |c: u32, size: u32| {
        if c < r {
            r
        } else if c > size - r {
            size - r
        } else {
            c
        }
    };
    Vec3::new(
        clamp(x, params.x_size) as f32,
        clamp(y, params.y_size) as f32,
        clamp(z, params.z_size) as f32,
    )
}

/// Place lattice point `(x, y, z)` on the rounded surface.
///
/// With `roundness == 0` the point is its own inner point, so the vertex stays on
/// the sharp box and its normal is zero.
pub fn round_vertex(params: &RoundedBoxParams, x: u32, y: u32, z: u32) -> BoxVertex {
    let raw = Vec3::new(x as f32, y as f32, z as f32);
    let inner = inner_point(params, x, y, z);
    let normal = (raw - inner).normalize_or_zero();
    let position = inner + normal * params.roundness as f32;
    BoxVertex::new(position, normal, BoxVertex::encode_lattice(x, y, z))
}

/// Single-use builder that owns the vertex buffer until generation completes.
pub struct RoundedBoxGenerator {
    params: RoundedBoxParams,
    vertices: Vec<BoxVertex>,
}

impl RoundedBoxGenerator {
    pub fn new(params: RoundedBoxParams) -> Result<Self, MeshError> {
        params.validate()?;
        Ok(Self {
            params,
            vertices: Vec::with_capacity(params.vertex_count()),
        })
    }

    /// Generate the complete rounded box.
    pub fn generate(mut self) -> RoundedBoxMesh {
        self.create_vertices();
        assert_eq!(
            self.vertices.len(),
            self.params.vertex_count(),
            "ring walk produced the wrong number of vertices"
        );

        let faces = BoxFaces::triangulate(&self.params);
        let colliders = approximate_colliders(&self.params);

        log::debug!(
            "Generated rounded box {}x{}x{} (roundness {}): {} vertices, {} z/{} x/{} y indices",
            self.params.x_size,
            self.params.y_size,
            self.params.z_size,
            self.params.roundness,
            self.vertices.len(),
            faces.z_faces.len(),
            faces.x_faces.len(),
            faces.y_faces.len()
        );

        RoundedBoxMesh {
            mesh: MeshData::from_parts("Procedural Cube", self.vertices, faces.into_submeshes()),
            colliders,
        }
    }

    fn create_vertices(&mut self) {
        let RoundedBoxParams {
            x_size,
            y_size,
            z_size,
            ..
        } = self.params;

        // Each corner belongs to exactly one of the four edge walks.
        for y in 0..=y_size {
            for x in 0..=x_size {
                self.push_vertex(x, y, 0);
            }
            for z in 1..=z_size {
                self.push_vertex(x_size, y, z);
            }
            for x in (0..x_size).rev() {
                self.push_vertex(x, y, z_size);
            }
            for z in (1..z_size).rev() {
                self.push_vertex(0, y, z);
            }
        }

        for y in [y_size, 0] {
            for z in 1..z_size {
                for x in 1..x_size {
                    self.push_vertex(x, y, z);
                }
            }
        }
    }

    fn push_vertex(&mut self, x: u32, y: u32, z: u32) {
        self.vertices.push(round_vertex(&self.params, x, y, z));
    }
}
