//! Errors reported by mesh generation.

use crate::axis::Axis;
use thiserror::Error;

/// Precondition and validation failures. Generation never hands out a partial mesh;
/// it either succeeds or returns one of these before allocating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A used axis has no cells.
    #[error("size along {axis} must be at least 1")]
    ZeroSize { axis: Axis },

    /// An axis is above the soft limit that keeps every index inside `u32`.
    #[error("size along {axis} is {size}, above the limit of {max} cells")]
    SizeTooLarge { axis: Axis, size: u32, max: u32 },

    /// Rounding would overlap itself and fold the surface.
    #[error("roundness {roundness} exceeds half the smallest size (at most {max} allowed)")]
    RoundnessTooLarge { roundness: u32, max: u32 },

    /// An index buffer points past the end of the vertex buffer.
    #[error("submesh `{submesh}` references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        submesh: &'static str,
        index: u32,
        vertex_count: usize,
    },

    /// An index buffer length is not a whole number of triangles.
    #[error("submesh `{submesh}` holds {len} indices, not a multiple of 3")]
    IncompleteTriangle { submesh: &'static str, len: usize },
}
