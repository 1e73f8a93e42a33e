//! Generation parameters and their preconditions.

use glam::Vec3;
use mesh_core::{Axis, MeshError};
use serde::{Deserialize, Serialize};

/// Soft upper bound on cells per axis, checked before anything is allocated.
/// Keeps every vertex index of the largest box well inside `u32`.
pub const MAX_CELLS_PER_AXIS: u32 = 4096;

fn check_axis(axis: Axis, size: u32) -> Result<(), MeshError> {
    if size == 0 {
        return Err(MeshError::ZeroSize { axis });
    }
    if size > MAX_CELLS_PER_AXIS {
        return Err(MeshError::SizeTooLarge {
            axis,
            size,
            max: MAX_CELLS_PER_AXIS,
        });
    }
    Ok(())
}

/// Flat grid in the XY plane, measured in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub x_size: u32,
    pub y_size: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            x_size: 10,
            y_size: 5,
        }
    }
}

impl GridParams {
    pub fn new(x_size: u32, y_size: u32) -> Self {
        Self { x_size, y_size }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        check_axis(Axis::X, self.x_size)?;
        check_axis(Axis::Y, self.y_size)
    }

    pub fn vertex_count(&self) -> usize {
        (self.x_size as usize + 1) * (self.y_size as usize + 1)
    }

    pub fn quad_count(&self) -> usize {
        self.x_size as usize * self.y_size as usize
    }
}

/// Rounded rectangular prism: cell counts per axis plus the rounding radius in cells.
///
/// Counting helpers assume the parameters passed [`RoundedBoxParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedBoxParams {
    pub x_size: u32,
    pub y_size: u32,
    pub z_size: u32,
    /// 0 gives a sharp box whose vertex normals are all zero.
    pub roundness: u32,
}

impl Default for RoundedBoxParams {
    fn default() -> Self {
        Self {
            x_size: 6,
            y_size: 4,
            z_size: 6,
            roundness: 2,
        }
    }
}

impl RoundedBoxParams {
    pub fn new(x_size: u32, y_size: u32, z_size: u32, roundness: u32) -> Self {
        Self {
            x_size,
            y_size,
            z_size,
            roundness,
        }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        check_axis(Axis::X, self.x_size)?;
        check_axis(Axis::Y, self.y_size)?;
        check_axis(Axis::Z, self.z_size)?;
        let max = self.max_roundness();
        if self.roundness > max {
            return Err(MeshError::RoundnessTooLarge {
                roundness: self.roundness,
                max,
            });
        }
        Ok(())
    }

    /// Largest roundness that still leaves a convex surface: half the smallest size.
    pub fn max_roundness(&self) -> u32 {
        self.x_size.min(self.y_size).min(self.z_size) / 2
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.x_size as f32, self.y_size as f32, self.z_size as f32)
    }

    pub fn size_along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x_size,
            Axis::Y => self.y_size,
            Axis::Z => self.z_size,
        }
    }

    pub fn corner_vertex_count(&self) -> usize {
        8
    }

    pub fn edge_vertex_count(&self) -> usize {
        (self.x_size as usize + self.y_size as usize + self.z_size as usize - 3) * 4
    }

    pub fn face_vertex_count(&self) -> usize {
        let (x, y, z) = (
            self.x_size as usize - 1,
            self.y_size as usize - 1,
            self.z_size as usize - 1,
        );
        (x * y + x * z + y * z) * 2
    }

    /// Closed-form vertex count; the ring walk must produce exactly this many.
    pub fn vertex_count(&self) -> usize {
        self.corner_vertex_count() + self.edge_vertex_count() + self.face_vertex_count()
    }

    /// Quads facing ±Z (front and back).
    pub fn z_face_quads(&self) -> usize {
        self.x_size as usize * self.y_size as usize * 2
    }

    /// Quads facing ±X (right and left).
    pub fn x_face_quads(&self) -> usize {
        self.y_size as usize * self.z_size as usize * 2
    }

    /// Quads facing ±Y (top and bottom caps).
    pub fn y_face_quads(&self) -> usize {
        self.x_size as usize * self.z_size as usize * 2
    }

    pub fn quad_count(&self) -> usize {
        self.z_face_quads() + self.x_face_quads() + self.y_face_quads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rejects_zero_axis() {
        assert_eq!(
            GridParams::new(0, 3).validate(),
            Err(MeshError::ZeroSize { axis: Axis::X })
        );
        assert_eq!(
            GridParams::new(3, 0).validate(),
            Err(MeshError::ZeroSize { axis: Axis::Y })
        );
        assert!(GridParams::new(1, 1).validate().is_ok());
    }

    #[test]
    fn box_rejects_oversized_axis() {
        let params = RoundedBoxParams::new(2, 2, MAX_CELLS_PER_AXIS + 1, 0);
        assert_eq!(
            params.validate(),
            Err(MeshError::SizeTooLarge {
                axis: Axis::Z,
                size: MAX_CELLS_PER_AXIS + 1,
                max: MAX_CELLS_PER_AXIS,
            })
        );
    }

    #[test]
    fn box_roundness_limited_by_smallest_axis() {
        assert!(RoundedBoxParams::new(4, 5, 6, 2).validate().is_ok());
        assert_eq!(
            RoundedBoxParams::new(4, 3, 6, 2).validate(),
            Err(MeshError::RoundnessTooLarge { roundness: 2, max: 1 })
        );
        assert!(RoundedBoxParams::new(1, 1, 1, 0).validate().is_ok());
        assert!(RoundedBoxParams::new(1, 1, 1, 1).validate().is_err());
    }

    #[test]
    fn box_vertex_count_two_cube() {
        let params = RoundedBoxParams::new(2, 2, 2, 1);
        assert_eq!(params.corner_vertex_count(), 8);
        assert_eq!(params.edge_vertex_count(), 12);
        assert_eq!(params.face_vertex_count(), 6);
        assert_eq!(params.vertex_count(), 26);
    }

    #[test]
    fn box_vertex_count_matches_surface_lattice() {
        // Surface points of an (x+1)(y+1)(z+1) lattice: 2(xy + yz + xz) + 2.
        for x in 1..8u32 {
            for y in 1..8u32 {
                for z in 1..8u32 {
                    let params = RoundedBoxParams::new(x, y, z, 0);
                    let expected = 2 * (x * y + y * z + x * z) as usize + 2;
                    assert_eq!(params.vertex_count(), expected, "{:?}", params);
                }
            }
        }
    }

    #[test]
    fn box_quad_count_covers_all_faces() {
        let params = RoundedBoxParams::new(3, 4, 5, 1);
        assert_eq!(params.quad_count(), 2 * (12 + 20 + 15));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(GridParams::default().validate().is_ok());
        assert!(RoundedBoxParams::default().validate().is_ok());
    }
}
