//! Vertex types produced by the generators.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// Read access shared by every generated vertex type (normals pass, OBJ export).
pub trait MeshVertex: Copy {
    fn position(&self) -> Vec3;
    fn normal(&self) -> Vec3;

    /// Texture coordinate, if the vertex type carries one.
    fn uv(&self) -> Option<Vec2> {
        None
    }
}

/// Rounded box vertex with position, outward normal, and the raw lattice coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BoxVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Unrounded lattice coordinate as `(x mod 256, y mod 256, z mod 256, 0)`.
    /// Shaders use it to recover where on the box the vertex came from.
    pub lattice: [u8; 4],
}

impl BoxVertex {
    pub fn new(position: Vec3, normal: Vec3, lattice: [u8; 4]) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            lattice,
        }
    }

    /// Pack a lattice coordinate; each axis wraps at 256.
    pub fn encode_lattice(x: u32, y: u32, z: u32) -> [u8; 4] {
        [x as u8, y as u8, z as u8, 0]
    }
}

impl MeshVertex for BoxVertex {
    fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// Flat grid vertex with position, normal, UV, and tangent.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// xyz = tangent direction, w = bitangent sign.
    pub tangent: [f32; 4],
}

impl GridVertex {
    /// Vertex with a zero normal; normals are filled in once the triangles exist.
    pub fn new(position: Vec3, uv: Vec2, tangent: Vec4) -> Self {
        Self {
            position: position.into(),
            normal: [0.0; 3],
            uv: uv.into(),
            tangent: tangent.into(),
        }
    }
}

impl MeshVertex for GridVertex {
    fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }

    fn uv(&self) -> Option<Vec2> {
        Some(Vec2::from(self.uv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_sizes_have_no_padding() {
        assert_eq!(std::mem::size_of::<BoxVertex>(), 28);
        assert_eq!(std::mem::size_of::<GridVertex>(), 48);
    }

    #[test]
    fn lattice_wraps_at_256() {
        assert_eq!(BoxVertex::encode_lattice(3, 255, 256), [3, 255, 0, 0]);
        assert_eq!(BoxVertex::encode_lattice(513, 0, 7), [1, 0, 7, 0]);
    }
}
