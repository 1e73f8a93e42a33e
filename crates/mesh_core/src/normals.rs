//! Smooth vertex normals from triangle topology.

use glam::Vec3;

/// Unit normal of triangle `(a, b, c)`: `(b - a) × (c - a)`, or zero when degenerate.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Average the face normals around each vertex.
///
/// Every triangle adds its unit face normal to its three corners; the sums are
/// normalized at the end. Vertices no triangle touches get a zero normal.
pub fn recalculate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let n = face_normal(positions[i0], positions[i1], positions[i2]);
        normals[i0] += n;
        normals[i1] += n;
        normals[i2] += n;
    }
    normals.into_iter().map(Vec3::normalize_or_zero).collect()
}
