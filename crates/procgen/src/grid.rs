//! Flat rectangular grid in the XY plane.

use crate::params::GridParams;
use glam::{Vec2, Vec3, Vec4};
use mesh_core::{recalculate_normals, GridVertex, IndexWriter, MeshData, MeshError, MeshVertex, Submesh};

/// Name of the single grid submesh.
pub const GRID_SUBMESH: &str = "grid";

/// Every grid vertex shares this tangent frame.
const GRID_TANGENT: Vec4 = Vec4::new(1.0, 0.0, 0.0, -1.0);

/// Build a grid of `x_size` × `y_size` unit cells.
///
/// Vertices are laid out row by row (x fastest) at `(x, y, 0)` with UVs spanning
/// `[0, 1]²`. Normals are not authored; they are averaged from the finished triangles.
pub fn generate_grid(params: GridParams) -> Result<MeshData<GridVertex>, MeshError> {
    params.validate()?;

    let (x_size, y_size) = (params.x_size, params.y_size);
    let mut vertices = Vec::with_capacity(params.vertex_count());
    for y in 0..=y_size {
        for x in 0..=x_size {
            vertices.push(GridVertex::new(
                Vec3::new(x as f32, y as f32, 0.0),
                Vec2::new(x as f32 / x_size as f32, y as f32 / y_size as f32),
                GRID_TANGENT,
            ));
        }
    }

    let row = x_size + 1;
    let mut writer = IndexWriter::with_quads(params.quad_count());
    let mut v = 0;
    for _ in 0..y_size {
        for _ in 0..x_size {
            writer.quad(v, v + 1, v + row, v + row + 1);
            v += 1;
        }
        // Skip the last vertex of the row.
        v += 1;
    }
    let indices = writer.finish();

    let positions: Vec<Vec3> = vertices.iter().map(MeshVertex::position).collect();
    for (vertex, normal) in vertices.iter_mut().zip(recalculate_normals(&positions, &indices)) {
        vertex.normal = normal.into();
    }

    log::debug!(
        "Generated {}x{} grid: {} vertices, {} triangles",
        x_size,
        y_size,
        vertices.len(),
        indices.len() / 3
    );

    Ok(MeshData::from_parts(
        "Procedural Grid",
        vertices,
        vec![Submesh::new(GRID_SUBMESH, indices)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_two_by_two() {
        let mesh = generate_grid(GridParams::new(2, 2)).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.index_count(), 24);
        assert_eq!(mesh.submeshes().len(), 1);

        let positions: Vec<Vec3> = mesh.vertices().iter().map(MeshVertex::position).collect();
        assert_eq!(positions[0], Vec3::ZERO);
        assert_eq!(positions[4], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(positions[8], Vec3::new(2.0, 2.0, 0.0));

        let indices = &mesh.submeshes()[0].indices;
        assert_eq!(&indices[..6], &[0, 3, 1, 1, 3, 4]);
        assert_eq!(
            indices.as_slice(),
            &[0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5, 3, 6, 4, 4, 6, 7, 4, 7, 5, 5, 7, 8]
        );
    }

    #[test]
    fn grid_counts_and_bounds() {
        for x in 1..7u32 {
            for y in 1..7u32 {
                let params = GridParams::new(x, y);
                let mesh = generate_grid(params).unwrap();
                assert_eq!(mesh.vertex_count(), ((x + 1) * (y + 1)) as usize);
                assert_eq!(mesh.index_count(), (x * y * 6) as usize);
                assert!(mesh.validate().is_ok());
                assert!(mesh.triangles().flatten().all(|i| (i as usize) < mesh.vertex_count()));
            }
        }
    }

    #[test]
    fn grid_uvs_span_unit_square() {
        let mesh = generate_grid(GridParams::new(4, 3)).unwrap();
        let vertices = mesh.vertices();
        assert_eq!(vertices[0].uv, [0.0, 0.0]);
        assert_eq!(vertices[vertices.len() - 1].uv, [1.0, 1.0]);
        for v in vertices {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
            assert_eq!(v.tangent, [1.0, 0.0, 0.0, -1.0]);
        }
    }

    #[test]
    fn grid_normals_face_negative_z() {
        let mesh = generate_grid(GridParams::new(3, 2)).unwrap();
        for v in mesh.vertices() {
            assert!((v.normal() - Vec3::NEG_Z).length() < 1e-6, "{:?}", v.normal);
        }
    }

    #[test]
    fn grid_rejects_empty_axis() {
        assert_eq!(
            generate_grid(GridParams::new(0, 4)),
            Err(MeshError::ZeroSize { axis: mesh_core::Axis::X })
        );
    }

    #[test]
    fn grid_is_deterministic() {
        let a = generate_grid(GridParams::new(5, 7)).unwrap();
        let b = generate_grid(GridParams::new(5, 7)).unwrap();
        assert_eq!(
            bytemuck::cast_slice::<_, u8>(a.vertices()),
            bytemuck::cast_slice::<_, u8>(b.vertices())
        );
        assert_eq!(a.submeshes(), b.submeshes());
    }
}
