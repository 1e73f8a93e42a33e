//! GPU-resident copies of generated meshes.

use crate::vertex::VertexLayout;
use mesh_core::MeshData;
use wgpu::util::DeviceExt;

/// Index buffer for one submesh.
pub struct GpuSubmesh {
    pub name: &'static str,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

/// A mesh uploaded as one shared vertex buffer plus an index buffer per submesh.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub num_vertices: u32,
    pub submeshes: Vec<GpuSubmesh>,
}

impl GpuMesh {
    pub fn upload<V: VertexLayout>(device: &wgpu::Device, mesh: &MeshData<V>) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(mesh.name),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let submeshes = mesh
            .submeshes()
            .iter()
            .map(|submesh| GpuSubmesh {
                name: submesh.name,
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(submesh.name),
                    contents: bytemuck::cast_slice(&submesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                num_indices: submesh.indices.len() as u32,
            })
            .collect();

        log::debug!(
            "Uploaded `{}`: {} vertices, {} submeshes",
            mesh.name,
            mesh.vertex_count(),
            mesh.submeshes().len()
        );

        Self {
            vertex_buffer,
            num_vertices: mesh.vertex_count() as u32,
            submeshes,
        }
    }

    pub fn submesh(&self, name: &str) -> Option<&GpuSubmesh> {
        self.submeshes.iter().find(|s| s.name == name)
    }

    /// Bind the vertex buffer and issue one indexed draw per submesh. The caller
    /// owns the pipeline and bind groups.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        for submesh in &self.submeshes {
            pass.set_index_buffer(submesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..submesh.num_indices, 0, 0..1);
        }
    }
}
