//! Vertex buffer layouts for the mesh vertex types.

use mesh_core::{BoxVertex, GridVertex};

/// A vertex type that can be bound as a wgpu vertex buffer.
pub trait VertexLayout: bytemuck::Pod {
    fn layout() -> wgpu::VertexBufferLayout<'static>;
}

impl VertexLayout for BoxVertex {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Lattice coordinate, read as 0..1 in the shader
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
            ],
        }
    }
}

impl VertexLayout for GridVertex {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GridVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tangent, w = bitangent sign
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_packed(layout: &wgpu::VertexBufferLayout<'_>) {
        let mut end = 0;
        for (location, attr) in layout.attributes.iter().enumerate() {
            assert_eq!(attr.shader_location as usize, location);
            assert_eq!(attr.offset, end, "gap before location {}", location);
            end = attr.offset + attr.format.size();
        }
        assert_eq!(end, layout.array_stride);
    }

    #[test]
    fn box_vertex_layout_matches_struct() {
        let layout = BoxVertex::layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[2].format, wgpu::VertexFormat::Unorm8x4);
        assert_packed(&layout);
    }

    #[test]
    fn grid_vertex_layout_matches_struct() {
        let layout = GridVertex::layout();
        assert_eq!(layout.array_stride, 48);
        assert_eq!(layout.attributes.len(), 4);
        assert_packed(&layout);
    }
}
