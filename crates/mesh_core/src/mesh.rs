//! Generated mesh data: one vertex buffer shared by named submeshes.

use crate::error::MeshError;

/// One index buffer drawn with a single material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submesh {
    pub name: &'static str,
    pub indices: Vec<u32>,
}

impl Submesh {
    pub fn new(name: &'static str, indices: Vec<u32>) -> Self {
        Self { name, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Mesh data before GPU upload.
///
/// Vertices and submeshes are attached together in [`MeshData::from_parts`] and the
/// result is immutable; regenerating means building a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData<V> {
    pub name: &'static str,
    vertices: Vec<V>,
    submeshes: Vec<Submesh>,
}

impl<V> MeshData<V> {
    /// Bundle a vertex buffer with its submeshes.
    ///
    /// Panics if any submesh breaks the bounds invariant; generators only call this
    /// with buffers they built, so a failure here is a bug in the generator.
    pub fn from_parts(name: &'static str, vertices: Vec<V>, submeshes: Vec<Submesh>) -> Self {
        let mesh = Self {
            name,
            vertices,
            submeshes,
        };
        if let Err(err) = mesh.validate() {
            panic!("generated mesh `{}` is malformed: {}", name, err);
        }
        log::trace!(
            "Assembled `{}`: {} vertices, {} submeshes",
            name,
            mesh.vertices.len(),
            mesh.submeshes.len()
        );
        mesh
    }

    /// Check that every submesh holds whole triangles indexing existing vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for submesh in &self.submeshes {
            if submesh.indices.len() % 3 != 0 {
                return Err(MeshError::IncompleteTriangle {
                    submesh: submesh.name,
                    len: submesh.indices.len(),
                });
            }
            if let Some(&index) = submesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfBounds {
                    submesh: submesh.name,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    /// Look up a submesh by name.
    pub fn submesh(&self, name: &str) -> Option<&Submesh> {
        self.submeshes.iter().find(|s| s.name == name)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.indices.len()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    /// Every triangle of every submesh, in submesh order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes.iter().flat_map(Submesh::triangles)
    }

    pub fn into_parts(self) -> (Vec<V>, Vec<Submesh>) {
        (self.vertices, self.submeshes)
    }
}
