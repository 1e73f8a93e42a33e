//! Triangulation of the rounded box surface.
//!
//! The vertex buffer is laid out as `y_size + 1` rings walking the lateral
//! perimeter, followed by the top cap interior and then the bottom cap interior
//! (see [`crate::rounded_box`]). Triangulation only depends on that layout, never
//! on vertex values, so it works from [`RingLayout`] alone.

use crate::params::RoundedBoxParams;
use mesh_core::{IndexWriter, Submesh};

/// The three submeshes of a rounded box, in submesh order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceGroup {
    /// Front and back (±Z).
    Z = 0,
    /// Right and left (±X).
    X = 1,
    /// Top and bottom caps (±Y).
    Y = 2,
}

impl FaceGroup {
    pub const ALL: [FaceGroup; 3] = [FaceGroup::Z, FaceGroup::X, FaceGroup::Y];

    /// Submesh slot of this group.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn submesh_name(self) -> &'static str {
        match self {
            FaceGroup::Z => "faces_z",
            FaceGroup::X => "faces_x",
            FaceGroup::Y => "faces_y",
        }
    }
}

/// Which cap a lattice lookup addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Top,
    Bottom,
}

/// Vertex index arithmetic for the rounded box buffer.
#[derive(Debug, Clone, Copy)]
pub struct RingLayout {
    x_size: u32,
    y_size: u32,
    z_size: u32,
    vertex_count: u32,
}

impl RingLayout {
    pub fn new(params: &RoundedBoxParams) -> Self {
        Self {
            x_size: params.x_size,
            y_size: params.y_size,
            z_size: params.z_size,
            vertex_count: params.vertex_count() as u32,
        }
    }

    /// Vertices per ring, and the stride between two layers.
    pub fn ring_len(&self) -> u32 {
        (self.x_size + self.z_size) * 2
    }

    /// First vertex of the ring at layer `y`.
    pub fn ring_start(&self, y: u32) -> u32 {
        y * self.ring_len()
    }

    /// Position inside a ring of the perimeter point `(x, z)`.
    ///
    /// The walk goes along z = 0 with x rising, up x = x_size with z rising, back
    /// along z = z_size with x falling, then down x = 0 with z falling, stopping
    /// short of the first corner.
    pub fn ring_offset(&self, x: u32, z: u32) -> u32 {
        let (xs, zs) = (self.x_size, self.z_size);
        debug_assert!(x == 0 || z == 0 || x == xs || z == zs, "({x}, {z}) is not on the ring");
        if z == 0 {
            x
        } else if x == xs {
            xs + z
        } else if z == zs {
            xs + zs + (xs - x)
        } else {
            2 * xs + zs + (zs - z)
        }
    }

    pub fn cap_interior_len(&self) -> u32 {
        (self.x_size - 1) * (self.z_size - 1)
    }

    /// First interior vertex of a cap. The top interior directly follows the
    /// last ring; the bottom interior closes the buffer.
    pub fn cap_interior_start(&self, cap: Cap) -> u32 {
        match cap {
            Cap::Top => self.ring_start(self.y_size + 1),
            Cap::Bottom => self.vertex_count - self.cap_interior_len(),
        }
    }

    /// Vertex at lattice point `(x, z)` of a cap, `0 ≤ x ≤ x_size`, `0 ≤ z ≤ z_size`.
    ///
    /// Perimeter points resolve into the cap's ring, the rest into its interior
    /// block (row-major, x fastest).
    pub fn cap_vertex(&self, cap: Cap, x: u32, z: u32) -> u32 {
        let on_ring = x == 0 || z == 0 || x == self.x_size || z == self.z_size;
        if on_ring {
            let layer = match cap {
                Cap::Top => self.y_size,
                Cap::Bottom => 0,
            };
            self.ring_start(layer) + self.ring_offset(x, z)
        } else {
            self.cap_interior_start(cap) + (z - 1) * (self.x_size - 1) + (x - 1)
        }
    }
}

/// Index buffers of the three face groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxFaces {
    pub z_faces: Vec<u32>,
    pub x_faces: Vec<u32>,
    pub y_faces: Vec<u32>,
}

impl BoxFaces {
    /// Triangulate the whole surface. Each buffer is sized up front and must
    /// come out exactly full.
    pub fn triangulate(params: &RoundedBoxParams) -> Self {
        let layout = RingLayout::new(params);
        let mut z_faces = IndexWriter::with_quads(params.z_face_quads());
        let mut x_faces = IndexWriter::with_quads(params.x_face_quads());
        let mut y_faces = IndexWriter::with_quads(params.y_face_quads());

        triangulate_sides(&layout, &mut z_faces, &mut x_faces);
        triangulate_top_cap(&layout, &mut y_faces);
        triangulate_bottom_cap(&layout, &mut y_faces);

        Self {
            z_faces: z_faces.finish(),
            x_faces: x_faces.finish(),
            y_faces: y_faces.finish(),
        }
    }

    pub fn group(&self, group: FaceGroup) -> &[u32] {
        match group {
            FaceGroup::Z => &self.z_faces,
            FaceGroup::X => &self.x_faces,
            FaceGroup::Y => &self.y_faces,
        }
    }

    /// One submesh per face group: 0 = Z, 1 = X, 2 = Y.
    pub fn into_submeshes(self) -> Vec<Submesh> {
        vec![
            Submesh::new(FaceGroup::Z.submesh_name(), self.z_faces),
            Submesh::new(FaceGroup::X.submesh_name(), self.x_faces),
            Submesh::new(FaceGroup::Y.submesh_name(), self.y_faces),
        ]
    }
}

/// Lateral faces, one band of quads between each pair of consecutive rings.
///
/// The four edge segments of a band carry x_size, z_size, x_size and z_size
/// quads. The last quad of the band wraps back to the first vertex of the ring.
fn triangulate_sides(layout: &RingLayout, z_faces: &mut IndexWriter, x_faces: &mut IndexWriter) {
    let ring = layout.ring_len();
    let (xs, zs) = (layout.x_size, layout.z_size);
    let mut v = 0;
    for _ in 0..layout.y_size {
        for _ in 0..xs {
            z_faces.quad(v, v + 1, v + ring, v + ring + 1);
            v += 1;
        }
        for _ in 0..zs {
            x_faces.quad(v, v + 1, v + ring, v + ring + 1);
            v += 1;
        }
        for _ in 0..xs {
            z_faces.quad(v, v + 1, v + ring, v + ring + 1);
            v += 1;
        }
        for _ in 0..zs - 1 {
            x_faces.quad(v, v + 1, v + ring, v + ring + 1);
            v += 1;
        }
        // v is the last vertex of the ring; its neighbour is the ring's first vertex.
        x_faces.quad(v, v + 1 - ring, v + ring, v + 1);
        v += 1;
    }
}

/// Top cap, wound to face +Y.
///
/// The first row stitches the front ring edge to the first interior row, the
/// middle rows run from a left ring vertex across the interior to a right ring
/// vertex, and the last row stitches down to the back ring edge. With a single
/// row or column of cells the cap has no interior and every corner comes from
/// the ring.
fn triangulate_top_cap(layout: &RingLayout, out: &mut IndexWriter) {
    let v = |x, z| layout.cap_vertex(Cap::Top, x, z);
    for z in 0..layout.z_size {
        for x in 0..layout.x_size {
            out.quad(v(x, z), v(x + 1, z), v(x, z + 1), v(x + 1, z + 1));
        }
    }
}

/// Bottom cap, the mirror of the top: same row order, rows flipped so the
/// quads face -Y.
fn triangulate_bottom_cap(layout: &RingLayout, out: &mut IndexWriter) {
    let v = |x, z| layout.cap_vertex(Cap::Bottom, x, z);
    for z in 0..layout.z_size {
        for x in 0..layout.x_size {
            out.quad(v(x, z + 1), v(x + 1, z + 1), v(x, z), v(x + 1, z));
        }
    }
}
