//! Quad emission into triangle index buffers.

/// Write one quad as two triangles into `buffer` at `offset` and return the next offset.
///
/// Corners use a (u, v) naming: `v00`/`v10` share one edge and `v01`/`v11` the
/// opposite one. The triangles written are `(v00, v01, v10)` and `(v10, v01, v11)`,
/// so corners given in the caller's orientation always wind the same way.
/// Index ranges are not checked here.
#[inline]
pub fn emit_quad(buffer: &mut [u32], offset: usize, v00: u32, v10: u32, v01: u32, v11: u32) -> usize {
    buffer[offset] = v00;
    buffer[offset + 1] = v01;
    buffer[offset + 2] = v10;
    buffer[offset + 3] = v10;
    buffer[offset + 4] = v01;
    buffer[offset + 5] = v11;
    offset + 6
}

/// Cursor over an exactly-sized index buffer.
///
/// Owned by a single triangulation pass; `finish` asserts every slot was written.
#[derive(Debug)]
pub struct IndexWriter {
    indices: Vec<u32>,
    offset: usize,
}

impl IndexWriter {
    /// Allocate room for exactly `quads` quads.
    pub fn with_quads(quads: usize) -> Self {
        Self {
            indices: vec![0; quads * 6],
            offset: 0,
        }
    }

    /// Append one quad (see [`emit_quad`] for the corner convention).
    #[inline]
    pub fn quad(&mut self, v00: u32, v10: u32, v01: u32, v11: u32) {
        self.offset = emit_quad(&mut self.indices, self.offset, v00, v10, v01, v11);
    }

    /// Next free slot.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining_quads(&self) -> usize {
        (self.indices.len() - self.offset) / 6
    }

    /// Hand over the buffer. Panics if it was not filled exactly.
    pub fn finish(self) -> Vec<u32> {
        assert_eq!(
            self.offset,
            self.indices.len(),
            "index buffer filled {} of {} slots",
            self.offset,
            self.indices.len()
        );
        self.indices
    }
}
