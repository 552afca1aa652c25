//! # Mesh Model
//!
//! Output of the geometry builder: one shared vertex buffer and an ordered
//! list of index-only submeshes. The model is immutable once built.

use config::constants::MAX_16BIT_VERTEX_COUNT;

use super::vertex_buffer::VertexBuffer;

/// A triangle as three indices into the shared vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// First corner.
    pub i1: u32,
    /// Second corner.
    pub i2: u32,
    /// Third corner.
    pub i3: u32,
}

impl Face {
    /// Creates a new face.
    pub fn new(i1: u32, i2: u32, i3: u32) -> Self {
        Self { i1, i2, i3 }
    }

    /// Returns the indices as an array.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        [self.i1, self.i2, self.i3]
    }
}

/// The faces of one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Submesh {
    /// Material name written to the `material` attribute.
    pub material_name: String,
    /// Triangles in input order.
    pub faces: Vec<Face>,
}

impl Submesh {
    /// Creates an empty submesh for `material_name`.
    pub fn new(material_name: impl Into<String>) -> Self {
        Self {
            material_name: material_name.into(),
            faces: Vec::new(),
        }
    }

    /// Always true: submeshes index the shared geometry.
    #[inline]
    pub fn uses_shared_vertices(&self) -> bool {
        true
    }

    /// Always false, regardless of the buffer size.
    ///
    /// See [`MeshModel::requires_32bit_indexes`] for detecting overflow.
    #[inline]
    pub fn uses_32bit_indexes(&self) -> bool {
        false
    }
}

/// A consolidated mesh ready for serialization.
#[derive(Debug, Clone)]
pub struct MeshModel {
    /// Name of the source object.
    pub name: String,
    /// Vertices shared by every submesh.
    pub vertex_buffer: VertexBuffer,
    /// One submesh per non-empty material slot, in slot order.
    pub submeshes: Vec<Submesh>,
}

impl MeshModel {
    /// Returns the number of shared vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_buffer.len()
    }

    /// Returns the number of triangles across all submeshes.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.faces.len()).sum()
    }

    /// Returns true if the buffer is too large for 16-bit indices.
    ///
    /// The emitted `use32bitindexes` stays `false` either way.
    pub fn requires_32bit_indexes(&self) -> bool {
        self.vertex_buffer.len() > MAX_16BIT_VERTEX_COUNT
    }

    /// Checks that every face index is inside the vertex buffer.
    pub fn indices_valid(&self) -> bool {
        let count = self.vertex_buffer.len();
        self.submeshes
            .iter()
            .flat_map(|s| s.faces.iter())
            .all(|f| f.indices().iter().all(|&i| (i as usize) < count))
    }
}
