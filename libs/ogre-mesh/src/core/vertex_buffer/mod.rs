//! # Shared Vertex Buffer
//!
//! Insertion-ordered set of distinct [`Vertex`] values. The position of a
//! vertex in insertion order is its index, and that index never changes.

use std::collections::HashMap;

use super::vertex::Vertex;

// =============================================================================
// HASH KEY
// =============================================================================

/// Bit-exact lookup key for a vertex.
///
/// `-0.0` is folded onto `+0.0` so the key agrees with `==` on floats. Vertices
/// containing NaN get no key at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u64; 6]);

impl VertexKey {
    fn of(vertex: &Vertex) -> Option<Self> {
        if vertex.has_nan() {
            return None;
        }
        Some(Self(vertex.components().map(canonical_bits)))
    }
}

#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

// =============================================================================
// VERTEX BUFFER
// =============================================================================

/// Most vertices a buffer can index with `u32`.
///
/// Callers must stay below this; [`crate::builder::check_vertex_capacity`]
/// enforces it before a mesh is built.
pub const MAX_VERTEX_COUNT: usize = u32::MAX as usize;

/// Deduplicating, insertion-ordered vertex storage.
///
/// # Example
///
/// ```rust
/// use ogre_mesh::{Vertex, VertexBuffer, Vector3};
///
/// let mut buffer = VertexBuffer::new();
/// let a = buffer.insert(Vertex::new(Vector3::ZERO, Vector3::Y));
/// let b = buffer.insert(Vertex::new(Vector3::X, Vector3::Y));
/// let c = buffer.insert(Vertex::new(Vector3::ZERO, Vector3::Y));
/// assert_eq!((a, b, c), (0, 1, 0));
/// assert_eq!(buffer.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
    lookup: HashMap<VertexKey, u32>,
}

impl VertexBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `vertex`, appending it first if no equal vertex
    /// is stored yet.
    ///
    /// The buffer holds at most [`MAX_VERTEX_COUNT`] vertices; inserting past
    /// that limit is a logic error and trips a debug assertion.
    pub fn insert(&mut self, vertex: Vertex) -> u32 {
        let Some(key) = VertexKey::of(&vertex) else {
            return self.push(vertex);
        };
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }
        let index = self.push(vertex);
        self.lookup.insert(key, index);
        index
    }

    fn push(&mut self, vertex: Vertex) -> u32 {
        debug_assert!(self.vertices.len() < MAX_VERTEX_COUNT);
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Returns the index of a stored vertex equal to `vertex`, if any.
    pub fn index_of(&self, vertex: &Vertex) -> Option<u32> {
        VertexKey::of(vertex).and_then(|key| self.lookup.get(&key).copied())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the buffer holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`.
    #[inline]
    pub fn get(&self, index: u32) -> Option<&Vertex> {
        self.vertices.get(index as usize)
    }

    /// Iterates vertices in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Returns the vertices in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl<'a> IntoIterator for &'a VertexBuffer {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
