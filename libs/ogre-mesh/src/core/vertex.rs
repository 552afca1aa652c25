//! Output vertex: a position/normal pair.

use super::vec3::Vector3;

/// A corner of the output mesh.
///
/// Two vertices are interchangeable exactly when both fields compare equal
/// component-wise. There is no tolerance: values that differ by rounding noise
/// stay distinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in target (Y-up) space.
    pub position: Vector3,
    /// Normal in target (Y-up) space.
    pub normal: Vector3,
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: Vector3, normal: Vector3) -> Self {
        Self { position, normal }
    }

    /// Returns true if any component is NaN.
    ///
    /// Such a vertex never equals another vertex, itself included.
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.position.is_nan() || self.normal.is_nan()
    }

    /// Raw components in `[px, py, pz, nx, ny, nz]` order.
    #[inline]
    pub fn components(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
        ]
    }
}
