//! Thin wrapper around `glam::DVec3` shared across the exporter.
//!
//! Source meshes are Z-up while the target engine is Y-up; [`axis_swap`] is
//! the single conversion between the two and is applied to positions and
//! normals alike.

pub use glam::DVec3 as Vector3;

/// Remaps `(x, y, z)` to `(x, z, -y)`.
///
/// This is not an involution: applying it twice yields `(x, -y, -z)`.
///
/// # Examples
/// ```
/// use ogre_mesh::{axis_swap, Vector3};
/// let v = axis_swap(Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(v, Vector3::new(1.0, 3.0, -2.0));
/// ```
#[inline]
pub fn axis_swap(v: Vector3) -> Vector3 {
    Vector3::new(v.x, v.z, -v.y)
}
