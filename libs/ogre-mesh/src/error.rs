//! # Error Types
//!
//! Error types for mesh export. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO silent skipping of malformed faces
//! - The first violation aborts the mesh being exported
//! - Errors include the offending face index for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or writing a mesh.
///
/// ## Example
///
/// ```rust
/// use ogre_mesh::{build_mesh, ExportError};
///
/// match build_mesh("Empty", &[], &[]) {
///     Err(ExportError::NoMaterialsAssigned { mesh }) => assert_eq!(mesh, "Empty"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExportError {
    /// A face has fewer than three or more than four corners.
    #[error("face {face} has {corners} corners, expected 3 or 4")]
    InvalidFaceArity {
        /// Position of the face in the input stream.
        face: usize,
        /// Number of corners found.
        corners: usize,
    },

    /// The mesh has no usable material slot, so no submesh can hold a face.
    #[error("mesh '{mesh}' has no materials assigned")]
    NoMaterialsAssigned {
        /// Name of the mesh being exported.
        mesh: String,
    },

    /// A face refers to a material slot that is missing or empty.
    #[error("face {face} uses material slot {index}, but the mesh has {slots} slot(s)")]
    MaterialIndexOutOfRange {
        /// Position of the face in the input stream.
        face: usize,
        /// Requested material slot.
        index: usize,
        /// Number of material slots on the mesh.
        slots: usize,
    },

    /// A per-vertex normal list does not match the corner count.
    #[error("face {face} has {corners} corners but {normals} vertex normals")]
    NormalCountMismatch {
        /// Position of the face in the input stream.
        face: usize,
        /// Number of corners found.
        corners: usize,
        /// Number of normals supplied.
        normals: usize,
    },

    /// The output sink could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A position or normal component is NaN or infinite.
    #[error("face {face} has a non-finite {attribute} component")]
    NonFiniteComponent {
        /// Position of the face in the input stream.
        face: usize,
        /// `"position"` or `"normal"`.
        attribute: &'static str,
    },

    /// The mesh has more corners than 32-bit indices can address.
    #[error("too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of triangle corners in the mesh.
        count: usize,
        /// Largest addressable vertex count.
        max: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// TESTS
// =============================================================================
