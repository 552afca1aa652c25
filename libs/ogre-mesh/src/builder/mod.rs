//! # Geometry Builder
//!
//! Consolidates a stream of source faces into a [`MeshModel`].
//!
//! ## Pipeline
//!
//! ```text
//! InputFace (Z-up, tri/quad) → validate → fan split → axis swap → dedup
//! ```
//!
//! Every face is validated before the vertex buffer is touched, so a
//! malformed mesh never yields a half-built model.

use config::constants::{MAX_FACE_CORNERS, MIN_FACE_CORNERS};
use serde::{Deserialize, Serialize};

use crate::core::vertex_buffer::MAX_VERTEX_COUNT;
use crate::core::{axis_swap, Face, MeshModel, Submesh, Vector3, Vertex, VertexBuffer};
use crate::error::{ExportError, ExportResult};

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Normals supplied by the host for one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceNormals {
    /// One normal per corner, in corner order.
    PerVertex(Vec<Vector3>),
    /// A single normal for the whole face.
    Face(Vector3),
}

/// A source polygon in object (Z-up) space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFace {
    /// Corner positions, three or four.
    pub positions: Vec<Vector3>,
    /// Corner or face normals.
    pub normals: FaceNormals,
    /// Smooth faces use per-corner normals, flat faces one face normal.
    #[serde(default)]
    pub smooth: bool,
    /// Material slot of the owning mesh.
    #[serde(default)]
    pub material_index: usize,
}

impl InputFace {
    /// Creates a flat face sharing one normal.
    pub fn flat(positions: Vec<Vector3>, normal: Vector3, material_index: usize) -> Self {
        Self {
            positions,
            normals: FaceNormals::Face(normal),
            smooth: false,
            material_index,
        }
    }

    /// Creates a smooth face with per-corner normals.
    pub fn smooth(positions: Vec<Vector3>, normals: Vec<Vector3>, material_index: usize) -> Self {
        Self {
            positions,
            normals: FaceNormals::PerVertex(normals),
            smooth: true,
            material_index,
        }
    }

    /// Normals each corner contributes, in object space.
    ///
    /// A flat face with only corner normals falls back to the geometric
    /// normal of the polygon.
    fn corner_normals(&self) -> Vec<Vector3> {
        match (&self.normals, self.smooth) {
            (FaceNormals::PerVertex(normals), true) => normals.clone(),
            (FaceNormals::PerVertex(_), false) => {
                vec![polygon_normal(&self.positions); self.positions.len()]
            }
            (FaceNormals::Face(normal), _) => vec![*normal; self.positions.len()],
        }
    }
}

/// Unit normal of a triangle or quad; zero if degenerate.
///
/// Triangles use `(p1 - p0) x (p2 - p0)`. Quads use the cross product of
/// their diagonals, `(p2 - p0) x (p3 - p1)`, which is well defined for
/// non-planar quads too.
pub fn polygon_normal(positions: &[Vector3]) -> Vector3 {
    let n = match positions {
        [p0, p1, p2] => (*p1 - *p0).cross(*p2 - *p0),
        [p0, p1, p2, p3] => (*p2 - *p0).cross(*p3 - *p1),
        _ => Vector3::ZERO,
    };
    n.normalize_or_zero()
}

/// Corner triples produced by the fixed fan split.
fn fan(corners: usize) -> &'static [[usize; 3]] {
    match corners {
        3 => &[[0, 1, 2]],
        _ => &[[0, 1, 2], [0, 2, 3]],
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds one [`MeshModel`] from a mesh's material slots and faces.
///
/// # Example
///
/// ```rust
/// use ogre_mesh::{GeometryBuilder, InputFace, Vector3};
///
/// let materials = vec![Some("Stone".to_string())];
/// let face = InputFace::flat(
///     vec![Vector3::ZERO, Vector3::X, Vector3::Y],
///     Vector3::Z,
///     0,
/// );
/// let model = GeometryBuilder::new("Tri", &materials).build(&[face]).unwrap();
/// assert_eq!(model.vertex_count(), 3);
/// assert_eq!(model.submeshes[0].faces.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeometryBuilder<'a> {
    name: &'a str,
    materials: &'a [Option<String>],
}

impl<'a> GeometryBuilder<'a> {
    /// Creates a builder for the mesh `name` with the given material slots.
    ///
    /// `None` marks an empty slot; it gets no submesh.
    pub fn new(name: &'a str, materials: &'a [Option<String>]) -> Self {
        Self { name, materials }
    }

    /// Consolidates `faces` into a model.
    ///
    /// # Errors
    ///
    /// - [`ExportError::NoMaterialsAssigned`] if every slot is empty
    /// - [`ExportError::InvalidFaceArity`] for faces that are not tris or quads
    /// - [`ExportError::NormalCountMismatch`] for short or long corner normal lists
    /// - [`ExportError::MaterialIndexOutOfRange`] for missing or empty slots
    /// - [`ExportError::NonFiniteComponent`] for NaN or infinite coordinates
    /// - [`ExportError::TooManyVertices`] if indices could overflow `u32`
    pub fn build(&self, faces: &[InputFace]) -> ExportResult<MeshModel> {
        let (mut submeshes, slot_map) = self.submeshes_by_slot()?;

        let targets = faces
            .iter()
            .enumerate()
            .map(|(i, face)| self.validate(i, face, &slot_map))
            .collect::<ExportResult<Vec<usize>>>()?;
        check_vertex_capacity(faces.iter().map(|f| f.positions.len()).sum())?;

        let mut vertex_buffer = VertexBuffer::new();
        for (face, target) in faces.iter().zip(targets) {
            let corners: Vec<Vertex> = face
                .positions
                .iter()
                .zip(face.corner_normals())
                .map(|(p, n)| Vertex::new(axis_swap(*p), axis_swap(n)))
                .collect();

            for &[a, b, c] in fan(corners.len()) {
                let i1 = vertex_buffer.insert(corners[a]);
                let i2 = vertex_buffer.insert(corners[b]);
                let i3 = vertex_buffer.insert(corners[c]);
                submeshes[target].faces.push(Face::new(i1, i2, i3));
            }
        }

        let model = MeshModel {
            name: self.name.to_string(),
            vertex_buffer,
            submeshes,
        };

        log::debug!(
            "built mesh '{}': {} faces in, {} vertices, {} triangles, {} submeshes",
            model.name,
            faces.len(),
            model.vertex_count(),
            model.triangle_count(),
            model.submeshes.len()
        );
        if model.requires_32bit_indexes() {
            log::warn!(
                "mesh '{}' has {} vertices but is written with 16-bit indexes",
                model.name,
                model.vertex_count()
            );
        }

        Ok(model)
    }

    /// One empty submesh per non-empty slot, plus the slot → submesh map.
    fn submeshes_by_slot(&self) -> ExportResult<(Vec<Submesh>, Vec<Option<usize>>)> {
        let mut submeshes = Vec::new();
        let slot_map: Vec<Option<usize>> = self
            .materials
            .iter()
            .map(|slot| {
                slot.as_ref().map(|name| {
                    submeshes.push(Submesh::new(name.clone()));
                    submeshes.len() - 1
                })
            })
            .collect();

        if submeshes.is_empty() {
            return Err(ExportError::NoMaterialsAssigned {
                mesh: self.name.to_string(),
            });
        }
        Ok((submeshes, slot_map))
    }

    /// Checks one face and returns its target submesh.
    fn validate(&self, index: usize, face: &InputFace, slot_map: &[Option<usize>]) -> ExportResult<usize> {
        let corners = face.positions.len();
        if !(MIN_FACE_CORNERS..=MAX_FACE_CORNERS).contains(&corners) {
            return Err(ExportError::InvalidFaceArity {
                face: index,
                corners,
            });
        }

        if let FaceNormals::PerVertex(normals) = &face.normals {
            if normals.len() != corners {
                return Err(ExportError::NormalCountMismatch {
                    face: index,
                    corners,
                    normals: normals.len(),
                });
            }
        }

        if face.positions.iter().any(|p| !p.is_finite()) {
            return Err(ExportError::NonFiniteComponent {
                face: index,
                attribute: "position",
            });
        }
        let normals_finite = match &face.normals {
            FaceNormals::PerVertex(normals) => normals.iter().all(|n| n.is_finite()),
            FaceNormals::Face(normal) => normal.is_finite(),
        };
        if !normals_finite {
            return Err(ExportError::NonFiniteComponent {
                face: index,
                attribute: "normal",
            });
        }

        slot_map
            .get(face.material_index)
            .copied()
            .flatten()
            .ok_or(ExportError::MaterialIndexOutOfRange {
                face: index,
                index: face.material_index,
                slots: self.materials.len(),
            })
    }
}

/// Fails if `corners` distinct vertices could not all get a `u32` index.
///
/// The buffer never holds more vertices than the mesh has corners.
pub fn check_vertex_capacity(corners: usize) -> ExportResult<()> {
    if corners > MAX_VERTEX_COUNT {
        return Err(ExportError::TooManyVertices {
            count: corners,
            max: MAX_VERTEX_COUNT,
        });
    }
    Ok(())
}

/// Builds a model in one call.
///
/// Shorthand for `GeometryBuilder::new(name, materials).build(faces)`.
pub fn build_mesh(name: &str, materials: &[Option<String>], faces: &[InputFace]) -> ExportResult<MeshModel> {
    GeometryBuilder::new(name, materials).build(faces)
}

#[cfg(test)]
mod tests;
