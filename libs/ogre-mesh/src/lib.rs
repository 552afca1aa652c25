//! # Ogre Mesh
//!
//! Converts polygon meshes into the Ogre XML mesh format: one deduplicated
//! shared vertex buffer plus one index-only submesh per material.
//!
//! ## Architecture
//!
//! ```text
//! MeshSource → GeometryBuilder → MeshModel → XmlEmitter → <name>.mesh.xml
//! ```
//!
//! - **GeometryBuilder**: axis swap, quad fan split, exact-value vertex dedup
//! - **XmlEmitter**: fixed tag/attribute order, 6-digit floats, 4-space indent
//! - **export**: host snapshot boundary, parallel batches, atomic file writes
//!
//! ## Usage
//!
//! ```rust
//! use ogre_mesh::{export, InputFace, MeshData, Vector3};
//!
//! let data = MeshData {
//!     name: "Tri".to_string(),
//!     materials: vec![Some("Stone".to_string())],
//!     faces: vec![InputFace::flat(
//!         vec![Vector3::ZERO, Vector3::X, Vector3::Y],
//!         Vector3::Z,
//!         0,
//!     )],
//! };
//! let file = export(&data)?;
//! assert_eq!(file.file_name, "Tri.mesh.xml");
//! # Ok::<(), ogre_mesh::ExportError>(())
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod export;
pub mod xml;

pub use builder::{build_mesh, FaceNormals, GeometryBuilder, InputFace};
pub use config::constants::ExportConfig;
pub use self::core::{axis_swap, Face, MeshModel, Submesh, Vector3, Vertex, VertexBuffer};
pub use error::{ExportError, ExportResult};
pub use export::{
    export, export_batch, export_batch_with_config, export_to_dir, export_with_config, write_output,
    MeshData, MeshSource, OutputFile,
};
pub use xml::XmlEmitter;
