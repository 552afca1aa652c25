//! # Export Boundary
//!
//! Connects a host application to the core. The host implements
//! [`MeshSource`]; everything past the snapshot is pure data flow:
//!
//! ```text
//! MeshSource → snapshot (MeshData) → GeometryBuilder → XmlEmitter → OutputFile
//! ```
//!
//! Meshes share no state, so [`export_batch`] builds them in parallel and a
//! failing mesh never affects its siblings.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use config::constants::{ExportConfig, MESH_FILE_SUFFIX};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::builder::{GeometryBuilder, InputFace};
use crate::error::ExportResult;
use crate::xml::XmlEmitter;

// =============================================================================
// SOURCE
// =============================================================================

/// Read access to one mesh of the host application.
///
/// Hosts may invalidate their mesh data between calls, so the exporter only
/// ever reads through [`MeshSource::snapshot`], once per mesh.
pub trait MeshSource {
    /// Object name, used for the output file name.
    fn name(&self) -> &str;

    /// Material slots in slot order; `None` marks an empty slot.
    fn materials(&self) -> Vec<Option<String>>;

    /// Faces in host order.
    fn faces(&self) -> Vec<InputFace>;

    /// Reads everything the exporter needs in one go.
    fn snapshot(&self) -> MeshData {
        MeshData {
            name: self.name().to_string(),
            materials: self.materials(),
            faces: self.faces(),
        }
    }
}

/// Owned snapshot of a host mesh.
///
/// Deserializable, so a host can hand its data over as JSON or any other
/// serde format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Object name.
    pub name: String,
    /// Material slots in slot order.
    #[serde(default)]
    pub materials: Vec<Option<String>>,
    /// Faces in host order.
    #[serde(default)]
    pub faces: Vec<InputFace>,
}

impl MeshSource for MeshData {
    fn name(&self) -> &str {
        &self.name
    }

    fn materials(&self) -> Vec<Option<String>> {
        self.materials.clone()
    }

    fn faces(&self) -> Vec<InputFace> {
        self.faces.clone()
    }

    fn snapshot(&self) -> MeshData {
        self.clone()
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A serialized mesh document and its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// `<object-name>.mesh.xml`
    pub file_name: String,
    /// UTF-8 XML document.
    pub contents: Vec<u8>,
}

/// Derives the output file name from an object name.
///
/// Characters that cannot appear in a file name become `_`.
///
/// # Examples
/// ```
/// use ogre_mesh::export::mesh_file_name;
/// assert_eq!(mesh_file_name("Cube"), "Cube.mesh.xml");
/// assert_eq!(mesh_file_name("a/b:c"), "a_b_c.mesh.xml");
/// ```
pub fn mesh_file_name(object_name: &str) -> String {
    let stem: String = object_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}{MESH_FILE_SUFFIX}")
}

// =============================================================================
// EXPORT
// =============================================================================

/// Exports one mesh with the fixed schema formatting.
pub fn export(source: &impl MeshSource) -> ExportResult<OutputFile> {
    export_with_config(source, ExportConfig::default())
}

/// Exports one mesh with custom formatting.
pub fn export_with_config(source: &impl MeshSource, config: ExportConfig) -> ExportResult<OutputFile> {
    export_snapshot(&source.snapshot(), config)
}

fn export_snapshot(data: &MeshData, config: ExportConfig) -> ExportResult<OutputFile> {
    let model = GeometryBuilder::new(&data.name, &data.materials).build(&data.faces)?;
    let contents = XmlEmitter::with_config(config).to_bytes(&model)?;
    Ok(OutputFile {
        file_name: mesh_file_name(&data.name),
        contents,
    })
}

/// Exports several meshes; results are in input order.
///
/// Sources are read sequentially on the calling thread, then built and
/// serialized in parallel. Failures are logged and returned per mesh.
pub fn export_batch<S: MeshSource>(sources: &[S]) -> Vec<ExportResult<OutputFile>> {
    export_batch_with_config(sources, ExportConfig::default())
}

/// [`export_batch`] with custom formatting.
pub fn export_batch_with_config<S: MeshSource>(sources: &[S], config: ExportConfig) -> Vec<ExportResult<OutputFile>> {
    let snapshots: Vec<MeshData> = sources.iter().map(|s| s.snapshot()).collect();

    snapshots
        .par_iter()
        .map(|data| {
            let result = export_snapshot(data, config);
            if let Err(e) = &result {
                log::error!("failed to export mesh '{}': {}", data.name, e);
            }
            result
        })
        .collect()
}

// =============================================================================
// FILES
// =============================================================================

/// Writes `file` into `dir` and returns the final path.
///
/// The bytes go to a hidden temporary sibling first and are renamed into
/// place; on failure the temporary file is removed.
pub fn write_output(dir: &Path, file: &OutputFile) -> ExportResult<PathBuf> {
    let path = dir.join(&file.file_name);
    let tmp_path = dir.join(format!(".{}.tmp", file.file_name));

    let written = write_then_rename(&tmp_path, &path, &file.contents);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    log::info!("wrote {}", path.display());
    Ok(path)
}

fn write_then_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut out = fs::File::create(tmp_path)?;
    out.write_all(contents)?;
    out.sync_all()?;
    drop(out);
    fs::rename(tmp_path, path)
}

/// Exports one mesh straight into `dir`.
///
/// A mesh that fails to build never creates a file.
pub fn export_to_dir(source: &impl MeshSource, dir: &Path) -> ExportResult<PathBuf> {
    let file = export(source)?;
    write_output(dir, &file)
}
