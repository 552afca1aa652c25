//! # XML Emitter
//!
//! Transcribes a [`MeshModel`] into the Ogre `.mesh.xml` layout:
//!
//! ```text
//! <mesh>
//!     <sharedgeometry vertexcount="N">
//!         <vertexbuffer positions="true" normals="true">
//!             <vertex>
//!                 <position x="F" y="F" z="F" />
//!                 <normal x="F" y="F" z="F" />
//!             </vertex>
//!         </vertexbuffer>
//!     </sharedgeometry>
//!     <submeshes>
//!         <submesh material="NAME" usesharedvertices="true" use32bitindexes="false">
//!             <faces count="M">
//!                 <face v1="I" v2="I" v3="I" />
//!             </faces>
//!         </submesh>
//!     </submeshes>
//! </mesh>
//! ```
//!
//! The emitter trusts the model and never re-checks indices.

pub mod format;

use std::io::{self, Write};

use config::constants::{ExportConfig, XML_DECLARATION};

use crate::core::{MeshModel, Submesh, Vector3};
use format::Attr;

// =============================================================================
// WRITER
// =============================================================================

/// Line-oriented XML writer; the only state is the nesting depth.
struct XmlWriter<'w, W: Write> {
    sink: &'w mut W,
    depth: usize,
    indent_width: usize,
}

impl<'w, W: Write> XmlWriter<'w, W> {
    fn new(sink: &'w mut W, indent_width: usize) -> Self {
        Self {
            sink,
            depth: 0,
            indent_width,
        }
    }

    fn declaration(&mut self) -> io::Result<()> {
        writeln!(self.sink, "{XML_DECLARATION}")
    }

    fn tag(&mut self, name: &str, attrs: &[Attr<'_>], end: &str) -> io::Result<()> {
        let indent = self.depth * self.indent_width;
        write!(self.sink, "{:indent$}<{name}", "")?;
        for attr in attrs {
            write!(self.sink, " {}=\"{}\"", attr.name, attr.value)?;
        }
        writeln!(self.sink, "{end}")
    }

    /// `<name ...>` and one level deeper.
    fn open(&mut self, name: &str, attrs: &[Attr<'_>]) -> io::Result<()> {
        self.tag(name, attrs, ">")?;
        self.depth += 1;
        Ok(())
    }

    /// `<name ... />`
    fn empty(&mut self, name: &str, attrs: &[Attr<'_>]) -> io::Result<()> {
        self.tag(name, attrs, " />")
    }

    /// One level shallower and `</name>`.
    fn close(&mut self, name: &str) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        let indent = self.depth * self.indent_width;
        writeln!(self.sink, "{:indent$}</{name}>", "")
    }
}

// =============================================================================
// EMITTER
// =============================================================================

/// Serializes mesh models as Ogre XML.
///
/// # Example
///
/// ```rust
/// use ogre_mesh::{build_mesh, InputFace, Vector3, XmlEmitter};
///
/// let materials = vec![Some("Stone".to_string())];
/// let face = InputFace::flat(vec![Vector3::ZERO, Vector3::X, Vector3::Y], Vector3::Z, 0);
/// let model = build_mesh("Tri", &materials, &[face]).unwrap();
///
/// let xml = String::from_utf8(XmlEmitter::new().to_bytes(&model).unwrap()).unwrap();
/// assert!(xml.contains("<sharedgeometry vertexcount=\"3\">"));
/// assert!(xml.contains("<face v1=\"0\" v2=\"1\" v3=\"2\" />"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEmitter {
    config: ExportConfig,
}

impl XmlEmitter {
    /// Creates an emitter with the fixed schema formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an emitter with custom formatting.
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Writes `model` to `sink`, stopping at the first write error.
    pub fn write<W: Write>(&self, model: &MeshModel, sink: &mut W) -> io::Result<()> {
        let mut out = XmlWriter::new(sink, self.config.indent_width);
        out.declaration()?;
        out.open("mesh", &[])?;
        self.write_shared_geometry(&mut out, model)?;
        self.write_submeshes(&mut out, &model.submeshes)?;
        out.close("mesh")?;
        out.sink.flush()
    }

    /// Serializes `model` into an in-memory buffer.
    pub fn to_bytes(&self, model: &MeshModel) -> io::Result<Vec<u8>> {
        // Roughly 200 bytes per vertex block and 50 per face line.
        let mut bytes = Vec::with_capacity(model.vertex_count() * 200 + model.triangle_count() * 50 + 256);
        self.write(model, &mut bytes)?;
        Ok(bytes)
    }

    fn write_shared_geometry<W: Write>(&self, out: &mut XmlWriter<'_, W>, model: &MeshModel) -> io::Result<()> {
        out.open(
            "sharedgeometry",
            &[Attr::int("vertexcount", model.vertex_count() as u64)],
        )?;
        out.open(
            "vertexbuffer",
            &[Attr::boolean("positions", true), Attr::boolean("normals", true)],
        )?;
        for vertex in &model.vertex_buffer {
            out.open("vertex", &[])?;
            out.empty("position", &self.xyz(vertex.position))?;
            out.empty("normal", &self.xyz(vertex.normal))?;
            out.close("vertex")?;
        }
        out.close("vertexbuffer")?;
        out.close("sharedgeometry")
    }

    fn write_submeshes<W: Write>(&self, out: &mut XmlWriter<'_, W>, submeshes: &[Submesh]) -> io::Result<()> {
        out.open("submeshes", &[])?;
        for submesh in submeshes {
            out.open(
                "submesh",
                &[
                    Attr::text("material", &submesh.material_name),
                    Attr::boolean("usesharedvertices", submesh.uses_shared_vertices()),
                    Attr::boolean("use32bitindexes", submesh.uses_32bit_indexes()),
                ],
            )?;
            out.open("faces", &[Attr::int("count", submesh.faces.len() as u64)])?;
            for face in &submesh.faces {
                out.empty(
                    "face",
                    &[
                        Attr::int("v1", u64::from(face.i1)),
                        Attr::int("v2", u64::from(face.i2)),
                        Attr::int("v3", u64::from(face.i3)),
                    ],
                )?;
            }
            out.close("faces")?;
            out.close("submesh")?;
        }
        out.close("submeshes")
    }

    fn xyz(&self, v: Vector3) -> [Attr<'static>; 3] {
        let precision = self.config.float_precision;
        [
            Attr::float("x", v.x, precision),
            Attr::float("y", v.y, precision),
            Attr::float("z", v.z, precision),
        ]
    }
}
