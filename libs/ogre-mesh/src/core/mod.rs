//! Core data model shared by the builder and the emitter.

pub mod model;
pub mod vec3;
pub mod vertex;
pub mod vertex_buffer;

pub use model::{Face, MeshModel, Submesh};
pub use vec3::{axis_swap, Vector3};
pub use vertex::Vertex;
pub use vertex_buffer::VertexBuffer;
