//! wgpu side of the generated meshes: vertex layouts, buffer upload and a
//! headless device for tools and tests.

pub mod context;
pub mod mesh;
pub mod vertex;

pub use context::*;
pub use mesh::*;
pub use vertex::*;
