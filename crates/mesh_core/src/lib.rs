//! Core mesh types shared by the generators and their consumers.
//!
//! This crate provides the data model used across the workspace:
//! - Vertex layouts for the flat grid and the rounded box
//! - `MeshData` with named submeshes and the quad emitter that fills them
//! - Collider descriptors for the physics side

pub mod axis;
pub mod colliders;
pub mod error;
pub mod mesh;
pub mod normals;
pub mod quad;
pub mod vertex;

pub use axis::*;
pub use colliders::*;
pub use error::*;
pub use mesh::*;
pub use normals::*;
pub use quad::*;
pub use vertex::*;

// Re-export commonly used types
pub use glam::{Vec2, Vec3, Vec4};
