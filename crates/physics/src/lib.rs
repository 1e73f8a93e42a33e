//! Physics side of the generated meshes, backed by Rapier3D.

pub mod collision;
pub mod physics_world;
pub mod raycast;
pub mod rounded_box;

pub use collision::*;
pub use physics_world::*;
pub use raycast::*;
pub use rounded_box::*;

// Re-export Rapier for downstream crates
pub use rapier3d;

// Re-export common Rapier types
pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};
