//! Collision groups and filtering.

use rapier3d::prelude::*;

/// Collision groups for generated geometry.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroup {
    /// Static environment (ground, walls)
    Environment = 1 << 0,
    /// Generated props (rounded boxes)
    Prop = 1 << 1,
}

impl CollisionGroup {
    /// Create a collision group for environment.
    pub fn environment() -> InteractionGroups {
        InteractionGroups::new(Group::from_bits_retain(Self::Environment as u32), Group::ALL)
    }

    /// Create a collision group for props: they hit the environment and each other.
    pub fn prop() -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_retain(Self::Prop as u32),
            Group::from_bits_retain(Self::Environment as u32 | Self::Prop as u32),
        )
    }
}
