//! Collider descriptors handed to the physics side.
//!
//! These are plain shapes in the mesh's local space; they never reference vertices.

use crate::axis::Axis;
use glam::Vec3;

/// Axis-aligned box collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BoxShape {
    /// Box of full `size` centred on `center`.
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// Capsule collider lying along one principal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleShape {
    pub center: Vec3,
    pub axis: Axis,
    pub radius: f32,
    /// Total length along `axis`, end caps included.
    pub height: f32,
}

impl CapsuleShape {
    /// Half length of the inner segment (height without the two hemispheres).
    pub fn segment_half_height(&self) -> f32 {
        (self.height * 0.5 - self.radius).max(0.0)
    }

    /// Zero-radius capsules come out of unrounded boxes and have no volume.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

/// Three slabs plus twelve edge capsules approximating a rounded box.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedBoxColliders {
    pub boxes: [BoxShape; 3],
    pub capsules: [CapsuleShape; 12],
}

impl RoundedBoxColliders {
    /// Combined envelope `(min, max)` of the three boxes.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.boxes.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(lo, hi), b| (lo.min(b.min()), hi.max(b.max())),
        )
    }

    pub fn capsules_along(&self, axis: Axis) -> impl Iterator<Item = &CapsuleShape> {
        self.capsules.iter().filter(move |c| c.axis == axis)
    }
}
