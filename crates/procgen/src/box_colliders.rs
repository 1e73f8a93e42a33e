//! Cheap collision volume for the rounded box: three slabs and twelve edge capsules.
//!
//! Built from the parameters alone. The slabs cover the flat faces, the capsules
//! run along the twelve edges of the box inset by `roundness`, which is the same
//! inset the vertex rounding pushes out from, so both stay in agreement.

use crate::params::RoundedBoxParams;
use glam::Vec3;
use mesh_core::{Axis, BoxShape, CapsuleShape, RoundedBoxColliders};

pub fn approximate_colliders(params: &RoundedBoxParams) -> RoundedBoxColliders {
    let size = params.size();
    let r = params.roundness as f32;
    let inset = size - Vec3::splat(r * 2.0);
    let half = size * 0.5;

    // Each slab spans the full box along one axis and the inset box along the other two.
    let boxes = [
        BoxShape::from_size(half, Vec3::new(size.x, inset.y, inset.z)),
        BoxShape::from_size(half, Vec3::new(inset.x, size.y, inset.z)),
        BoxShape::from_size(half, Vec3::new(inset.x, inset.y, size.z)),
    ];

    let min = Vec3::splat(r);
    let max = size - min;
    let capsule = |axis: Axis, center: Vec3| CapsuleShape {
        center,
        axis,
        radius: r,
        height: center[axis.index()] * 2.0,
    };

    let capsules = [
        capsule(Axis::X, Vec3::new(half.x, min.y, min.z)),
        capsule(Axis::X, Vec3::new(half.x, min.y, max.z)),
        capsule(Axis::X, Vec3::new(half.x, max.y, min.z)),
        capsule(Axis::X, Vec3::new(half.x, max.y, max.z)),
        capsule(Axis::Y, Vec3::new(min.x, half.y, min.z)),
        capsule(Axis::Y, Vec3::new(min.x, half.y, max.z)),
        capsule(Axis::Y, Vec3::new(max.x, half.y, min.z)),
        capsule(Axis::Y, Vec3::new(max.x, half.y, max.z)),
        capsule(Axis::Z, Vec3::new(min.x, min.y, half.z)),
        capsule(Axis::Z, Vec3::new(min.x, max.y, half.z)),
        capsule(Axis::Z, Vec3::new(max.x, min.y, half.z)),
        capsule(Axis::Z, Vec3::new(max.x, max.y, half.z)),
    ];

    RoundedBoxColliders { boxes, capsules }
}
