//! Ray probes against the attached colliders.

use crate::collision::CollisionGroup;
use crate::PhysicsWorld;
use glam::Vec3;
use rapier3d::prelude::*;

/// Result of a raycast query.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    pub collider: ColliderHandle,
    /// Distance along the (unit) ray to the hit point.
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

/// Which colliders a ray may stop at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayTarget {
    Any,
    /// Only colliders in the prop group, so the ground is ignored.
    Props,
    /// Only colliders attached to this body.
    Body(RigidBodyHandle),
}

impl PhysicsWorld {
    /// Cast a ray and return the first hit. Call `update_query_pipeline` after
    /// adding colliders and before querying.
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        target: RayTarget,
    ) -> Option<RaycastHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        let on_target = |_: ColliderHandle, collider: &Collider| match target {
            RayTarget::Body(body) => collider.parent() == Some(body),
            RayTarget::Any | RayTarget::Props => true,
        };
        let mut filter = QueryFilter::default().predicate(&on_target);
        if target == RayTarget::Props {
            let props = Group::from_bits_retain(CollisionGroup::Prop as u32);
            filter = filter.groups(InteractionGroups::new(Group::ALL, props));
        }

        self.query_pipeline
            .cast_ray_and_get_normal(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_distance,
                true,
                filter,
            )
            .map(|(collider, intersection)| {
                let point = ray.point_at(intersection.time_of_impact);
                RaycastHit {
                    collider,
                    distance: intersection.time_of_impact,
                    point: Vec3::new(point.x, point.y, point.z),
                    normal: Vec3::new(intersection.normal.x, intersection.normal.y, intersection.normal.z),
                }
            })
    }

    /// Height of the first surface below `(x, ceiling, z)`.
    pub fn surface_height(&self, x: f32, z: f32, ceiling: f32, target: RayTarget) -> Option<f32> {
        self.raycast(Vec3::new(x, ceiling, z), Vec3::NEG_Y, f32::MAX, target)
            .map(|hit| hit.point.y)
    }
}
