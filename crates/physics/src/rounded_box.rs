//! Rapier colliders for generated rounded boxes.

use crate::collision::CollisionGroup;
use crate::PhysicsWorld;
use mesh_core::{Axis, BoxShape, CapsuleShape, RoundedBoxColliders};
use rapier3d::prelude::*;

/// Cuboid for a slab, or `None` when the slab is flat (roundness at its maximum).
pub fn box_collider(shape: &BoxShape) -> Option<Collider> {
    let h = shape.half_extents;
    if h.min_element() <= 0.0 {
        return None;
    }
    let c = shape.center;
    Some(
        ColliderBuilder::cuboid(h.x, h.y, h.z)
            .translation(vector![c.x, c.y, c.z])
            .collision_groups(CollisionGroup::prop())
            .build(),
    )
}

/// Capsule along the shape's axis, or `None` for the zero-radius capsules of a sharp box.
pub fn capsule_collider(shape: &CapsuleShape) -> Option<Collider> {
    if shape.is_degenerate() {
        return None;
    }
    let half_height = shape.segment_half_height();
    let builder = match shape.axis {
        Axis::X => ColliderBuilder::capsule_x(half_height, shape.radius),
        Axis::Y => ColliderBuilder::capsule_y(half_height, shape.radius),
        Axis::Z => ColliderBuilder::capsule_z(half_height, shape.radius),
    };
    let c = shape.center;
    Some(
        builder
            .translation(vector![c.x, c.y, c.z])
            .collision_groups(CollisionGroup::prop())
            .build(),
    )
}

impl PhysicsWorld {
    /// Attach every non-degenerate collider of a rounded box to `body`.
    ///
    /// Shapes are in the mesh's local space, so the body origin lines up with the
    /// mesh origin.
    pub fn attach_rounded_box_colliders(
        &mut self,
        body: RigidBodyHandle,
        colliders: &RoundedBoxColliders,
    ) -> Vec<ColliderHandle> {
        let handles: Vec<ColliderHandle> = colliders
            .boxes
            .iter()
            .filter_map(box_collider)
            .chain(colliders.capsules.iter().filter_map(capsule_collider))
            .map(|collider| self.attach_collider(body, collider))
            .collect();

        let total = colliders.boxes.len() + colliders.capsules.len();
        if handles.len() < total {
            log::debug!("Skipped {} degenerate rounded box colliders", total - handles.len());
        }
        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RayTarget;
    use glam::Vec3;
    use procgen::{approximate_colliders, RoundedBoxParams};

    fn colliders(x: u32, y: u32, z: u32, r: u32) -> RoundedBoxColliders {
        approximate_colliders(&RoundedBoxParams::new(x, y, z, r))
    }

    #[test]
    fn attaches_boxes_and_capsules() {
        let mut world = PhysicsWorld::new();
        let body = world.add_static_body(Vec3::ZERO);
        let handles = world.attach_rounded_box_colliders(body, &colliders(4, 4, 4, 1));
        assert_eq!(handles.len(), 15);
        assert_eq!(world.collider_set.len(), 15);
    }

    #[test]
    fn sharp_box_skips_capsules() {
        let mut world = PhysicsWorld::new();
        let body = world.add_static_body(Vec3::ZERO);
        let handles = world.attach_rounded_box_colliders(body, &colliders(4, 3, 5, 0));
        assert_eq!(handles.len(), 3);
    }

    #[test]
    fn fully_rounded_box_skips_flat_slabs() {
        let mut world = PhysicsWorld::new();
        let body = world.add_static_body(Vec3::ZERO);
        let handles = world.attach_rounded_box_colliders(body, &colliders(2, 2, 2, 1));
        assert_eq!(handles.len(), 12);
    }

    #[test]
    fn capsule_uses_segment_half_height() {
        let shape = CapsuleShape {
            center: Vec3::new(3.0, 1.0, 1.0),
            axis: Axis::X,
            radius: 1.0,
            height: 6.0,
        };
        let collider = capsule_collider(&shape).unwrap();
        let capsule = collider.shape().as_capsule().unwrap();
        assert!((capsule.half_height() - 2.0).abs() < 1e-6);
        assert!((capsule.radius - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ray_hits_top_of_box() {
        let mut world = PhysicsWorld::new();
        let body = world.add_static_body(Vec3::ZERO);
        world.attach_rounded_box_colliders(body, &colliders(4, 3, 4, 1));
        world.update_query_pipeline();

        let hit = world
            .raycast(Vec3::new(2.0, 10.0, 2.0), Vec3::NEG_Y, 100.0, RayTarget::Body(body))
            .expect("ray should hit the box");
        assert!((hit.distance - 7.0).abs() < 1e-3, "distance {}", hit.distance);
        assert!((hit.point.y - 3.0).abs() < 1e-3);
        assert!(hit.normal.y > 0.99);
    }

    #[test]
    fn dropped_box_comes_to_rest_on_ground() {
        let mut world = PhysicsWorld::new();
        world.add_ground_plane();
        let body = world.add_dynamic_body(Vec3::new(0.0, 3.0, 0.0));
        world.attach_rounded_box_colliders(body, &colliders(4, 4, 4, 1));

        for _ in 0..300 {
            world.step();
        }

        let y = world.body_position(body).unwrap().y;
        assert!(y > -0.2 && y < 0.5, "box settled at y = {}", y);
    }
}
