//! [`CharacterBody`] over Rapier components.
//!
//! The body is read into a snapshot, the jump logic works on the snapshot, and
//! only the fields that actually changed are written back. Systems that just
//! look (the debug gizmos) never touch the components mutably.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::body::{BoxCast, CharacterBody};

#[derive(Debug, Clone, Copy, PartialEq)]
struct BodySnapshot {
  position: Vec2,
  rotation_degrees: f32,
  velocity: Vec2,
  gravity_scale: f32,
}

pub struct RapierBody<'a, 'c> {
  entity: Entity,
  /// Without a physics world nothing can be touched, so every cast misses.
  context: Option<&'a RapierContext<'c>>,
  read: BodySnapshot,
  current: BodySnapshot,
}

impl<'a, 'c> RapierBody<'a, 'c> {
  pub fn read(
    entity: Entity,
    context: Option<&'a RapierContext<'c>>,
    transform: &Transform,
    velocity: &Velocity,
    gravity_scale: &GravityScale,
  ) -> Self {
    let snapshot = BodySnapshot {
      position: transform.translation.truncate(),
      rotation_degrees: transform.rotation.to_euler(EulerRot::XYZ).2.to_degrees(),
      velocity: velocity.linvel,
      gravity_scale: gravity_scale.0,
    };
    Self {
      entity,
      context,
      read: snapshot,
      current: snapshot,
    }
  }

  /// Copies changed values back onto the components.
  pub fn write_back(
    &self,
    transform: &mut Transform,
    velocity: &mut Velocity,
    gravity_scale: &mut GravityScale,
  ) {
    if self.current.rotation_degrees != self.read.rotation_degrees {
      transform.rotation = Quat::from_rotation_z(self.current.rotation_degrees.to_radians());
    }
    if self.current.velocity != self.read.velocity {
      velocity.linvel = self.current.velocity;
    }
    if self.current.gravity_scale != self.read.gravity_scale {
      gravity_scale.0 = self.current.gravity_scale;
    }
  }
}

impl CharacterBody for RapierBody<'_, '_> {
  fn position(&self) -> Vec2 {
    self.current.position
  }

  fn rotation_degrees(&self) -> f32 {
    self.current.rotation_degrees
  }

  fn set_rotation_degrees(&mut self, degrees: f32) {
    self.current.rotation_degrees = degrees;
  }

  fn velocity(&self) -> Vec2 {
    self.current.velocity
  }

  fn set_velocity(&mut self, velocity: Vec2) {
    self.current.velocity = velocity;
  }

  fn gravity_scale(&self) -> f32 {
    self.current.gravity_scale
  }

  fn set_gravity_scale(&mut self, scale: f32) {
    self.current.gravity_scale = scale;
  }

  fn box_overlap(&self, cast: &BoxCast) -> bool {
    let Some(context) = self.context else {
      return false;
    };

    let shape = Collider::cuboid(cast.size.x / 2.0, cast.size.y / 2.0);
    // Sensors such as the goal flag are never something to stand on.
    let filter = QueryFilter::default()
      .exclude_rigid_body(self.entity)
      .exclude_collider(self.entity)
      .exclude_sensors()
      .groups(CollisionGroups::new(
        Group::ALL,
        Group::from_bits_truncate(cast.layer_mask),
      ));

    context
      .cast_shape(
        cast.origin,
        cast.rotation_degrees.to_radians(),
        cast.direction.normalize_or_zero(),
        &*shape.raw,
        ShapeCastOptions::with_max_time_of_impact(cast.distance),
        filter,
      )
      .is_some()
  }
}
