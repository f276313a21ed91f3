//! Physics collaborator seen by the jump logic.
//!
//! The jump state machine never talks to Rapier directly. It reads and writes
//! the character through [`CharacterBody`], which keeps the core testable with
//! an in-memory body and lets [`super::rapier_body::RapierBody`] do the real
//! work in the game.

use bevy::math::Vec2;

/// A directional box cast against a set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCast {
  pub origin: Vec2,
  /// Full width and height of the box.
  pub size: Vec2,
  pub rotation_degrees: f32,
  pub direction: Vec2,
  pub distance: f32,
  pub layer_mask: u32,
}

pub trait CharacterBody {
  fn position(&self) -> Vec2;

  fn rotation_degrees(&self) -> f32;

  fn set_rotation_degrees(&mut self, degrees: f32);

  fn velocity(&self) -> Vec2;

  fn set_velocity(&mut self, velocity: Vec2);

  fn gravity_scale(&self) -> f32;

  fn set_gravity_scale(&mut self, scale: f32);

  /// Returns true if the box, swept along `direction` for `distance`, touches
  /// anything on `layer_mask`.
  fn box_overlap(&self, cast: &BoxCast) -> bool;

  /// The body's local up axis in world space.
  fn up(&self) -> Vec2 {
    Vec2::from_angle(self.rotation_degrees().to_radians()).rotate(Vec2::Y)
  }
}

#[cfg(test)]
pub(crate) mod fake {
  use std::cell::RefCell;

  use super::*;

  /// In-memory body for unit tests. Ground contact is a plain switch and every
  /// cast is recorded.
  #[derive(Debug, Default)]
  pub struct FakeBody {
    pub position: Vec2,
    pub rotation_degrees: f32,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub grounded: bool,
    pub casts: RefCell<Vec<BoxCast>>,
  }

  impl FakeBody {
    pub fn grounded() -> Self {
      Self {
        grounded: true,
        gravity_scale: 1.5,
        ..Default::default()
      }
    }

    pub fn airborne() -> Self {
      Self {
        grounded: false,
        gravity_scale: 1.5,
        ..Default::default()
      }
    }

    pub fn last_cast(&self) -> Option<BoxCast> {
      self.casts.borrow().last().copied()
    }
  }

  impl CharacterBody for FakeBody {
    fn position(&self) -> Vec2 {
      self.position
    }

    fn rotation_degrees(&self) -> f32 {
      self.rotation_degrees
    }

    fn set_rotation_degrees(&mut self, degrees: f32) {
      self.rotation_degrees = degrees;
    }

    fn velocity(&self) -> Vec2 {
      self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
      self.velocity = velocity;
    }

    fn gravity_scale(&self) -> f32 {
      self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
      self.gravity_scale = scale;
    }

    fn box_overlap(&self, cast: &BoxCast) -> bool {
      self.casts.borrow_mut().push(*cast);
      self.grounded
    }
  }
}
