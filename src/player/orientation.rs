//! Facing direction of the frog.

use super::visuals::CharacterVisuals;

/// Logical mirror flag. It selects the sign used when the aim angle is turned
/// into a world angle and is the only facing state the jump logic reads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
  mirrored: bool,
}

impl Orientation {
  pub fn toggle_flip(&mut self) {
    self.mirrored = !self.mirrored;
  }

  pub fn is_flipped(&self) -> bool {
    self.mirrored
  }

  /// Negates the horizontal scale of the character sprite.
  pub fn flip_sprite(&self, visuals: &mut CharacterVisuals) {
    visuals.sprite_scale.x = -visuals.sprite_scale.x;
  }

  /// Rebuilds the indicator scale from its current components.
  ///
  /// The indicator is mirrored through the effective aim angle, not through its
  /// scale, so this leaves the scale as it was and repeated calls are no-ops.
  pub fn flip_arrow(&self, visuals: &mut CharacterVisuals) {
    let scale = visuals.indicator_scale;
    visuals.indicator_scale.x = scale.x;
    visuals.indicator_scale.y = scale.y;
  }
}

#[cfg(test)]
mod tests {
  use bevy::math::Vec2;

  use super::*;

  #[test]
  fn toggle_twice_restores() {
    let mut orientation = Orientation::default();
    assert!(!orientation.is_flipped());
    orientation.toggle_flip();
    assert!(orientation.is_flipped());
    orientation.toggle_flip();
    assert!(!orientation.is_flipped());
  }

  #[test]
  fn flip_sprite_negates_horizontal_scale_only() {
    let orientation = Orientation::default();
    let mut visuals = CharacterVisuals::new(2.0);

    orientation.flip_sprite(&mut visuals);
    assert_eq!(visuals.sprite_scale, Vec2::new(-2.0, 2.0));

    orientation.flip_sprite(&mut visuals);
    assert_eq!(visuals.sprite_scale, Vec2::new(2.0, 2.0));
  }

  #[test]
  fn flip_arrow_is_idempotent() {
    let orientation = Orientation::default();
    let mut visuals = CharacterVisuals::default();
    visuals.indicator_scale = Vec2::new(0.5, 0.75);

    orientation.flip_arrow(&mut visuals);
    orientation.flip_arrow(&mut visuals);
    assert_eq!(visuals.indicator_scale, Vec2::new(0.5, 0.75));
  }
}
