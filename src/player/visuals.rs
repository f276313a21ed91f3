//! Presentation state written by the core and read back by the sprite sync
//! systems.

use bevy::math::Vec2;

/// Animator booleans driving the character sprite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFlags {
  pub preparing: bool,
  pub jumping: bool,
  pub falling: bool,
}

/// World placement of the aim indicator.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IndicatorPose {
  pub position: Vec2,
  pub rotation_degrees: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterVisuals {
  /// Horizontal and vertical scale of the character sprite.
  pub sprite_scale: Vec2,
  pub indicator_scale: Vec2,
  /// Charge step shown by the indicator, `0` is the idle image.
  pub indicator_step: usize,
  pub indicator_pose: IndicatorPose,
  pub flags: AnimationFlags,
}

impl CharacterVisuals {
  pub fn new(sprite_scale: f32) -> Self {
    Self {
      sprite_scale: Vec2::splat(sprite_scale),
      indicator_scale: Vec2::ONE,
      indicator_step: 0,
      indicator_pose: IndicatorPose::default(),
      flags: AnimationFlags::default(),
    }
  }
}

impl Default for CharacterVisuals {
  fn default() -> Self {
    Self::new(1.0)
  }
}
