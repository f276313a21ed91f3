//! Pendulum aim that sweeps back and forth on the fixed timestep.

use bevy::math::Vec2;
use serde::Deserialize;

use super::orientation::Orientation;
use super::visuals::{CharacterVisuals, IndicatorPose};
use crate::config::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AimConfig {
  /// Upper bound of the sweep in degrees. The lower bound is always 0.
  pub max_angle: i32,
  /// Seconds between oscillator ticks. Also used as the fixed timestep.
  pub interval: f32,
  /// Distance of the indicator from the character centre.
  pub radius: f32,
}

impl Default for AimConfig {
  fn default() -> Self {
    Self {
      max_angle: 55,
      interval: 0.02,
      radius: 1.0,
    }
  }
}

impl AimConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.max_angle <= 0 {
      return Err(ConfigError::invalid("aim.max_angle must be positive"));
    }
    if !(self.interval > 0.0) {
      return Err(ConfigError::invalid("aim.interval must be positive"));
    }
    if !(self.radius > 0.0) {
      return Err(ConfigError::invalid("aim.radius must be positive"));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AimOscillator {
  angle: i32,
  ascending: bool,
  paused: bool,
  max_angle: i32,
  radius: f32,
}

impl AimOscillator {
  pub fn new(config: &AimConfig) -> Self {
    Self {
      angle: 0,
      ascending: true,
      paused: false,
      max_angle: config.max_angle,
      radius: config.radius,
    }
  }

  /// Starts the sweep at `angle`, clamped to the configured range.
  pub fn with_angle(mut self, angle: i32) -> Self {
    self.angle = angle.clamp(0, self.max_angle);
    self
  }

  pub fn retune(&mut self, config: &AimConfig) {
    self.max_angle = config.max_angle;
    self.radius = config.radius;
    self.angle = self.angle.clamp(0, self.max_angle);
  }

  /// Raw sweep angle in degrees, always within `0..=max_angle`.
  pub fn angle(&self) -> i32 {
    self.angle
  }

  pub fn is_ascending(&self) -> bool {
    self.ascending
  }

  pub fn is_paused(&self) -> bool {
    self.paused
  }

  pub fn radius(&self) -> f32 {
    self.radius
  }

  pub fn toggle_pause(&mut self) {
    self.paused = !self.paused;
  }

  /// Advances the sweep by one degree.
  ///
  /// Reaching a bound does not reverse the sweep immediately: the direction
  /// turns on the following tick, so the bound itself is held for exactly one
  /// step and the angle never leaves `0..=max_angle`.
  pub fn tick(&mut self) {
    if self.paused {
      return;
    }

    if self.ascending && self.angle >= self.max_angle {
      self.ascending = false;
    } else if !self.ascending && self.angle <= 0 {
      self.ascending = true;
    }

    self.angle += if self.ascending { 1 } else { -1 };
  }

  /// World launch angle in degrees, measured counter-clockwise from +X.
  pub fn effective_angle(&self, orientation: &Orientation) -> f32 {
    if orientation.is_flipped() {
      90.0 - self.angle as f32
    } else {
      90.0 + self.angle as f32
    }
  }

  /// Places the indicator on a circle of `radius` around `center`, pointing
  /// along the effective angle.
  pub fn indicator_pose(&self, center: Vec2, orientation: &Orientation) -> IndicatorPose {
    let degrees = self.effective_angle(orientation);
    let radians = degrees.to_radians();
    IndicatorPose {
      position: center + self.radius * Vec2::new(radians.cos(), radians.sin()),
      rotation_degrees: degrees,
    }
  }

  pub fn update_indicator_pose(
    &self,
    center: Vec2,
    orientation: &Orientation,
    visuals: &mut CharacterVisuals,
  ) {
    visuals.indicator_pose = self.indicator_pose(center, orientation);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn oscillator() -> AimOscillator {
    AimOscillator::new(&AimConfig::default())
  }

  #[test]
  fn angle_stays_in_range_over_many_sweeps() {
    let mut aim = oscillator();
    let mut seen_top = false;
    let mut seen_bottom_again = false;

    for _ in 0..1000 {
      aim.tick();
      assert!(
        (0..=55).contains(&aim.angle()),
        "angle left range: {}",
        aim.angle()
      );
      if aim.angle() == 55 {
        seen_top = true;
      }
      if seen_top && aim.angle() == 0 {
        seen_bottom_again = true;
      }
    }

    assert!(seen_top);
    assert!(seen_bottom_again);
  }

  #[test]
  fn direction_turns_on_the_tick_after_a_bound() {
    let mut aim = oscillator().with_angle(54);
    aim.tick();
    assert_eq!(aim.angle(), 55);
    assert!(aim.is_ascending());

    aim.tick();
    assert_eq!(aim.angle(), 54);
    assert!(!aim.is_ascending());
  }

  #[test]
  fn paused_oscillator_holds_angle() {
    let mut aim = oscillator().with_angle(12);
    aim.toggle_pause();
    for _ in 0..10 {
      aim.tick();
    }
    assert_eq!(aim.angle(), 12);

    aim.toggle_pause();
    aim.tick();
    assert_eq!(aim.angle(), 13);
  }

  #[test]
  fn effective_angle_mirrors_with_orientation() {
    let facing = Orientation::default();
    let mut mirrored = Orientation::default();
    mirrored.toggle_flip();

    for angle in 0..=55 {
      let aim = oscillator().with_angle(angle);
      assert_eq!(aim.effective_angle(&facing), 90.0 + angle as f32);
      assert_eq!(aim.effective_angle(&mirrored), 90.0 - angle as f32);
    }
  }

  #[test]
  fn indicator_sits_on_the_radius() {
    let config = AimConfig {
      radius: 2.0,
      ..Default::default()
    };
    let aim = AimOscillator::new(&config).with_angle(30);
    let center = Vec2::new(3.0, -1.0);

    let pose = aim.indicator_pose(center, &Orientation::default());
    assert_eq!(pose.rotation_degrees, 120.0);
    assert!(((pose.position - center).length() - 2.0).abs() < 1e-5);
    assert!((pose.position.x - (3.0 - 1.0)).abs() < 1e-5);
    assert!((pose.position.y - (-1.0 + 3f32.sqrt())).abs() < 1e-5);
  }

  #[test]
  fn paused_oscillator_still_places_indicator() {
    let mut aim = oscillator().with_angle(20);
    aim.toggle_pause();
    aim.tick();
    let mut visuals = CharacterVisuals::default();
    aim.update_indicator_pose(Vec2::ZERO, &Orientation::default(), &mut visuals);
    assert_eq!(visuals.indicator_pose.rotation_degrees, 110.0);
  }

  #[test]
  fn rejects_bad_config() {
    let config = AimConfig {
      radius: 0.0,
      ..Default::default()
    };
    assert!(config.validate().is_err());
    assert!(AimConfig::default().validate().is_ok());
  }
}
