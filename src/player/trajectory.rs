//! Read-only jump arc used by the debug preview.

use bevy::math::Vec2;
use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrajectoryConfig {
  pub steps: usize,
  pub time_step: f32,
}

impl Default for TrajectoryConfig {
  fn default() -> Self {
    Self {
      steps: 50,
      time_step: 0.05,
    }
  }
}

impl TrajectoryConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.steps == 0 {
      return Err(ConfigError::invalid("trajectory.steps must be positive"));
    }
    if !(self.time_step > 0.0) {
      return Err(ConfigError::invalid("trajectory.time_step must be positive"));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPreview {
  steps: usize,
  time_step: f32,
}

impl TrajectoryPreview {
  pub fn new(config: &TrajectoryConfig) -> Self {
    Self {
      steps: config.steps,
      time_step: config.time_step,
    }
  }

  /// Integrates a launch from `start` with semi-implicit Euler under a constant
  /// vertical acceleration. Returns `steps + 1` points, starting with `start`.
  pub fn simulate(
    &self,
    start: Vec2,
    launch_velocity: Vec2,
    vertical_acceleration: f32,
  ) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(self.steps + 1);
    let mut position = start;
    let mut velocity = launch_velocity;
    points.push(position);

    for _ in 0..self.steps {
      velocity.y += vertical_acceleration * self.time_step;
      position += velocity * self.time_step;
      points.push(position);
    }

    points
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn produces_one_point_per_step_plus_start() {
    let preview = TrajectoryPreview::new(&TrajectoryConfig::default());
    let points = preview.simulate(Vec2::ZERO, Vec2::new(1.0, 3.0), -14.7);
    assert_eq!(points.len(), 51);
    assert_eq!(points[0], Vec2::ZERO);
  }

  #[test]
  fn applies_gravity_before_moving() {
    let preview = TrajectoryPreview::new(&TrajectoryConfig {
      steps: 1,
      time_step: 0.5,
    });
    let points = preview.simulate(Vec2::ZERO, Vec2::new(2.0, 0.0), -10.0);
    // Velocity becomes (2, -5) before the position update.
    assert_eq!(points[1], Vec2::new(1.0, -2.5));
  }

  #[test]
  fn arc_rises_then_falls() {
    let preview = TrajectoryPreview::new(&TrajectoryConfig::default());
    let points = preview.simulate(Vec2::ZERO, Vec2::new(0.0, 4.0), -9.81);
    let peak = points
      .iter()
      .map(|p| p.y)
      .fold(f32::NEG_INFINITY, f32::max);
    assert!(peak > 0.0);
    assert!(points.last().is_some_and(|p| p.y < peak));
  }
}
