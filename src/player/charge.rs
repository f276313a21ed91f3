//! Hold duration to indicator step mapping.

use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChargeConfig {
  /// Number of charge steps after the idle one.
  pub steps: usize,
  /// Seconds of holding that reach the last step.
  pub max_duration: f32,
}

impl Default for ChargeConfig {
  fn default() -> Self {
    Self {
      steps: 8,
      max_duration: 1.0,
    }
  }
}

impl ChargeConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.steps == 0 {
      return Err(ConfigError::invalid("charge.steps must be positive"));
    }
    if !(self.max_duration > 0.0) {
      return Err(ConfigError::invalid("charge.max_duration must be positive"));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargeIndicator {
  steps: usize,
  max_duration: f32,
  step_duration: f32,
}

impl ChargeIndicator {
  pub fn new(config: &ChargeConfig) -> Self {
    Self {
      steps: config.steps,
      max_duration: config.max_duration,
      step_duration: config.max_duration / config.steps as f32,
    }
  }

  /// Index of the fully charged step.
  pub fn terminal_step(&self) -> usize {
    self.steps
  }

  pub fn step_duration(&self) -> f32 {
    self.step_duration
  }

  /// Maps a charge that began at `start` to an indicator step at `now`.
  ///
  /// `None` means nothing is charging and always maps to the idle step `0`.
  pub fn step(&self, start: Option<f32>, now: f32) -> usize {
    let Some(start) = start else {
      return 0;
    };

    let held = now - start;
    if held > self.max_duration {
      return self.steps;
    }

    ((held.max(0.0) / self.step_duration) as usize).min(self.steps)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn indicator() -> ChargeIndicator {
    ChargeIndicator::new(&ChargeConfig::default())
  }

  #[test]
  fn idle_when_not_charging() {
    let charge = indicator();
    for now in [0.0, 0.5, 3.0, 1000.0] {
      assert_eq!(charge.step(None, now), 0);
    }
  }

  #[test]
  fn steps_every_eighth_of_a_second() {
    let charge = indicator();
    assert_eq!(charge.step_duration(), 0.125);
    assert_eq!(charge.step(Some(5.0), 5.0), 0);
    assert_eq!(charge.step(Some(5.0), 5.1), 0);
    assert_eq!(charge.step(Some(5.0), 5.25), 2);
    assert_eq!(charge.step(Some(5.0), 5.9), 7);
  }

  #[test]
  fn saturates_past_max_duration() {
    let charge = indicator();
    assert_eq!(charge.step(Some(2.0), 3.01), 8);
    assert_eq!(charge.step(Some(2.0), 60.0), charge.terminal_step());
  }

  #[test]
  fn never_decreases_while_holding() {
    let charge = indicator();
    let mut last = 0;
    for i in 0..200 {
      let now = 10.0 + i as f32 * 0.01;
      let step = charge.step(Some(10.0), now);
      assert!(step >= last, "step went from {last} to {step} at {now}");
      last = step;
    }
    assert_eq!(last, 8);
  }

  #[test]
  fn rejects_zero_steps() {
    let config = ChargeConfig {
      steps: 0,
      ..Default::default()
    };
    assert!(config.validate().is_err());
  }
}
