//! The frog: orientation, aim, charge and jump wired together.

use bevy::log::debug;
use bevy::math::Vec2;
use bevy::prelude::Component;

use super::aim::{AimConfig, AimOscillator};
use super::body::CharacterBody;
use super::charge::{ChargeConfig, ChargeIndicator};
use super::jump::{JumpConfig, JumpContext, JumpState, JumpStateMachine, LaunchVector};
use super::orientation::Orientation;
use super::trajectory::{TrajectoryConfig, TrajectoryPreview};
use super::visuals::{CharacterVisuals, IndicatorPose};

/// Everything needed to build or retune a [`Froggy`].
#[derive(Debug, Clone, PartialEq)]
pub struct FroggyTuning {
  pub jump: JumpConfig,
  pub aim: AimConfig,
  pub charge: ChargeConfig,
  pub trajectory: TrajectoryConfig,
  pub sprite_scale: f32,
}

impl Default for FroggyTuning {
  fn default() -> Self {
    Self {
      jump: JumpConfig::default(),
      aim: AimConfig::default(),
      charge: ChargeConfig::default(),
      trajectory: TrajectoryConfig::default(),
      sprite_scale: 1.0,
    }
  }
}

#[derive(Component, Debug, Clone)]
pub struct Froggy {
  orientation: Orientation,
  aim: AimOscillator,
  charge: ChargeIndicator,
  jump: JumpStateMachine,
  trajectory: TrajectoryPreview,
  visuals: CharacterVisuals,
}

impl Froggy {
  pub fn new(tuning: &FroggyTuning) -> Self {
    Self {
      orientation: Orientation::default(),
      aim: AimOscillator::new(&tuning.aim),
      charge: ChargeIndicator::new(&tuning.charge),
      jump: JumpStateMachine::new(tuning.jump.clone()),
      trajectory: TrajectoryPreview::new(&tuning.trajectory),
      visuals: CharacterVisuals::new(tuning.sprite_scale),
    }
  }

  pub fn with_aim(mut self, aim: AimOscillator) -> Self {
    self.aim = aim;
    self
  }

  /// Swaps in new tuning without touching charge, wall or facing state.
  pub fn retune(&mut self, tuning: &FroggyTuning) {
    self.aim.retune(&tuning.aim);
    self.charge = ChargeIndicator::new(&tuning.charge);
    self.jump.retune(tuning.jump.clone());
    self.trajectory = TrajectoryPreview::new(&tuning.trajectory);
  }

  pub fn orientation(&self) -> &Orientation {
    &self.orientation
  }

  pub fn aim(&self) -> &AimOscillator {
    &self.aim
  }

  pub fn jump(&self) -> &JumpStateMachine {
    &self.jump
  }

  pub fn visuals(&self) -> &CharacterVisuals {
    &self.visuals
  }

  pub fn effective_angle(&self) -> f32 {
    self.aim.effective_angle(&self.orientation)
  }

  pub fn indicator_pose(&self) -> IndicatorPose {
    self.visuals.indicator_pose
  }

  fn jump_parts(&mut self, now: f32) -> (&mut JumpStateMachine, JumpContext<'_>) {
    (
      &mut self.jump,
      JumpContext {
        now,
        aim: &self.aim,
        charge: &self.charge,
        orientation: &mut self.orientation,
        visuals: &mut self.visuals,
      },
    )
  }

  pub fn on_press(&mut self, now: f32, body: &impl CharacterBody) {
    let (jump, mut ctx) = self.jump_parts(now);
    jump.on_press(&mut ctx, body);
  }

  pub fn on_release(&mut self, now: f32, body: &mut impl CharacterBody) -> Option<LaunchVector> {
    let (jump, mut ctx) = self.jump_parts(now);
    jump.on_release(&mut ctx, body)
  }

  pub fn on_wall_contact(&mut self, layer: u32, now: f32, body: &mut impl CharacterBody) -> bool {
    let (jump, mut ctx) = self.jump_parts(now);
    jump.on_wall_contact(layer, &mut ctx, body)
  }

  pub fn per_frame_update(&mut self, now: f32, body: &impl CharacterBody) {
    let (jump, mut ctx) = self.jump_parts(now);
    jump.per_frame_update(&mut ctx, body);
  }

  /// Fixed-rate step: advance the aim and place the indicator around the body.
  pub fn tick(&mut self, center: Vec2) {
    self.aim.tick();
    self
      .aim
      .update_indicator_pose(center, &self.orientation, &mut self.visuals);
  }

  pub fn toggle_pause(&mut self) {
    self.aim.toggle_pause();
    debug!("Aim paused: {}", self.aim.is_paused());
  }

  /// Turns the frog around. Only honoured on the ground and never while
  /// clinging to a wall. Returns whether the frog turned.
  pub fn request_flip(&mut self, body: &impl CharacterBody) -> bool {
    if self.jump.state(body) != JumpState::Grounded {
      return false;
    }

    self.orientation.toggle_flip();
    self.orientation.flip_sprite(&mut self.visuals);
    self.orientation.flip_arrow(&mut self.visuals);
    self
      .aim
      .update_indicator_pose(body.position(), &self.orientation, &mut self.visuals);
    debug!("Flipped, mirrored={}", self.orientation.is_flipped());
    true
  }

  /// Arc the frog would follow if released at `now`. Only available while
  /// charging on the ground.
  pub fn trajectory_preview(
    &self,
    now: f32,
    body: &impl CharacterBody,
    world_gravity: f32,
  ) -> Option<Vec<Vec2>> {
    if !self.jump.is_charging() || !self.jump.is_grounded(body) {
      return None;
    }

    let config = self.jump.config();
    let launch = LaunchVector::new(
      config.power(self.jump.held_time(now)),
      self.effective_angle(),
    );
    Some(self.trajectory.simulate(
      body.position(),
      launch.impulse,
      world_gravity * config.gravity_scale,
    ))
  }
}
