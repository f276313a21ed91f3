//! Charge, buffer and release of the frog's jump, plus wall clinging.
//!
//! Ground contact is never stored: every query casts a box under the frog
//! through [`CharacterBody::box_overlap`]. Wall contact is stored and only a
//! wall jump clears it.

use bevy::log::{debug, trace};
use bevy::math::Vec2;
use serde::Deserialize;

use super::aim::AimOscillator;
use super::body::{BoxCast, CharacterBody};
use super::charge::ChargeIndicator;
use super::orientation::Orientation;
use super::visuals::CharacterVisuals;
use crate::config::ConfigError;

/// Hold time beyond this adds no more power.
pub const MAX_CHARGE_SECONDS: f32 = 1.0;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct JumpConfig {
  pub min_power: f32,
  pub multiplier: f32,
  /// Gravity scale restored when leaving a wall.
  pub gravity_scale: f32,
  /// Full size of the ground cast box.
  pub box_size: [f32; 2],
  pub cast_distance: f32,
  /// Collision groups the ground cast hits.
  pub ground_mask: u32,
  /// Collision groups that make the frog cling on contact.
  pub wall_layer: u32,
}

impl Default for JumpConfig {
  fn default() -> Self {
    Self {
      min_power: 2.0,
      multiplier: 2.0,
      gravity_scale: 1.5,
      box_size: [0.5, 0.1],
      cast_distance: 0.5,
      ground_mask: 0b0110,
      wall_layer: 0b0100,
    }
  }
}

impl JumpConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(self.box_size[0] > 0.0 && self.box_size[1] > 0.0) {
      return Err(ConfigError::invalid("jump.box_size must be positive"));
    }
    if !(self.cast_distance > 0.0) {
      return Err(ConfigError::invalid("jump.cast_distance must be positive"));
    }
    if self.ground_mask == 0 {
      return Err(ConfigError::invalid("jump.ground_mask must select a layer"));
    }
    Ok(())
  }

  /// Jump speed for a button held `held_time` seconds.
  pub fn power(&self, held_time: f32) -> f32 {
    self.min_power + self.multiplier * held_time.clamp(0.0, MAX_CHARGE_SECONDS)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
  Grounded,
  Airborne,
  Walled,
}

/// A launch applied on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVector {
  pub power: f32,
  pub angle_degrees: f32,
  /// Velocity added to the body.
  pub impulse: Vec2,
}

impl LaunchVector {
  pub fn new(power: f32, angle_degrees: f32) -> Self {
    let radians = angle_degrees.to_radians();
    Self {
      power,
      angle_degrees,
      impulse: Vec2::new(power * radians.cos(), power * radians.sin()),
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ChargeState {
  /// Time the current charge started. `None` while nothing is charging.
  pub held_since: Option<f32>,
  /// A press arrived in the air and waits for the next landing.
  pub buffered: bool,
  /// The jump button is down.
  pub held: bool,
}

/// The collaborators a transition reads or updates.
pub struct JumpContext<'a> {
  pub now: f32,
  pub aim: &'a AimOscillator,
  pub charge: &'a ChargeIndicator,
  pub orientation: &'a mut Orientation,
  pub visuals: &'a mut CharacterVisuals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JumpStateMachine {
  config: JumpConfig,
  charge: ChargeState,
  walled: bool,
}

impl JumpStateMachine {
  pub fn new(config: JumpConfig) -> Self {
    Self {
      config,
      charge: ChargeState::default(),
      walled: false,
    }
  }

  pub fn config(&self) -> &JumpConfig {
    &self.config
  }

  pub fn retune(&mut self, config: JumpConfig) {
    self.config = config;
  }

  pub fn charge_state(&self) -> ChargeState {
    self.charge
  }

  pub fn is_walled(&self) -> bool {
    self.walled
  }

  /// True while the button is down on the ground and hold time accrues.
  pub fn is_charging(&self) -> bool {
    self.charge.held && !self.charge.buffered
  }

  /// The cast used for ground contact. It follows the body's local down, and
  /// the box turns a quarter while clinging so it lies flat against the wall.
  pub fn ground_cast(&self, body: &impl CharacterBody) -> BoxCast {
    BoxCast {
      origin: body.position(),
      size: Vec2::from(self.config.box_size),
      rotation_degrees: if self.walled { 90.0 } else { 0.0 },
      direction: -body.up(),
      distance: self.config.cast_distance,
      layer_mask: self.config.ground_mask,
    }
  }

  pub fn is_grounded(&self, body: &impl CharacterBody) -> bool {
    body.box_overlap(&self.ground_cast(body))
  }

  pub fn state(&self, body: &impl CharacterBody) -> JumpState {
    if self.walled {
      JumpState::Walled
    } else if self.is_grounded(body) {
      JumpState::Grounded
    } else {
      JumpState::Airborne
    }
  }

  /// Seconds the current charge has been held at `now`, unclamped.
  pub fn held_time(&self, now: f32) -> f32 {
    self.charge.held_since.map_or(0.0, |start| now - start)
  }

  pub fn on_press(&mut self, ctx: &mut JumpContext<'_>, body: &impl CharacterBody) {
    self.charge.held = true;

    if self.is_grounded(body) {
      self.charge.held_since = Some(ctx.now);
      self.charge.buffered = false;
      debug!("Jump charge started at {:.3}", ctx.now);
    } else {
      self.charge.held_since = None;
      self.charge.buffered = true;
      debug!("Jump buffered in the air at {:.3}", ctx.now);
    }

    ctx.visuals.flags.preparing = true;
  }

  /// Releases the jump. Returns the launch if one was applied.
  pub fn on_release(
    &mut self,
    ctx: &mut JumpContext<'_>,
    body: &mut impl CharacterBody,
  ) -> Option<LaunchVector> {
    self.charge.held = false;
    ctx.visuals.flags.preparing = false;
    ctx.visuals.flags.jumping = true;

    if !self.is_grounded(&*body) {
      debug!("Jump released in the air, ignored");
      return None;
    }

    // Facing must be read before leaving a wall changes the sprite.
    let launch = LaunchVector::new(
      self.config.power(self.held_time(ctx.now)),
      ctx.aim.effective_angle(ctx.orientation),
    );
    body.set_velocity(body.velocity() + launch.impulse);

    self.charge.held_since = None;
    self.charge.buffered = false;

    if self.walled {
      self.jump_off_wall(ctx, body);
    }

    ctx.visuals.indicator_step = ctx.charge.step(None, ctx.now);

    debug!(
      "Jump launched: power={:.2}, angle={:.1}, impulse={:?}",
      launch.power, launch.angle_degrees, launch.impulse
    );
    Some(launch)
  }

  /// Clings to a wall when `layer` is on the wall layer. Returns whether the
  /// contact was taken.
  pub fn on_wall_contact(
    &mut self,
    layer: u32,
    ctx: &mut JumpContext<'_>,
    body: &mut impl CharacterBody,
  ) -> bool {
    if layer & self.config.wall_layer == 0 {
      return false;
    }

    let side = if ctx.orientation.is_flipped() { 1.0 } else { -1.0 };

    self.walled = true;
    body.set_rotation_degrees(side * 90.0);
    body.set_gravity_scale(0.0);
    ctx.orientation.toggle_flip();
    ctx.orientation.flip_arrow(ctx.visuals);

    debug!("Clinging to wall, rotation={}", side * 90.0);
    true
  }

  /// Leaves the wall. The logical mirror flag keeps the value wall contact set,
  /// only the sprite is flipped back.
  fn jump_off_wall(&mut self, ctx: &mut JumpContext<'_>, body: &mut impl CharacterBody) {
    self.walled = false;
    body.set_rotation_degrees(0.0);
    body.set_gravity_scale(self.config.gravity_scale);
    ctx.orientation.flip_sprite(ctx.visuals);
    debug!("Jumped off wall");
  }

  /// Frame update: animation flags, buffered landing and the charge indicator.
  pub fn per_frame_update(&mut self, ctx: &mut JumpContext<'_>, body: &impl CharacterBody) {
    let flags = &mut ctx.visuals.flags;

    if self.is_grounded(body) {
      flags.falling = false;
      flags.jumping = false;

      if self.charge.buffered {
        self.charge.held_since = Some(ctx.now);
        self.charge.buffered = false;
        debug!("Landed with a buffered jump, charging from {:.3}", ctx.now);
      }
    } else {
      let vertical = body.velocity().y;
      // Exactly zero keeps whatever the flags were.
      if vertical > 0.0 {
        flags.jumping = true;
        flags.falling = false;
      }
      if vertical < 0.0 {
        flags.jumping = false;
        flags.falling = true;
      }
    }

    if self.is_charging() {
      let step = ctx.charge.step(self.charge.held_since, ctx.now);
      if step != ctx.visuals.indicator_step {
        trace!("Charge step {}", step);
      }
      ctx.visuals.indicator_step = step;
    }
  }
}
