use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::GravityConfig;
use crate::player::components::Player;
use crate::player::froggy::Froggy;
use crate::player::jump::JumpState;
use crate::player::rapier_body::RapierBody;

/// Frame-by-frame stepping, used to watch the aim sweep and jump transitions
/// one frame at a time.
#[derive(Resource, Debug, Default)]
pub struct FrameStep {
  pub enabled: bool,
  advanced: bool,
}

impl FrameStep {
  /// Applies this frame's keys. Returns whether virtual time runs: always
  /// while stepping is off, and only on the frame of an advance while it is on.
  pub fn apply(&mut self, toggle: bool, advance: bool) -> bool {
    if toggle {
      self.enabled = !self.enabled;
    }
    self.advanced = self.enabled && advance;
    !self.enabled || self.advanced
  }

  pub fn advanced(&self) -> bool {
    self.advanced
  }
}

pub struct VisualDebugPlugin;

impl Plugin for VisualDebugPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<FrameStep>()
      .add_systems(PreUpdate, frame_step_control)
      .add_systems(Update, (report_stepped_froggy, draw_debug_gizmos));
  }
}

/// F5 toggles stepping, Right Arrow advances one frame. The aim sweep runs on
/// fixed time, so it freezes with virtual time and moves only on an advance.
fn frame_step_control(
  keyboard: Res<ButtonInput<KeyCode>>,
  mut frame_step: ResMut<FrameStep>,
  mut time: ResMut<Time<Virtual>>,
) {
  let was_enabled = frame_step.enabled;
  let runs = frame_step.apply(
    keyboard.just_pressed(KeyCode::F5),
    keyboard.just_pressed(KeyCode::ArrowRight),
  );

  if frame_step.enabled != was_enabled {
    info!("Frame stepping {}", if frame_step.enabled { "on" } else { "off" });
  }
  if runs && time.is_paused() {
    time.unpause();
  } else if !runs && !time.is_paused() {
    time.pause();
  }
}

fn report_stepped_froggy(
  frame_step: Res<FrameStep>,
  rapier_context: ReadRapierContext,
  players: Query<(Entity, &Froggy, &Transform, &Velocity, &GravityScale), With<Player>>,
) {
  if !frame_step.advanced() {
    return;
  }
  let context = rapier_context.single().ok();

  for (entity, froggy, transform, velocity, gravity_scale) in &players {
    let body = RapierBody::read(entity, context.as_ref(), transform, velocity, gravity_scale);
    info!(
      "Step: angle={} state={:?} charge={:?} indicator={}",
      froggy.aim().angle(),
      froggy.jump().state(&body),
      froggy.jump().charge_state(),
      froggy.visuals().indicator_step,
    );
  }
}

fn cast_color(state: JumpState) -> Color {
  match state {
    JumpState::Grounded => Color::srgb(0.2, 1.0, 0.2),
    JumpState::Airborne => Color::WHITE,
    JumpState::Walled => Color::srgb(1.0, 0.6, 0.0),
  }
}

/// Ground cast (coloured by jump state), velocity (yellow) and, while charging on the ground,
/// the predicted jump arc (red).
fn draw_debug_gizmos(
  mut gizmos: Gizmos,
  time: Res<Time>,
  gravity: Res<GravityConfig>,
  rapier_context: ReadRapierContext,
  players: Query<(Entity, &Froggy, &Transform, &Velocity, &GravityScale), With<Player>>,
) {
  const VELOCITY_SCALE: f32 = 0.25;

  let context = rapier_context.single().ok();
  let now = time.elapsed_secs();

  for (entity, froggy, transform, velocity, gravity_scale) in &players {
    let body = RapierBody::read(entity, context.as_ref(), transform, velocity, gravity_scale);
    let player_pos = transform.translation.truncate();

    let cast = froggy.jump().ground_cast(&body);
    gizmos.rect_2d(
      Isometry2d::new(
        cast.origin + cast.direction * cast.distance,
        Rot2::degrees(cast.rotation_degrees),
      ),
      cast.size,
      cast_color(froggy.jump().state(&body)),
    );

    if velocity.linvel.length_squared() > 0.01 {
      let velocity_end = player_pos + velocity.linvel * VELOCITY_SCALE;
      gizmos.line_2d(player_pos, velocity_end, Color::srgb(1.0, 1.0, 0.0));
    }

    if let Some(arc) = froggy.trajectory_preview(now, &body, gravity.value) {
      gizmos.linestrip_2d(arc, Color::srgb(1.0, 0.0, 0.0));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn time_runs_freely_until_stepping_is_on() {
    let mut step = FrameStep::default();
    assert!(step.apply(false, true));
    assert!(!step.advanced());

    assert!(!step.apply(true, false));
    assert!(step.enabled);
    assert!(!step.apply(false, false));
  }

  #[test]
  fn advance_runs_exactly_one_frame() {
    let mut step = FrameStep::default();
    step.apply(true, false);

    assert!(step.apply(false, true));
    assert!(step.advanced());
    assert!(!step.apply(false, false));
    assert!(!step.advanced());

    assert!(step.apply(true, false));
    assert!(!step.enabled);
  }
}
