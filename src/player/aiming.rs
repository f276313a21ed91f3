use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::Player;
use super::froggy::Froggy;
use super::rapier_body::RapierBody;
use crate::input::{Flip, PlayerInput, PressLatch, StopArrow, action_held};

/// Runs in FixedUpdate: the aim sweeps at a fixed rate whatever the frame rate
/// or the frog is doing.
pub fn tick_aim(mut players: Query<(&mut Froggy, &Transform), With<Player>>) {
  for (mut froggy, transform) in &mut players {
    froggy.tick(transform.translation.truncate());
    trace!("Aim angle {}", froggy.aim().angle());
  }
}

pub fn handle_flip_input(
  rapier_context: ReadRapierContext,
  mut players: Query<
    (
      Entity,
      &mut Froggy,
      &Actions<PlayerInput>,
      &Transform,
      &Velocity,
      &GravityScale,
    ),
    With<Player>,
  >,
  flip_states: Query<&ActionState, With<Action<Flip>>>,
  mut latch: Local<PressLatch>,
) {
  let context = rapier_context.single().ok();

  for (entity, mut froggy, actions, transform, velocity, gravity) in &mut players {
    if !latch.rising(action_held(actions, &flip_states)) {
      continue;
    }
    let body = RapierBody::read(entity, context.as_ref(), transform, velocity, gravity);
    froggy.request_flip(&body);
  }
}

pub fn handle_stop_arrow_input(
  mut players: Query<(&mut Froggy, &Actions<PlayerInput>), With<Player>>,
  stop_states: Query<&ActionState, With<Action<StopArrow>>>,
  mut latch: Local<PressLatch>,
) {
  for (mut froggy, actions) in &mut players {
    if latch.rising(action_held(actions, &stop_states)) {
      froggy.toggle_pause();
    }
  }
}
