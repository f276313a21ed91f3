use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{JumpLaunched, Player};
use super::froggy::Froggy;
use super::rapier_body::RapierBody;
use crate::input::{Jump, PlayerInput, action_held};

/// Press and release of the jump button. The frog's own `held` flag is the
/// edge detector, so a press is seen exactly once.
pub fn handle_jump_input(
  time: Res<Time>,
  rapier_context: ReadRapierContext,
  mut players: Query<
    (
      Entity,
      &mut Froggy,
      &Actions<PlayerInput>,
      &mut Transform,
      &mut Velocity,
      &mut GravityScale,
    ),
    With<Player>,
  >,
  jump_states: Query<&ActionState, With<Action<Jump>>>,
  mut launched: MessageWriter<JumpLaunched>,
) {
  let context = rapier_context.single().ok();
  let now = time.elapsed_secs();

  for (entity, mut froggy, actions, mut transform, mut velocity, mut gravity) in &mut players {
    let pressed = action_held(actions, &jump_states);
    if pressed == froggy.jump().charge_state().held {
      continue;
    }

    let mut body = RapierBody::read(entity, context.as_ref(), &transform, &velocity, &gravity);
    if pressed {
      froggy.on_press(now, &body);
    } else if let Some(launch) = froggy.on_release(now, &mut body) {
      launched.write(JumpLaunched { entity, launch });
    }
    body.write_back(&mut transform, &mut velocity, &mut gravity);
  }
}

/// Collision entry against the wall layer makes the frog cling. Colliders
/// without collision groups have no layer and never count as walls.
pub fn detect_wall_contact(
  time: Res<Time>,
  mut collisions: MessageReader<CollisionEvent>,
  groups: Query<&CollisionGroups>,
  mut players: Query<
    (&mut Froggy, &mut Transform, &mut Velocity, &mut GravityScale),
    With<Player>,
  >,
) {
  let now = time.elapsed_secs();

  for event in collisions.read() {
    let CollisionEvent::Started(first, second, _) = *event else {
      continue;
    };

    for (player, other) in [(first, second), (second, first)] {
      let Ok((mut froggy, mut transform, mut velocity, mut gravity)) = players.get_mut(player)
      else {
        continue;
      };
      let layer = groups
        .get(other)
        .map_or(0, |groups| groups.memberships.bits());

      // Clinging never casts, so no physics world is needed here.
      let mut body = RapierBody::read(player, None, &transform, &velocity, &gravity);
      if froggy.on_wall_contact(layer, now, &mut body) {
        body.write_back(&mut transform, &mut velocity, &mut gravity);
      }
    }
  }
}

/// Animation flags, buffered landings and the charge indicator, every frame.
pub fn update_froggy_per_frame(
  time: Res<Time>,
  rapier_context: ReadRapierContext,
  mut players: Query<
    (Entity, &mut Froggy, &Transform, &Velocity, &GravityScale),
    With<Player>,
  >,
) {
  let context = rapier_context.single().ok();
  let now = time.elapsed_secs();

  for (entity, mut froggy, transform, velocity, gravity) in &mut players {
    let body = RapierBody::read(entity, context.as_ref(), transform, velocity, gravity);
    froggy.per_frame_update(now, &body);
  }
}
