pub mod aim;
mod aiming;
pub mod body;
pub mod charge;
pub mod components;
pub mod froggy;
pub mod jump;
mod jumping;
pub mod orientation;
mod presentation;
pub mod rapier_body;
mod spawn;
pub mod trajectory;
pub mod visuals;


use bevy::prelude::*;

use self::components::JumpLaunched;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_message::<JumpLaunched>()
      .add_systems(Startup, spawn::spawn_player)
      // FixedUpdate: the aim sweep runs on its own cadence
      .add_systems(FixedUpdate, aiming::tick_aim)
      // Update: discrete events first, then the per-frame sync reads their
      // results in the same frame
      .add_systems(
        Update,
        (
          jumping::detect_wall_contact,
          aiming::handle_flip_input,
          aiming::handle_stop_arrow_input,
          jumping::handle_jump_input,
          jumping::update_froggy_per_frame,
        )
          .chain()
          .in_set(FroggySystems::Simulate),
      )
      .add_systems(
        Update,
        (
          presentation::sync_player_visual,
          presentation::sync_indicator,
          presentation::play_jump_sound,
        )
          .in_set(FroggySystems::Present)
          .after(FroggySystems::Simulate),
      );
  }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FroggySystems {
  Simulate,
  Present,
}
