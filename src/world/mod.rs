mod flag;
mod platforms;

use bevy::prelude::*;
pub use flag::{FlagReached, GoalFlag};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_message::<FlagReached>()
      .add_systems(Startup, (platforms::spawn_platforms, flag::spawn_flag))
      .add_systems(
        Update,
        (flag::detect_flag_contact, flag::tick_flag_timers).chain(),
      );
  }
}
