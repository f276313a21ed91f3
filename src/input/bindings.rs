use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Flip, Jump, PlayerInput, StopArrow};

pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<Jump>::new(),
          bindings![KeyCode::Space, KeyCode::ArrowUp],
      ),
      (
          Action::<Flip>::new(),
          bindings![KeyCode::KeyF, KeyCode::ArrowDown],
      ),
      (
          Action::<StopArrow>::new(),
          bindings![KeyCode::KeyP],
      ),
  ])
}
