pub mod actions;
mod bindings;

pub use actions::{Flip, Jump, PlayerInput, StopArrow};
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
pub use bindings::player_input_actions;

pub struct InputPlugin;

impl Plugin for InputPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(EnhancedInputPlugin)
      .add_input_context::<PlayerInput>();
  }
}

/// Turns a held button into a single trigger per press.
#[derive(Debug, Default, Clone, Copy)]
pub struct PressLatch {
  latched: bool,
}

impl PressLatch {
  /// Returns true only on the first call after the button goes down.
  pub fn rising(&mut self, pressed: bool) -> bool {
    let rising = pressed && !self.latched;
    self.latched = pressed;
    rising
  }
}

/// True if any action of type `A` on `actions` is currently held.
pub fn action_held<A: InputAction>(
  actions: &Actions<PlayerInput>,
  action_states: &Query<&ActionState, With<Action<A>>>,
) -> bool {
  actions.iter().any(|action_entity| {
    action_states
      .get(action_entity)
      .is_ok_and(|state| matches!(state, ActionState::Fired | ActionState::Ongoing))
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn latch_fires_once_per_press() {
    let mut latch = PressLatch::default();
    assert!(!latch.rising(false));
    assert!(latch.rising(true));
    assert!(!latch.rising(true));
    assert!(!latch.rising(true));
    assert!(!latch.rising(false));
    assert!(latch.rising(true));
  }
}
