use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

/// Hold to charge, release to launch.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Jump;

/// Turn around while standing.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Flip;

/// Freeze or resume the aim sweep.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct StopArrow;
