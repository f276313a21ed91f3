use bevy::prelude::*;

use super::jump::LaunchVector;

/// The physics entity of the frog. Carries the [`super::froggy::Froggy`]
/// state, the rigid body and the input context.
#[derive(Component)]
pub struct Player;

/// Marker for the sprite child that flips and swaps images.
#[derive(Component)]
pub struct PlayerVisual;

/// The aim arrow. Lives at the root so its pose is in world space.
#[derive(Component)]
pub struct AimIndicator {
  pub player: Entity,
}

/// Character images selected by the animation flags.
#[derive(Component, Clone)]
pub struct FrogSprites {
  pub idle: Handle<Image>,
  pub preparing: Handle<Image>,
  pub jumping: Handle<Image>,
  pub falling: Handle<Image>,
}

/// Indicator images, idle first, then one per charge step.
#[derive(Component, Clone, Default)]
pub struct IndicatorSprites(pub Vec<Handle<Image>>);

#[derive(Resource, Clone)]
pub struct JumpSound {
  pub clip: Handle<AudioSource>,
  pub volume: f32,
}

/// Written whenever a release launches the frog.
#[derive(Message, Debug, Clone, Copy)]
pub struct JumpLaunched {
  pub entity: Entity,
  pub launch: LaunchVector,
}
