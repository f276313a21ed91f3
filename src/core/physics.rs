use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;

/// World gravity along Y. Bodies scale it with their own gravity scale.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GravityConfig {
  pub value: f32,
}

impl Default for GravityConfig {
  fn default() -> Self {
    Self { value: -9.81 }
  }
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
      .init_resource::<GravityConfig>()
      .add_systems(Startup, setup_gravity)
      .add_systems(Update, sync_rapier_gravity);
  }
}

fn setup_gravity(mut commands: Commands, config: Option<Res<ConfigLoaded>>) {
  if let Some(config) = config {
    commands.insert_resource(GravityConfig {
      value: config.physics.gravity,
    });
  }
}

/// Rapier owns its own gravity per context; keep it equal to ours.
pub fn sync_rapier_gravity(
  gravity: Res<GravityConfig>,
  mut contexts: Query<&mut RapierConfiguration>,
) {
  let target = Vec2::new(0.0, gravity.value);
  for mut rapier in &mut contexts {
    if rapier.gravity != target {
      rapier.gravity = target;
    }
  }
}
