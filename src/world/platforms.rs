use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;

/// Spawns ground, platforms and walls. Rapier cuboids use half-extents.
pub fn spawn_platforms(mut commands: Commands, config: Res<ConfigLoaded>) {
  let level = &config.level;

  for platform in &level.platforms {
    let (layer, color) = if platform.wall {
      (config.jump.wall_layer, level.wall_color)
    } else {
      (level.ground_layer, level.color)
    };

    commands.spawn((
      Sprite {
        color: Color::srgb(color[0], color[1], color[2]),
        custom_size: Some(Vec2::new(platform.width, platform.height)),
        ..default()
      },
      Transform::from_xyz(platform.x, platform.y, 0.0),
      RigidBody::Fixed,
      Collider::cuboid(platform.width / 2.0, platform.height / 2.0),
      CollisionGroups::new(Group::from_bits_truncate(layer), Group::ALL),
    ));
  }

  debug!("Spawned {} platforms", level.platforms.len());
}
