use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{
  AimIndicator, FrogSprites, IndicatorSprites, JumpSound, Player, PlayerVisual,
};
use super::froggy::Froggy;
use crate::config::{ConfigLoaded, GameConfig};
use crate::input::{PlayerInput, player_input_actions};

/// Dynamic body with locked rotation: the frog is only ever turned by the
/// wall transitions writing its transform.
fn physics_bundle(config: &GameConfig) -> impl Bundle {
  let player = &config.player;
  (
    RigidBody::Dynamic,
    Collider::cuboid(player.collider_half_width, player.collider_half_height),
    LockedAxes::ROTATION_LOCKED,
    Velocity::zero(),
    GravityScale(config.jump.gravity_scale),
    ActiveEvents::COLLISION_EVENTS,
    CollisionGroups::new(Group::from_bits_truncate(player.layer), Group::ALL),
    Ccd::enabled(),
  )
}

pub fn spawn_player(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  asset_server: Res<AssetServer>,
) {
  let player = &config.player;
  let spawn_pos = Vec3::new(player.spawn_x, player.spawn_y, 0.0);

  let sprites = FrogSprites {
    idle: asset_server.load(&player.sprites.idle),
    preparing: asset_server.load(&player.sprites.preparing),
    jumping: asset_server.load(&player.sprites.jumping),
    falling: asset_server.load(&player.sprites.falling),
  };
  let indicator_sprites = IndicatorSprites(
    player
      .indicator_sprites
      .iter()
      .map(|path| asset_server.load(path))
      .collect(),
  );

  let froggy = Froggy::new(&config.tuning());
  let sprite_scale = froggy.visuals().sprite_scale.extend(1.0);

  let entity = commands
    .spawn((
      Player,
      froggy,
      Transform::from_translation(spawn_pos),
      Visibility::default(),
      physics_bundle(&config),
      PlayerInput,
      player_input_actions(),
      children![(
        PlayerVisual,
        Sprite {
          image: sprites.idle.clone(),
          ..default()
        },
        sprites,
        Transform::from_scale(sprite_scale),
      )],
    ))
    .id();

  commands.spawn((
    AimIndicator { player: entity },
    Sprite {
      image: indicator_sprites.0.first().cloned().unwrap_or_default(),
      ..default()
    },
    indicator_sprites,
    Transform::from_translation(spawn_pos.with_z(10.0)),
  ));

  commands.insert_resource(JumpSound {
    clip: asset_server.load(&config.audio.jump_sound),
    volume: config.audio.volume,
  });

  info!("Spawned froggy at {:?}", spawn_pos);
}
