use bevy::{camera::ScalingMode, prelude::*};

use crate::config::ConfigLoaded;
use crate::player::components::Player;

/// Marker component for the game camera
#[derive(Component)]
pub struct GameCamera;

/// Simple orthographic 2D camera setup
pub fn setup_camera(mut commands: Commands, config: Res<ConfigLoaded>) {
  commands.spawn((
    GameCamera,
    Camera2d,
    Camera {
      order: 0,
      clear_color: ClearColorConfig::Custom(Color::srgb(0.55, 0.8, 0.95)),
      ..default()
    },
    Projection::Orthographic(OrthographicProjection {
      near: -1000.0,
      far: 1000.0,
      scale: 1.0,
      viewport_origin: Vec2::new(0.5, 0.5),
      scaling_mode: ScalingMode::AutoMin {
        min_width: config.camera.viewport_width,
        min_height: config.camera.viewport_height,
      },
      area: Rect::default(),
    }),
    Transform::from_xyz(0.0, config.camera.min_y, 0.0),
  ));
}

/// Vertical follow only: the level is one screen wide, so the camera stays
/// centred on x and tracks the frog's height within the configured band.
pub fn camera_follow(
  config: Res<ConfigLoaded>,
  player_query: Query<&Transform, With<Player>>,
  mut camera_query: Query<&mut Transform, (With<GameCamera>, Without<Player>)>,
) {
  let Ok(player) = player_query.single() else {
    return;
  };
  let Ok(mut camera_transform) = camera_query.single_mut() else {
    return;
  };

  camera_transform.translation.x = 0.0;
  camera_transform.translation.y = follow_height(
    player.translation.y,
    config.camera.min_y,
    config.camera.max_y,
  );
}

pub fn follow_height(player_y: f32, min_y: f32, max_y: f32) -> f32 {
  player_y.clamp(min_y, max_y)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn follow_height_clamps_to_band() {
    assert_eq!(follow_height(-3.0, 5.0, 100.0), 5.0);
    assert_eq!(follow_height(42.0, 5.0, 100.0), 42.0);
    assert_eq!(follow_height(250.0, 5.0, 100.0), 100.0);
  }
}
