use bevy::{
  asset::AssetEvent, camera::ScalingMode, ecs::message::MessageReader, prelude::*,
  window::PrimaryWindow,
};
use bevy_common_assets::toml::TomlAssetPlugin;

use super::{CONFIG_ASSET_PATH, ConfigHandle, ConfigLoaded, GameConfig};
use crate::core::GravityConfig;
use crate::player::components::IndicatorSprites;
use crate::player::froggy::Froggy;

/// Expects [`ConfigLoaded`] to be inserted before the app starts.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    // Asset-based copy of the config, only used to hot-reload
    app
      .add_plugins(TomlAssetPlugin::<GameConfig>::new(&["config.toml"]))
      .add_systems(PreStartup, watch_config_file)
      .add_systems(Update, watch_config_changes);

    app.add_systems(
      Update,
      (
        update_window_on_config_change,
        update_gravity_on_config_change,
        update_camera_on_config_change,
        update_fixed_timestep_on_config_change,
        retune_froggy_on_config_change,
        reload_indicator_sprites_on_config_change,
      )
        .after(watch_config_changes),
    );
  }
}

fn watch_config_file(mut commands: Commands, asset_server: Res<AssetServer>) {
  let handle: Handle<GameConfig> = asset_server.load(CONFIG_ASSET_PATH);
  commands.insert_resource(ConfigHandle(handle));
}

fn watch_config_changes(
  mut commands: Commands,
  config_handle: Option<Res<ConfigHandle>>,
  mut messages: MessageReader<AssetEvent<GameConfig>>,
  configs: Res<Assets<GameConfig>>,
) {
  let Some(config_handle) = config_handle else {
    return;
  };

  for event in messages.read() {
    if let AssetEvent::Modified { id } = event {
      if config_handle.0.id() == *id {
        if let Some(config) = configs.get(&config_handle.0) {
          match config.validate() {
            Ok(()) => {
              info!("Config reloaded!");
              commands.insert_resource(ConfigLoaded(config.clone()));
            }
            Err(err) => warn!("Ignoring config reload: {err}"),
          }
        }
      }
    }
  }
}

fn update_window_on_config_change(
  config: Res<ConfigLoaded>,
  mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
  if config.is_changed() {
    if let Ok(mut window) = windows.single_mut() {
      window
        .resolution
        .set(config.window.width as f32, config.window.height as f32);
      window.title.clone_from(&config.window.title);
    }
  }
}

fn update_gravity_on_config_change(config: Res<ConfigLoaded>, mut gravity: ResMut<GravityConfig>) {
  if config.is_changed() && gravity.value != config.physics.gravity {
    gravity.value = config.physics.gravity;
  }
}

fn update_camera_on_config_change(
  config: Res<ConfigLoaded>,
  mut camera_query: Query<&mut Projection, With<Camera2d>>,
) {
  if config.is_changed() {
    for mut projection in camera_query.iter_mut() {
      if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scaling_mode = ScalingMode::AutoMin {
          min_width: config.camera.viewport_width,
          min_height: config.camera.viewport_height,
        };
      }
    }
  }
}

fn retune_froggy_on_config_change(config: Res<ConfigLoaded>, mut frogs: Query<&mut Froggy>) {
  if config.is_changed() && !config.is_added() {
    let tuning = config.tuning();
    for mut froggy in &mut frogs {
      froggy.retune(&tuning);
    }
  }
}

/// The aim sweep ticks once per fixed step.
fn update_fixed_timestep_on_config_change(
  config: Res<ConfigLoaded>,
  mut fixed: ResMut<Time<Fixed>>,
) {
  let interval = config.aim.interval as f64;
  if config.is_changed() && fixed.timestep().as_secs_f64() != interval {
    fixed.set_timestep_seconds(interval);
    debug!("Fixed timestep set to {interval}s");
  }
}

/// A reload may change the charge step count, and with it the arrow images.
fn reload_indicator_sprites_on_config_change(
  config: Res<ConfigLoaded>,
  asset_server: Res<AssetServer>,
  mut indicators: Query<&mut IndicatorSprites>,
) {
  if !config.is_changed() || config.is_added() {
    return;
  }
  for mut sprites in &mut indicators {
    sprites.0 = config
      .player
      .indicator_sprites
      .iter()
      .map(|path| asset_server.load(path))
      .collect();
  }
}
