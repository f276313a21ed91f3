mod error;
mod plugin;

use std::path::Path;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use error::ConfigError;
pub use plugin::ConfigPlugin;
use serde::Deserialize;

use crate::player::aim::AimConfig;
use crate::player::charge::ChargeConfig;
use crate::player::froggy::FroggyTuning;
use crate::player::jump::JumpConfig;
use crate::player::trajectory::TrajectoryConfig;

/// Path of the config file relative to the working directory. The asset
/// server sees the same file as `config/froggy.config.toml`.
pub const CONFIG_PATH: &str = "assets/config/froggy.config.toml";
pub const CONFIG_ASSET_PATH: &str = "config/froggy.config.toml";

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub player: PlayerConfig,
  #[serde(default)]
  pub jump: JumpConfig,
  #[serde(default)]
  pub aim: AimConfig,
  #[serde(default)]
  pub charge: ChargeConfig,
  #[serde(default)]
  pub trajectory: TrajectoryConfig,
  pub level: LevelConfig,
  pub audio: AudioConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub viewport_width: f32,
  pub viewport_height: f32,
  /// Vertical range the camera follows the frog within.
  pub min_y: f32,
  pub max_y: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
  /// World gravity along Y, scaled per body by its gravity scale.
  pub gravity: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub collider_half_width: f32,
  pub collider_half_height: f32,
  /// Collision group the frog belongs to.
  pub layer: u32,
  pub sprite_scale: f32,
  pub sprites: PlayerSprites,
  /// Indicator images, idle first, then one per charge step.
  pub indicator_sprites: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerSprites {
  pub idle: String,
  pub preparing: String,
  pub jumping: String,
  pub falling: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LevelConfig {
  /// Collision group of ordinary ground and platforms.
  pub ground_layer: u32,
  pub color: [f32; 3],
  pub wall_color: [f32; 3],
  pub platforms: Vec<PlatformConfig>,
  pub flag: FlagConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlatformConfig {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
  /// Walls sit on the jump wall layer and make the frog cling.
  #[serde(default)]
  pub wall: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FlagConfig {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
  /// Seconds between touching the flag and the level counting as finished.
  pub delay: f32,
  pub sprite: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AudioConfig {
  pub jump_sound: String,
  pub volume: f32,
}

impl GameConfig {
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
    let config: GameConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml_str(&source)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    self.jump.validate()?;
    self.aim.validate()?;
    self.charge.validate()?;
    self.trajectory.validate()?;

    let expected = self.charge.steps + 1;
    if self.player.indicator_sprites.len() != expected {
      return Err(ConfigError::invalid(format!(
        "player.indicator_sprites needs {} images for {} charge steps, got {}",
        expected,
        self.charge.steps,
        self.player.indicator_sprites.len()
      )));
    }
    if !(self.player.collider_half_width > 0.0 && self.player.collider_half_height > 0.0) {
      return Err(ConfigError::invalid("player collider must have a positive size"));
    }
    if self.camera.min_y > self.camera.max_y {
      return Err(ConfigError::invalid("camera.min_y must not exceed camera.max_y"));
    }
    if self.jump.ground_mask & self.level.ground_layer == 0 {
      return Err(ConfigError::invalid(
        "jump.ground_mask does not include level.ground_layer",
      ));
    }
    if !(self.level.flag.delay >= 0.0) {
      return Err(ConfigError::invalid("level.flag.delay must not be negative"));
    }
    Ok(())
  }

  pub fn tuning(&self) -> FroggyTuning {
    FroggyTuning {
      jump: self.jump.clone(),
      aim: self.aim.clone(),
      charge: self.charge.clone(),
      trajectory: self.trajectory.clone(),
      sprite_scale: self.player.sprite_scale,
    }
  }
}

/// The active, validated configuration.
#[derive(Resource, Debug, Clone, Deref)]
pub struct ConfigLoaded(pub GameConfig);

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);
