//! Loading and validation of the game config file.
//!
//! Run: cargo test --test config_load

use std::io::Write;
use std::path::PathBuf;

use froggy::config::{ConfigError, GameConfig};
use froggy::player::froggy::Froggy;

fn shipped_config_path() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/config/froggy.config.toml")
}

fn shipped_config_text() -> String {
  std::fs::read_to_string(shipped_config_path()).expect("shipped config is readable")
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
  let mut file = tempfile::NamedTempFile::new().expect("create temp file");
  file
    .write_all(contents.as_bytes())
    .expect("write temp config");
  file
}

#[test]
fn shipped_config_loads() {
  let config = GameConfig::load(shipped_config_path()).expect("shipped config is valid");

  assert_eq!(config.jump.min_power, 2.0);
  assert_eq!(config.jump.multiplier, 2.0);
  assert_eq!(config.aim.max_angle, 55);
  assert_eq!(config.charge.steps, 8);
  assert_eq!(config.player.indicator_sprites.len(), 9);
  assert!(config.level.platforms.iter().any(|p| p.wall));
}

#[test]
fn shipped_config_builds_a_froggy() {
  let config = GameConfig::load(shipped_config_path()).expect("shipped config is valid");
  let froggy = Froggy::new(&config.tuning());

  assert_eq!(froggy.aim().angle(), 0);
  assert_eq!(froggy.effective_angle(), 90.0);
  assert_eq!(froggy.visuals().sprite_scale.x, config.player.sprite_scale);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
  let text = shipped_config_text();
  let trimmed = text.replace("[trajectory]\nsteps = 50\ntime_step = 0.05\n", "");
  assert_ne!(text, trimmed, "fixture no longer contains the trajectory block");

  let config = GameConfig::from_toml_str(&trimmed).expect("defaults fill the gap");
  assert_eq!(config.trajectory.steps, 50);
  assert_eq!(config.trajectory.time_step, 0.05);
}

#[test]
fn rejects_zero_charge_steps() {
  let text = shipped_config_text().replace("steps = 8", "steps = 0");
  let file = write_temp(&text);

  let err = GameConfig::load(file.path()).unwrap_err();
  assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
}

#[test]
fn rejects_non_positive_radius() {
  let text = shipped_config_text().replace("radius = 0.8", "radius = 0.0");
  let file = write_temp(&text);

  let err = GameConfig::load(file.path()).unwrap_err();
  assert!(err.to_string().contains("aim.radius"), "got {err}");
}

#[test]
fn rejects_indicator_sprite_count_mismatch() {
  let text = shipped_config_text().replace("  \"sprites/arrow_8.png\",\n", "");
  let file = write_temp(&text);

  let err = GameConfig::load(file.path()).unwrap_err();
  assert!(err.to_string().contains("indicator_sprites"), "got {err}");
}

#[test]
fn reports_malformed_toml() {
  let file = write_temp("[window\nwidth = ");
  let err = GameConfig::load(file.path()).unwrap_err();
  assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn reports_missing_file() {
  let err = GameConfig::load("does/not/exist.config.toml").unwrap_err();
  assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
}
