use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use froggy::config::{self, ConfigLoaded, GameConfig};

fn main() -> AppExit {
  let config = match GameConfig::load(config::CONFIG_PATH) {
    Ok(config) => config,
    Err(err) => {
      // Logging is not up yet, the plugins that install it need the config.
      eprintln!("froggy: {err}");
      return AppExit::error();
    }
  };

  let mut app = App::new();

  // The aim sweep runs on the fixed schedule.
  app.insert_resource(Time::<Fixed>::from_seconds(config.aim.interval as f64));

  app
    .add_plugins(
      DefaultPlugins
        .set(ImagePlugin::default_nearest())
        .set(WindowPlugin {
          primary_window: Some(Window {
            resolution: WindowResolution::new(config.window.width, config.window.height),
            title: config.window.title.clone(),
            present_mode: PresentMode::AutoVsync,
            ..default()
          }),
          ..default()
        }),
    )
    .insert_resource(ConfigLoaded(config))
    .add_plugins(config::ConfigPlugin)
    .add_plugins(froggy::core::CorePlugin)
    .add_plugins(froggy::input::InputPlugin)
    .add_plugins(froggy::player::PlayerPlugin)
    .add_plugins(froggy::world::WorldPlugin);

  #[cfg(feature = "visual_debug")]
  app.add_plugins(froggy::visual_debug::VisualDebugPlugin);

  app.run()
}
