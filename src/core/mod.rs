pub(crate) mod camera;
mod physics;

use bevy::{prelude::*, transform::TransformSystems};
pub use camera::GameCamera;
pub use physics::{GravityConfig, PhysicsPlugin};

pub struct CorePlugin;

impl Plugin for CorePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(PhysicsPlugin)
      .add_systems(Startup, camera::setup_camera)
      .add_systems(
        PostUpdate,
        camera::camera_follow.before(TransformSystems::Propagate),
      );
  }
}
