//! Goal flag: touching it finishes the level after a short delay.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::ConfigLoaded;
use crate::player::components::Player;

#[derive(Component, Debug)]
pub struct GoalFlag {
  /// Runs once the frog has touched the flag.
  pub timer: Option<Timer>,
  pub delay: f32,
  pub reached: bool,
}

impl GoalFlag {
  pub fn new(delay: f32) -> Self {
    Self {
      timer: None,
      delay,
      reached: false,
    }
  }
}

/// Written when the delay after touching the flag runs out.
#[derive(Message, Debug, Clone, Copy)]
pub struct FlagReached {
  pub flag: Entity,
  pub player: Entity,
}

pub fn spawn_flag(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  asset_server: Res<AssetServer>,
) {
  let flag = &config.level.flag;
  commands.spawn((
    GoalFlag::new(flag.delay),
    Sprite {
      image: asset_server.load(&flag.sprite),
      custom_size: Some(Vec2::new(flag.width, flag.height)),
      ..default()
    },
    Transform::from_xyz(flag.x, flag.y, 1.0),
    Collider::cuboid(flag.width / 2.0, flag.height / 2.0),
    Sensor,
  ));
}

/// Starts the flag timer on the first touch by the frog.
pub fn detect_flag_contact(
  mut collisions: MessageReader<CollisionEvent>,
  players: Query<(), With<Player>>,
  mut flags: Query<&mut GoalFlag>,
) {
  for event in collisions.read() {
    let CollisionEvent::Started(first, second, _) = *event else {
      continue;
    };

    for (flag, other) in [(first, second), (second, first)] {
      if !players.contains(other) {
        continue;
      }
      let Ok(mut goal) = flags.get_mut(flag) else {
        continue;
      };
      if goal.timer.is_none() && !goal.reached {
        info!("Flag touched, finishing in {:.1}s", goal.delay);
        goal.timer = Some(Timer::from_seconds(goal.delay, TimerMode::Once));
      }
    }
  }
}

pub fn tick_flag_timers(
  time: Res<Time>,
  players: Query<Entity, With<Player>>,
  mut flags: Query<(Entity, &mut GoalFlag)>,
  mut reached: MessageWriter<FlagReached>,
) {
  for (entity, mut goal) in &mut flags {
    let Some(timer) = goal.timer.as_mut() else {
      continue;
    };
    if !timer.tick(time.delta()).is_finished() {
      continue;
    }

    goal.timer = None;
    goal.reached = true;
    if let Some(player) = players.iter().next() {
      info!("Level complete");
      reached.write(FlagReached {
        flag: entity,
        player,
      });
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use bevy::time::TimeUpdateStrategy;
  use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

  use super::*;

  #[test]
  fn flag_reports_after_delay() {
    let mut app = App::new();
    app
      .add_plugins(MinimalPlugins)
      .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(500)))
      .add_message::<CollisionEvent>()
      .add_message::<FlagReached>()
      .add_systems(Update, (detect_flag_contact, tick_flag_timers).chain());

    let flag = app.world_mut().spawn(GoalFlag::new(2.0)).id();
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(CollisionEvent::Started(
      player,
      flag,
      CollisionEventFlags::SENSOR,
    ));

    let mut seen = Vec::new();
    for _ in 0..8 {
      app.update();
      let messages = app.world().resource::<Messages<FlagReached>>();
      seen.extend(messages.iter_current_update_messages().copied());
    }

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].flag, flag);
    assert_eq!(seen[0].player, player);
    assert!(app.world().get::<GoalFlag>(flag).unwrap().reached);
  }

  #[test]
  fn other_bodies_do_not_trigger_the_flag() {
    let mut app = App::new();
    app
      .add_plugins(MinimalPlugins)
      .add_message::<CollisionEvent>()
      .add_message::<FlagReached>()
      .add_systems(Update, detect_flag_contact);

    let flag = app.world_mut().spawn(GoalFlag::new(2.0)).id();
    let crate_body = app.world_mut().spawn_empty().id();
    app.world_mut().write_message(CollisionEvent::Started(
      crate_body,
      flag,
      CollisionEventFlags::SENSOR,
    ));
    app.update();

    assert!(app.world().get::<GoalFlag>(flag).unwrap().timer.is_none());
  }
}
