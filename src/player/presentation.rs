//! Copies the frog's presentation state onto sprites and plays the jump sound.

use bevy::{audio::Volume, prelude::*};

use super::components::{
  AimIndicator, FrogSprites, IndicatorSprites, JumpLaunched, JumpSound, Player, PlayerVisual,
};
use super::froggy::Froggy;
use super::visuals::AnimationFlags;

/// Picks the character image for the current animation flags.
pub fn frog_image<'a>(flags: &AnimationFlags, sprites: &'a FrogSprites) -> &'a Handle<Image> {
  if flags.preparing {
    &sprites.preparing
  } else if flags.jumping {
    &sprites.jumping
  } else if flags.falling {
    &sprites.falling
  } else {
    &sprites.idle
  }
}

pub fn sync_player_visual(
  players: Query<(&Froggy, &Children), With<Player>>,
  mut visuals: Query<(&mut Transform, &mut Sprite, &FrogSprites), With<PlayerVisual>>,
) {
  for (froggy, children) in &players {
    let state = froggy.visuals();
    for child in children.iter() {
      let Ok((mut transform, mut sprite, sprites)) = visuals.get_mut(child) else {
        continue;
      };

      let scale = state.sprite_scale.extend(1.0);
      if transform.scale != scale {
        transform.scale = scale;
      }
      let image = frog_image(&state.flags, sprites);
      if sprite.image != *image {
        sprite.image = image.clone();
      }
    }
  }
}

pub fn sync_indicator(
  players: Query<&Froggy, With<Player>>,
  mut indicators: Query<(&AimIndicator, &mut Transform, &mut Sprite, &IndicatorSprites)>,
) {
  for (indicator, mut transform, mut sprite, sprites) in &mut indicators {
    let Ok(froggy) = players.get(indicator.player) else {
      continue;
    };
    let state = froggy.visuals();

    transform.translation = state
      .indicator_pose
      .position
      .extend(transform.translation.z);
    transform.rotation = Quat::from_rotation_z(state.indicator_pose.rotation_degrees.to_radians());
    transform.scale = state.indicator_scale.extend(1.0);

    let last = sprites.0.len().saturating_sub(1);
    if let Some(image) = sprites.0.get(state.indicator_step.min(last)) {
      if sprite.image != *image {
        sprite.image = image.clone();
      }
    }
  }
}

pub fn play_jump_sound(
  mut commands: Commands,
  sound: Option<Res<JumpSound>>,
  mut launched: MessageReader<JumpLaunched>,
) {
  for message in launched.read() {
    let Some(sound) = sound.as_ref() else {
      continue;
    };
    trace!("Jump sound for {:?}", message.entity);
    commands.spawn((
      AudioPlayer::new(sound.clip.clone()),
      PlaybackSettings::DESPAWN.with_volume(Volume::Linear(sound.volume)),
    ));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sprites() -> FrogSprites {
    FrogSprites {
      idle: Handle::default(),
      preparing: Handle::default(),
      jumping: Handle::default(),
      falling: Handle::default(),
    }
  }

  #[test]
  fn preparing_wins_over_motion() {
    let sprites = sprites();
    let flags = AnimationFlags {
      preparing: true,
      jumping: true,
      falling: false,
    };
    assert!(std::ptr::eq(frog_image(&flags, &sprites), &sprites.preparing));
  }

  #[test]
  fn idle_when_no_flag_is_set() {
    let sprites = sprites();
    let flags = AnimationFlags::default();
    assert!(std::ptr::eq(frog_image(&flags, &sprites), &sprites.idle));

    let falling = AnimationFlags {
      falling: true,
      ..Default::default()
    };
    assert!(std::ptr::eq(frog_image(&falling, &sprites), &sprites.falling));
  }
}
