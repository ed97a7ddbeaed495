//! Tiles domain: trigger-based one-shot tile animation replay.
//!
//! An animated tile normally sits on its first frame. A trigger message
//! starts one playback pass; after `frame_count / min_speed` seconds the
//! playing flag clears again so the tile can be re-triggered.

#[cfg(test)]
mod tests;

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Component describing a re-playable animated tile.
#[derive(Component, Debug)]
pub struct ReplayTile {
    /// Number of frames in the tile animation.
    pub frame_count: u32,
    /// Slowest playback speed in frames per second; the replay window is
    /// sized for it so the animation always finishes before the reset.
    pub min_speed: f32,
    /// True while a one-shot playback is running.
    pub playing: bool,
    /// Seconds left until the playing flag resets.
    remaining: f32,
}

impl ReplayTile {
    /// A tile needs at least one frame and a positive playback speed;
    /// anything else would produce a zero or negative replay window.
    pub fn new(frame_count: u32, min_speed: f32) -> Self {
        assert!(frame_count >= 1, "replay tile needs at least one frame");
        assert!(min_speed > 0.0, "replay tile needs a positive min speed");
        Self {
            frame_count,
            min_speed,
            playing: false,
            remaining: 0.0,
        }
    }

    /// Full playback duration in seconds.
    pub fn replay_duration(&self) -> f32 {
        self.frame_count as f32 / self.min_speed
    }

    /// Start (or restart) a one-shot playback.
    pub fn trigger(&mut self) {
        self.playing = true;
        self.remaining = self.replay_duration();
    }

    /// Count down the replay window. Returns true on the tick the
    /// playback finishes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.playing = false;
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

/// Message requesting a one-shot replay of a tile.
#[derive(Debug)]
pub struct TriggerTileReplay {
    pub tile: Entity,
}

impl Message for TriggerTileReplay {}

/// Message fired when a tile's replay window ends.
#[derive(Debug)]
pub struct TileReplayFinished {
    pub tile: Entity,
}

impl Message for TileReplayFinished {}

pub struct TilesPlugin;

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TriggerTileReplay>()
            .add_message::<TileReplayFinished>()
            .add_systems(Update, (handle_replay_triggers, update_replay_timers).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_demo_tile)
            .add_systems(Update, dev::trigger_replays_hotkey);
    }
}

#[cfg(feature = "dev-tools")]
mod dev {
    use super::*;

    /// One triggerable tile in the corner of the test room.
    pub(super) fn spawn_demo_tile(mut commands: Commands) {
        commands.spawn((
            ReplayTile::new(6, 2.0),
            Sprite {
                color: Color::srgb(0.4, 0.6, 0.9),
                custom_size: Some(Vec2::splat(24.0)),
                ..default()
            },
            Transform::from_xyz(-160.0, -160.0, 0.0),
        ));
    }

    /// T replays every tile; handy for eyeballing the reset window.
    pub(super) fn trigger_replays_hotkey(
        keyboard: Res<ButtonInput<KeyCode>>,
        tiles: Query<Entity, With<ReplayTile>>,
        mut triggers: MessageWriter<TriggerTileReplay>,
    ) {
        if !keyboard.just_pressed(KeyCode::KeyT) {
            return;
        }
        for tile in &tiles {
            triggers.write(TriggerTileReplay { tile });
        }
    }
}

fn handle_replay_triggers(
    mut triggers: MessageReader<TriggerTileReplay>,
    mut tiles: Query<&mut ReplayTile>,
) {
    for trigger in triggers.read() {
        let Ok(mut tile) = tiles.get_mut(trigger.tile) else {
            warn!("Replay trigger for entity {:?} without a ReplayTile", trigger.tile);
            continue;
        };
        debug!("Triggering tile replay for {:?}", trigger.tile);
        tile.trigger();
    }
}

fn update_replay_timers(
    time: Res<Time>,
    mut tiles: Query<(Entity, &mut ReplayTile)>,
    mut finished: MessageWriter<TileReplayFinished>,
) {
    let dt = time.delta_secs();
    for (entity, mut tile) in &mut tiles {
        if tile.tick(dt) {
            finished.write(TileReplayFinished { tile: entity });
        }
    }
}
