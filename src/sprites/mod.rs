//! Sprites domain: walk-cycle animation state.

mod animation;

pub use animation::WalkCycle;

use bevy::prelude::*;

use crate::sprites::animation::advance_walk_frames;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_walk_frames);
    }
}
