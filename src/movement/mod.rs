//! Movement domain: grid-locked character movement.
//!
//! Raw directional input becomes discrete single-cell moves, animated over
//! fixed ticks against the Avian physics backend, with the final position
//! snapped to the grid unless the move was cut short by an obstacle.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
pub mod mover;
mod resources;
mod systems;

pub use components::{GameLayer, Obstacle, Player};
pub use mover::{AnimationSink, GridMover, InputSnapshot, MoveDir, StepCommand};
pub use resources::MoveInput;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::bootstrap::{setup_camera, spawn_player};
use crate::movement::systems::{drive_grid_movers, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveInput>()
            // Top-down world: no ambient gravity, obstacles do all the blocking.
            .insert_resource(Gravity(Vec2::ZERO))
            .add_systems(Startup, (setup_camera, spawn_player))
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, drive_grid_movers);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
