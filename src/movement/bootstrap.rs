//! Movement domain: camera and player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementTuning;
use crate::movement::{GameLayer, GridMover, Player};
use crate::sprites::WalkCycle;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the player actor with its physics body and animation sink wired
/// together. A mover without either collaborator never matches the driving
/// system's query, so everything is bundled here.
pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let cell = tuning.grid_size;

    info!(
        "Spawning player: speed={}, grid_size={}",
        tuning.speed, cell
    );

    commands.spawn((
        // Identity & movement
        (
            Player,
            GridMover::new(tuning.speed, cell),
            WalkCycle::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::splat(cell * 0.9)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(cell * 0.9, cell * 0.9),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Actor, [GameLayer::Obstacle]),
        ),
    ));
}
