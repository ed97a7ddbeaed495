//! Movement domain: debug-only test room spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementTuning;
use crate::movement::{GameLayer, Obstacle};

/// Spawn a ring of grid-aligned obstacles around the origin so collision
/// outcomes (probe abort, mid-path block) can be exercised by hand.
pub(crate) fn spawn_test_room(mut commands: Commands, tuning: Res<MovementTuning>) {
    let cell = tuning.grid_size;
    let wall_color = Color::srgb(0.3, 0.3, 0.4);

    let obstacle_layers = CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Actor]);

    // One-cell pillars, all on grid centers
    let pillars = [
        (4, 0),
        (4, 1),
        (-3, 2),
        (0, 3),
        (1, 3),
        (-2, -3),
        (3, -2),
    ];

    for (cx, cy) in pillars {
        commands.spawn((
            Obstacle,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::splat(cell)),
                ..default()
            },
            Transform::from_xyz(cx as f32 * cell, cy as f32 * cell, 0.0),
            RigidBody::Static,
            Collider::rectangle(cell, cell),
            obstacle_layers,
        ));
    }
}
