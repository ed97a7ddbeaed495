//! Movement domain: markers and physics layers for grid locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Grid-walking characters
    Actor,
    /// Static level geometry that blocks movement
    Obstacle,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for static colliders that block grid movement
#[derive(Component, Debug)]
pub struct Obstacle;
