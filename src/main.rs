mod config;
mod movement;
mod sprites;
mod tiles;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gridstep".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            config::ConfigPlugin,
            movement::MovementPlugin,
            sprites::SpritesPlugin,
            tiles::TilesPlugin,
        ))
        .run();
}
