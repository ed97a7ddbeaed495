//! Movement domain: input snapshot resource.

use bevy::prelude::*;

/// Latest raw axis readings, refreshed every frame in `Update` and consumed
/// by the fixed-tick decision. Only the sign of each axis matters.
#[derive(Resource, Debug, Default)]
pub struct MoveInput {
    pub axis: Vec2,
}
