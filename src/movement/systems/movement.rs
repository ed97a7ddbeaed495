//! Movement domain: fixed-tick driver translating mover commands into
//! Avian body writes.
//!
//! Runs in `FixedUpdate`, which Avian schedules ahead of its physics step
//! in `FixedPostUpdate`. That ordering is what gives the mover its
//! contract: exactly one physics step resolves between the command issued
//! here and the `Position` read back on the next tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::mover::{GridMover, InputSnapshot, StepCommand};
use crate::movement::MoveInput;
use crate::sprites::WalkCycle;

pub(crate) fn drive_grid_movers(
    time: Res<Time>,
    input: Res<MoveInput>,
    mut query: Query<(
        &mut GridMover,
        &mut Position,
        &mut LinearVelocity,
        &mut WalkCycle,
    )>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let snapshot = InputSnapshot::new(input.axis.x, input.axis.y);

    for (mut mover, mut position, mut velocity, mut walk) in &mut query {
        match mover.tick(position.0, snapshot, dt, &mut *walk) {
            StepCommand::Hold => {
                velocity.0 = Vec2::ZERO;
            }
            StepCommand::Toward {
                target,
                max_distance,
            } => {
                // A bounded step is a velocity that covers at most
                // `max_distance` over this physics step; the solver stops
                // the body early if an obstacle is in the way.
                let delta = target - position.0;
                let distance = delta.length();
                if distance > f32::EPSILON {
                    let step = distance.min(max_distance);
                    velocity.0 = delta / distance * (step / dt);
                } else {
                    velocity.0 = Vec2::ZERO;
                }
            }
            StepCommand::Place(point) => {
                // Final grid snap: the one direct position write the
                // controller is allowed.
                position.0 = point;
                velocity.0 = Vec2::ZERO;
            }
        }
    }
}
