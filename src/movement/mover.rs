//! Movement domain: the grid-locked move-to-cell state machine.
//!
//! One `GridMover` per controllable actor. Each fixed tick advances the
//! machine by exactly one transition and yields a `StepCommand` for the
//! physics backend; the resolved position is fed back on the next tick.
//! Collision resolution stays entirely on the physics side - the machine
//! only compares requested positions against reached positions.

use bevy::prelude::*;

/// A probe or loop step that fell short of its requested position by more
/// than this distance counts as obstructed.
pub const STEP_EPSILON: f32 = 1e-4;

/// Squared remaining distance at which the target cell counts as reached.
pub const ARRIVE_THRESHOLD_SQ: f32 = 1e-3;

/// Cardinal travel direction for a single-cell move. Diagonals never occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDir {
    pub fn unit(self) -> Vec2 {
        match self {
            MoveDir::Up => Vec2::Y,
            MoveDir::Down => Vec2::NEG_Y,
            MoveDir::Left => Vec2::NEG_X,
            MoveDir::Right => Vec2::X,
        }
    }

    /// Facing code consumed by the animation sink:
    /// 0 down, 1 left, 2 right, 3 up.
    pub fn facing_code(self) -> u8 {
        match self {
            MoveDir::Up => 3,
            MoveDir::Down => 0,
            MoveDir::Left => 1,
            MoveDir::Right => 2,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, MoveDir::Left | MoveDir::Right)
    }
}

/// Raw axis readings captured once per idle tick. Only the sign of each
/// axis is consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub x: f32,
    pub y: f32,
}

impl InputSnapshot {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Collapse the two axes into a single cardinal direction.
    /// A non-zero horizontal reading suppresses the vertical one.
    pub fn direction(&self) -> Option<MoveDir> {
        if self.x > 0.0 {
            Some(MoveDir::Right)
        } else if self.x < 0.0 {
            Some(MoveDir::Left)
        } else if self.y > 0.0 {
            Some(MoveDir::Up)
        } else if self.y < 0.0 {
            Some(MoveDir::Down)
        } else {
            None
        }
    }
}

/// Consumer of the two animation signals. Fire-and-forget, no acknowledgment.
pub trait AnimationSink {
    fn set_moving(&mut self, moving: bool);
    fn set_facing(&mut self, code: u8);
}

/// What the machine asks of the physics backend this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepCommand {
    /// Stand still (zero velocity).
    Hold,
    /// Advance toward `target` by at most `max_distance` before the next
    /// physics step resolves.
    Toward { target: Vec2, max_distance: f32 },
    /// Write the position directly. Only used for the final grid snap.
    Place(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum MoverState {
    #[default]
    Idle,
    /// First bounded step issued; next tick decides whether the actor could
    /// leave its cell at all.
    Probing {
        target: Vec2,
        requested: Vec2,
        dir: MoveDir,
    },
    /// Step loop in flight. `before` is the position held before the step
    /// currently resolving.
    Stepping {
        target: Vec2,
        before: Vec2,
        dir: MoveDir,
    },
    /// Operation finished this tick; input sampling resumes next tick.
    Completing,
}

/// Per-actor grid movement controller.
///
/// Converts raw directional input into discrete single-cell moves with a
/// three-way outcome: immediately blocked (no displacement persists),
/// blocked mid-path (partial sub-cell progress is kept, unsnapped), or
/// reached (travel axis snapped to the grid).
#[derive(Component, Debug)]
pub struct GridMover {
    speed: f32,
    grid_size: f32,
    state: MoverState,
}

impl GridMover {
    /// `speed` and `grid_size` must both be positive; the config layer
    /// rejects anything else before a mover is constructed.
    pub fn new(speed: f32, grid_size: f32) -> Self {
        debug_assert!(speed > 0.0 && grid_size > 0.0);
        Self {
            speed,
            grid_size,
            state: MoverState::Idle,
        }
    }

    /// True while a move-to-cell operation is in flight. Input is only
    /// sampled while this is false.
    pub fn is_moving(&self) -> bool {
        !matches!(self.state, MoverState::Idle)
    }

    /// Advance the machine by one transition.
    ///
    /// `position` is the body position resolved by the last physics step,
    /// `dt` the fixed step duration. Exactly one physics step must resolve
    /// between the returned command and the next call.
    pub fn tick(
        &mut self,
        position: Vec2,
        input: InputSnapshot,
        dt: f32,
        sink: &mut impl AnimationSink,
    ) -> StepCommand {
        let max_step = self.speed * dt;
        match self.state {
            MoverState::Idle => match input.direction() {
                None => {
                    sink.set_moving(false);
                    StepCommand::Hold
                }
                Some(dir) => {
                    sink.set_facing(dir.facing_code());
                    sink.set_moving(true);
                    let target = position + dir.unit() * self.grid_size;
                    let requested = position.move_towards(target, max_step);
                    self.state = MoverState::Probing {
                        target,
                        requested,
                        dir,
                    };
                    StepCommand::Toward {
                        target,
                        max_distance: max_step,
                    }
                }
            },
            MoverState::Probing {
                target,
                requested,
                dir,
            } => {
                if position.distance(requested) > STEP_EPSILON {
                    // Could not leave the cell at all: abort with no
                    // position correction.
                    self.finish(sink);
                    StepCommand::Hold
                } else if (target - position).length_squared() <= ARRIVE_THRESHOLD_SQ {
                    self.finish(sink);
                    StepCommand::Place(self.snapped(position, dir))
                } else {
                    self.state = MoverState::Stepping {
                        target,
                        before: position,
                        dir,
                    };
                    StepCommand::Toward {
                        target,
                        max_distance: max_step,
                    }
                }
            }
            MoverState::Stepping {
                target,
                before,
                dir,
            } => {
                if position.distance(before) < STEP_EPSILON {
                    // Blocked mid-path: keep the partial progress exactly
                    // where physics stopped it, no snap.
                    self.finish(sink);
                    StepCommand::Hold
                } else if (target - position).length_squared() <= ARRIVE_THRESHOLD_SQ {
                    self.finish(sink);
                    StepCommand::Place(self.snapped(position, dir))
                } else {
                    self.state = MoverState::Stepping {
                        target,
                        before: position,
                        dir,
                    };
                    StepCommand::Toward {
                        target,
                        max_distance: max_step,
                    }
                }
            }
            MoverState::Completing => {
                self.state = MoverState::Idle;
                StepCommand::Hold
            }
        }
    }

    fn finish(&mut self, sink: &mut impl AnimationSink) {
        sink.set_moving(false);
        self.state = MoverState::Completing;
    }

    /// Round to the nearest grid multiple, on the travel axis only.
    fn snapped(&self, position: Vec2, dir: MoveDir) -> Vec2 {
        let mut snapped = position;
        if dir.is_horizontal() {
            snapped.x = (position.x / self.grid_size).round() * self.grid_size;
        } else {
            snapped.y = (position.y / self.grid_size).round() * self.grid_size;
        }
        snapped
    }
}
