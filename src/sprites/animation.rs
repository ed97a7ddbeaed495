//! Walk-cycle playback driven by the movement signals.
//!
//! `WalkCycle` is the animation sink for a grid-walking actor: the mover
//! pushes a facing code and a moving flag into it, and the frame system
//! turns those into a looping walk animation. Which atlas row/index a
//! renderer derives from `facing`/`current_frame` is up to the rendering
//! side.

use bevy::prelude::*;

use crate::movement::AnimationSink;

/// Component holding walk animation state for one actor.
#[derive(Component, Debug)]
pub struct WalkCycle {
    /// Facing code: 0 down, 1 left, 2 right, 3 up.
    pub facing: u8,
    /// Whether the actor is currently walking.
    pub moving: bool,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in the walk loop.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self {
            facing: 0, // down
            moving: false,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
        }
    }
}

impl AnimationSink for WalkCycle {
    fn set_moving(&mut self, moving: bool) {
        if self.moving && !moving {
            // Rest pose when a move finishes.
            self.current_frame = 0;
            self.frame_timer = 0.0;
        }
        self.moving = moving;
    }

    fn set_facing(&mut self, code: u8) {
        if self.facing != code {
            self.facing = code;
            self.current_frame = 0;
            self.frame_timer = 0.0;
        }
    }
}

impl WalkCycle {
    /// Advance the frame timer by `dt`, looping while moving.
    pub fn advance(&mut self, dt: f32) {
        if !self.moving {
            return;
        }

        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.total_frames;
        }
    }
}

/// System that steps walk frames for all actors.
pub(crate) fn advance_walk_frames(time: Res<Time>, mut query: Query<&mut WalkCycle>) {
    let dt = time.delta_secs();
    for mut cycle in &mut query {
        cycle.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_loop_while_moving() {
        let mut cycle = WalkCycle::default();
        cycle.set_moving(true);

        for _ in 0..4 {
            cycle.advance(0.15);
        }
        assert_eq!(cycle.current_frame, 0); // wrapped around

        cycle.advance(0.15);
        assert_eq!(cycle.current_frame, 1);
    }

    #[test]
    fn frames_hold_while_idle() {
        let mut cycle = WalkCycle::default();
        cycle.advance(1.0);
        assert_eq!(cycle.current_frame, 0);
    }

    #[test]
    fn stopping_resets_to_rest_pose() {
        let mut cycle = WalkCycle::default();
        cycle.set_moving(true);
        cycle.advance(0.15);
        assert_eq!(cycle.current_frame, 1);

        cycle.set_moving(false);
        assert_eq!(cycle.current_frame, 0);
        assert!(!cycle.moving);
    }

    #[test]
    fn facing_change_restarts_cycle() {
        let mut cycle = WalkCycle::default();
        cycle.set_moving(true);
        cycle.advance(0.15);

        cycle.set_facing(2);
        assert_eq!(cycle.facing, 2);
        assert_eq!(cycle.current_frame, 0);
    }
}
