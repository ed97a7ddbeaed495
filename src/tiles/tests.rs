//! Tiles domain: unit tests for one-shot replay timing.

use super::ReplayTile;

#[test]
fn replay_window_is_frames_over_min_speed() {
    let tile = ReplayTile::new(8, 2.0);
    assert_eq!(tile.replay_duration(), 4.0);
}

#[test]
fn trigger_starts_and_timer_clears_playing() {
    let mut tile = ReplayTile::new(4, 2.0);
    assert!(!tile.playing);

    tile.trigger();
    assert!(tile.playing);

    assert!(!tile.tick(1.0));
    assert!(tile.playing);

    // Crosses the 2 second window on this tick.
    assert!(tile.tick(1.5));
    assert!(!tile.playing);
}

#[test]
fn idle_tile_ignores_time() {
    let mut tile = ReplayTile::new(4, 2.0);
    assert!(!tile.tick(10.0));
    assert!(!tile.playing);
}

#[test]
fn retrigger_restarts_the_window() {
    let mut tile = ReplayTile::new(4, 2.0);
    tile.trigger();
    tile.tick(1.5);
    assert!(tile.playing);

    tile.trigger();
    // A fresh 2 second window: 1.5s in, still playing.
    assert!(!tile.tick(1.5));
    assert!(tile.playing);
    assert!(tile.tick(0.6));
}

#[test]
#[should_panic]
fn zero_min_speed_is_rejected() {
    ReplayTile::new(4, 0.0);
}

#[test]
#[should_panic]
fn zero_frames_is_rejected() {
    ReplayTile::new(0, 2.0);
}
