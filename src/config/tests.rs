//! Config domain: unit tests for tuning parsing and validation.

use super::{parse_tuning, MovementTuning};

#[test]
fn parses_well_formed_tuning() {
    let tuning = parse_tuning("(speed: 5.0, grid_size: 0.5)").unwrap();
    assert_eq!(tuning.speed, 5.0);
    assert_eq!(tuning.grid_size, 0.5);
}

#[test]
fn rejects_non_positive_speed() {
    let err = parse_tuning("(speed: 0.0, grid_size: 0.5)").unwrap_err();
    assert!(err.message.contains("speed"));

    let err = parse_tuning("(speed: -3.0, grid_size: 0.5)").unwrap_err();
    assert!(err.message.contains("speed"));
}

#[test]
fn rejects_non_positive_grid_size() {
    let err = parse_tuning("(speed: 5.0, grid_size: 0.0)").unwrap_err();
    assert!(err.message.contains("grid_size"));
}

#[test]
fn rejects_malformed_ron() {
    assert!(parse_tuning("(speed: fast)").is_err());
}

#[test]
fn defaults_are_valid() {
    assert!(MovementTuning::default().validate().is_ok());
}
