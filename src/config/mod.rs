//! Config domain: RON-backed movement tuning.
//!
//! Loaded once at app assembly and immutable afterwards. A missing file
//! falls back to defaults with a warning; an unparseable file or
//! degenerate values (speed or grid size not positive) are fatal.

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const TUNING_PATH: &str = "assets/data/movement.ron";

/// Movement tuning shared by every grid-walking actor.
#[derive(Resource, Debug, Clone, Copy, Deserialize)]
pub struct MovementTuning {
    /// Travel speed in world units per second.
    pub speed: f32,
    /// Size of one grid cell in world units.
    pub grid_size: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 160.0,
            grid_size: 32.0,
        }
    }
}

impl MovementTuning {
    /// Reject values that would produce degenerate movement (zero-length
    /// steps, division by zero in the grid snap).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if self.grid_size <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        Ok(())
    }
}

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct ConfigError {
    pub file: String,
    pub message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        Self {
            file: TUNING_PATH.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning from RON text.
pub fn parse_tuning(contents: &str) -> Result<MovementTuning, ConfigError> {
    let tuning: MovementTuning = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::invalid(format!("Parse error: {}", e)))?;
    tuning.validate()?;
    Ok(tuning)
}

/// Load tuning from disk. `Ok(None)` means the file does not exist and the
/// caller should fall back to defaults.
fn load_tuning(path: &Path) -> Result<Option<MovementTuning>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|e| ConfigError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })?;
    parse_tuning(&contents).map(Some)
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_tuning(Path::new(TUNING_PATH)) {
            Ok(Some(tuning)) => {
                info!(
                    "Loaded movement tuning: speed={}, grid_size={}",
                    tuning.speed, tuning.grid_size
                );
                tuning
            }
            Ok(None) => {
                warn!("{} not found, using default movement tuning", TUNING_PATH);
                MovementTuning::default()
            }
            // A present-but-broken config is a setup error, not something
            // to limp past with defaults.
            Err(e) => panic!("{}", e),
        };

        app.insert_resource(tuning);
    }
}
