//! Movement domain: system modules for grid locomotion.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::drive_grid_movers;
