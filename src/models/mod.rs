//! Noise and movement models

pub mod rotation;
pub mod movement;

pub use movement::LinearMovementModel;
pub use rotation::{FlatDistribution, MaximumRotationModel, RotationModel};
