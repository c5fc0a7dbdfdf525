//! Boundary geometry, wall validation, and configuration-space erosion

pub mod primitives;
pub mod boundary;
pub mod wall;
pub mod config_space;

pub use boundary::PolygonBoundary;
pub use config_space::ConfigurationSpace;
pub use wall::WallBoundary;
