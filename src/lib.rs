//! blindbot - configuration-space simulation for a circular blind robot
//!
//! The crate derives the set of valid robot-center positions
//! (configuration space) from a polygonal wall boundary and a robot
//! radius by eroding the boundary inward, and answers boundary-crossing
//! movement queries for straight-line motion under rotational noise.
//!
//! Unsupported by design: polygons with holes, multiple robots, moving
//! obstacles, and time-stepped simulation beyond single-step movement
//! queries.

// Core modules
pub mod common;
pub mod utils;

// Geometry and simulation modules
pub mod geometry;
pub mod models;
pub mod robot;

// Re-export the main types for convenience
pub use common::{BoundingBox2D, Path2D, Point2D, Ray2D, Segment2D, WindingOrder};
pub use common::{ConfigurationGeometry, SpaceError, SpaceResult};
pub use geometry::{ConfigurationSpace, PolygonBoundary, WallBoundary};
pub use models::{LinearMovementModel, MaximumRotationModel, RotationModel};
pub use robot::Robot;
