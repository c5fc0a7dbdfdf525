//! Wall boundary: user-authored impassable environment structure

use log::debug;
use nalgebra::Vector2;
use rand_distr::Distribution;

use crate::common::error::SpaceResult;
use crate::common::traits::ConfigurationGeometry;
use crate::common::types::{BoundingBox2D, Point2D, Segment2D, WindingOrder};
use crate::geometry::boundary::PolygonBoundary;
use crate::geometry::config_space::{erode_boundary, ConfigurationSpace};
use crate::robot::Robot;
use crate::utils::{colors, PathStyle, Visualizer};

/// Simple polygon describing the impassable exterior structure
///
/// Validated once at construction and immutable afterwards. The vertex
/// order is kept as given, so callers must not assume a fixed winding.
#[derive(Debug)]
pub struct WallBoundary {
    boundary: PolygonBoundary,
}

impl WallBoundary {
    /// Validate an ordered point sequence and build the wall
    ///
    /// Rejects fewer than 3 points, self-intersecting loops, and
    /// collinear input, with the reason in the error.
    pub fn create(points: Vec<Point2D>) -> SpaceResult<Self> {
        let boundary = PolygonBoundary::create(points)?;
        Ok(Self { boundary })
    }

    /// Erode the wall inward by `robot_radius`, yielding the space of
    /// valid robot-center positions
    pub fn generate_configuration_space(
        &self,
        robot_radius: f64,
    ) -> SpaceResult<ConfigurationSpace> {
        let eroded = erode_boundary(&self.boundary, robot_radius)?;
        debug!(
            "configuration space built with {} vertices for radius {}",
            eroded.vertices().len(),
            robot_radius
        );
        Ok(ConfigurationSpace::new(eroded))
    }

    /// Robot-coupled form: erode by the robot's radius and install the
    /// result into the robot
    pub fn assign_configuration_space<D: Distribution<f64>>(
        &self,
        robot: &mut Robot<D>,
    ) -> SpaceResult<()> {
        let space = self.generate_configuration_space(robot.radius())?;
        robot.set_configuration_space(space);
        Ok(())
    }
}

impl ConfigurationGeometry for WallBoundary {
    fn vertices(&self) -> &[Point2D] {
        self.boundary.vertices()
    }

    fn edges(&self) -> &[Segment2D] {
        self.boundary.edges()
    }

    fn orientation(&self) -> WindingOrder {
        self.boundary.orientation()
    }

    fn bounding_box(&self) -> BoundingBox2D {
        self.boundary.bounding_box()
    }

    fn contains_on_boundary(&self, point: Point2D) -> bool {
        self.boundary.contains_on_boundary(point)
    }

    fn ray_intersections(&self, origin: Point2D, direction: Vector2<f64>) -> Vec<Point2D> {
        self.boundary.ray_intersections(origin, direction)
    }

    fn render(&self, vis: &mut Visualizer) {
        vis.plot_boundary(
            self.boundary.vertices(),
            &PathStyle::new(colors::WALL, "Wall"),
        );
    }
}
