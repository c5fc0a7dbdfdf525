//! Common traits defining interfaces for boundary geometries

use nalgebra::Vector2;

use crate::common::types::{BoundingBox2D, Point2D, Segment2D, WindingOrder};
use crate::utils::Visualizer;

/// Capability set of an immutable simple closed boundary
///
/// Both the wall boundary and the derived configuration space answer the
/// same queries; the movement engine is written against this trait so it
/// works with either.
pub trait ConfigurationGeometry {
    /// Boundary vertices in boundary order
    fn vertices(&self) -> &[Point2D];

    /// Boundary edges in boundary order
    fn edges(&self) -> &[Segment2D];

    /// Winding order of the boundary
    fn orientation(&self) -> WindingOrder;

    /// Axis-aligned bounding box of the boundary
    fn bounding_box(&self) -> BoundingBox2D;

    /// True iff the point lies exactly on an edge or vertex of the boundary
    fn contains_on_boundary(&self, point: Point2D) -> bool;

    /// All points where a ray from `origin` along `direction` crosses the
    /// boundary, excluding `origin` itself, ordered by distance from origin
    fn ray_intersections(&self, origin: Point2D, direction: Vector2<f64>) -> Vec<Point2D>;

    /// Nearest boundary crossing along the ray, if any
    fn first_intersection(&self, origin: Point2D, direction: Vector2<f64>) -> Option<Point2D> {
        self.ray_intersections(origin, direction).into_iter().next()
    }

    /// Draw the boundary into a visualizer; the core never depends on this
    /// being called
    fn render(&self, vis: &mut Visualizer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PolygonBoundary;

    fn unit_square() -> PolygonBoundary {
        PolygonBoundary::create(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_trait_object_queries() {
        let square = unit_square();
        let geometry: &dyn ConfigurationGeometry = &square;
        assert_eq!(geometry.vertices().len(), 4);
        assert_eq!(geometry.edges().len(), 4);
        assert_eq!(geometry.orientation(), WindingOrder::CounterClockwise);
        assert!(geometry.contains_on_boundary(Point2D::new(0.5, 0.0)));
        assert!(!geometry.contains_on_boundary(Point2D::new(0.5, 0.5)));
    }

    #[test]
    fn test_first_intersection_default_impl() {
        let square = unit_square();
        let geometry: &dyn ConfigurationGeometry = &square;
        let hit = geometry.first_intersection(
            Point2D::new(0.5, 0.0),
            Vector2::new(0.0, 1.0),
        );
        assert!(hit.is_some());
        let hit = hit.unwrap();
        assert!(hit.approx_eq(&Point2D::new(0.5, 1.0), 1e-9));
    }
}
