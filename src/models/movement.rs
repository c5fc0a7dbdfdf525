//! Movement query engine
//!
//! Given an origin on a boundary, a heading angle, and the boundary
//! geometry, computes the single next boundary crossing the robot's
//! straight path would reach. Pure query: the only state it drives is
//! the robot position, applied by the caller on success.
//!
//! Explicitly unsupported cases, kept undefined rather than resolved:
//! a trajectory exactly collinear with a boundary edge, and boundaries
//! with holes.

use log::debug;
use ordered_float::OrderedFloat;

use crate::common::error::{SpaceError, SpaceResult};
use crate::common::traits::ConfigurationGeometry;
use crate::common::types::{Point2D, Ray2D, Segment2D, WindingOrder};
use crate::geometry::primitives::{
    self, inward_normal, point_on_segment, ray_segment_intersection,
};

/// Straight-line movement model
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMovementModel;

impl LinearMovementModel {
    pub fn new() -> Self {
        LinearMovementModel
    }

    /// Next boundary crossing reached from `origin` along `heading`
    ///
    /// Fails with `InvalidOrigin` when the origin is not on the boundary,
    /// `InvalidHeading` when the heading points outside the space at the
    /// origin's boundary feature, and `NoIntersection` when no crossing
    /// distinct from the origin exists (defensive; not expected for a
    /// valid interior-pointing heading on a closed boundary).
    pub fn next_position<G: ConfigurationGeometry>(
        &self,
        origin: Point2D,
        heading: f64,
        space: &G,
    ) -> SpaceResult<Point2D> {
        if !space.contains_on_boundary(origin) {
            return Err(SpaceError::InvalidOrigin);
        }

        let ray = Ray2D::from_heading(origin, heading);
        let edges = space.edges();
        let incident: Vec<usize> = edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| point_on_segment(origin, edge))
            .map(|(i, _)| i)
            .collect();

        // The movement direction must point into the space, within a
        // numerical margin for near-tangent headings. On an edge interior
        // that is a half-plane test against the edge's inward normal. At
        // a vertex the admissible cone depends on the corner: the
        // intersection of the two half-planes at a convex corner, their
        // union at a reflex one.
        let winding = space.orientation();
        let points_inward = |i: usize| {
            inward_normal(&edges[i], winding).dot(&ray.direction) >= -primitives::NORMAL_MARGIN
        };
        let admissible = match incident.as_slice() {
            &[i] => points_inward(i),
            &[i, j] => {
                // Incident edges of a simple polygon are adjacent; order
                // them around the shared vertex before classifying it
                let (prev, next) = if j == i + 1 { (i, j) } else { (j, i) };
                let turn =
                    primitives::cross(edges[prev].source, edges[prev].target, edges[next].target);
                let reflex = match winding {
                    WindingOrder::CounterClockwise => turn < -primitives::EPS,
                    WindingOrder::Clockwise => turn > primitives::EPS,
                };
                if reflex {
                    points_inward(prev) || points_inward(next)
                } else {
                    points_inward(prev) && points_inward(next)
                }
            }
            _ => incident.iter().any(|&i| points_inward(i)),
        };
        if !admissible {
            debug!("heading {} points outside the space at {:?}", heading, origin);
            return Err(SpaceError::InvalidHeading);
        }

        // Search every edge the origin does not lie on and keep the
        // crossing closest to the origin
        let endpoint = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| !incident.contains(i))
            .filter_map(|(_, edge)| ray_segment_intersection(&ray, edge))
            .filter(|hit| !hit.approx_eq(&origin, primitives::EPS))
            .min_by_key(|hit| OrderedFloat(origin.squared_distance(hit)));

        match endpoint {
            Some(point) => Ok(point),
            None => {
                debug!("no boundary crossing from {:?} along {}", origin, heading);
                Err(SpaceError::NoIntersection)
            }
        }
    }

    /// Materialize the movement as a straight path from origin to the
    /// crossing point
    ///
    /// A path is well-formed only when the endpoint differs from the
    /// origin and lies on the boundary, which `next_position` enforces.
    pub fn generate_path<G: ConfigurationGeometry>(
        &self,
        origin: Point2D,
        heading: f64,
        space: &G,
    ) -> SpaceResult<Segment2D> {
        let endpoint = self.next_position(origin, heading, space)?;
        if endpoint.approx_eq(&origin, primitives::EPS) {
            return Err(SpaceError::NoIntersection);
        }
        Ok(Segment2D::new(origin, endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::WindingOrder;
    use crate::geometry::{ConfigurationSpace, PolygonBoundary, WallBoundary};
    use std::f64::consts::PI;

    /// Unit-inset square (1,1)-(9,1)-(9,9)-(1,9) from the 10x10 wall
    fn inset_square_space() -> ConfigurationSpace {
        let wall = WallBoundary::create(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ])
        .unwrap();
        let space = wall.generate_configuration_space(1.0).unwrap();
        assert_eq!(space.orientation(), WindingOrder::CounterClockwise);
        space
    }

    #[test]
    fn test_valid_movement_into_interior() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Bottom-edge midpoint, 45 degrees into the interior
        let endpoint = model
            .next_position(Point2D::new(5.0, 1.0), PI / 4.0, &space)
            .unwrap();
        assert!(!endpoint.approx_eq(&Point2D::new(5.0, 1.0), 1e-9));
        assert!(space.contains_on_boundary(endpoint));
        // The 45-degree ray from (5,1) meets the right edge at (9,5)
        assert!(endpoint.approx_eq(&Point2D::new(9.0, 5.0), 1e-9));
    }

    #[test]
    fn test_straight_up_reaches_opposite_edge() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        let endpoint = model
            .next_position(Point2D::new(5.0, 1.0), PI / 2.0, &space)
            .unwrap();
        assert!(endpoint.approx_eq(&Point2D::new(5.0, 9.0), 1e-9));
    }

    #[test]
    fn test_outward_heading_rejected() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Left-edge point, heading away from the interior
        let result = model.next_position(Point2D::new(1.0, 5.0), 3.0 * PI / 4.0, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidHeading);
        // Straight out through the bottom edge
        let result = model.next_position(Point2D::new(5.0, 1.0), -PI / 2.0, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidHeading);
    }

    #[test]
    fn test_origin_off_boundary_rejected() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Interior point
        let result = model.next_position(Point2D::new(5.0, 5.0), PI / 4.0, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidOrigin);
        // Exterior point
        let result = model.next_position(Point2D::new(0.0, 0.0), PI / 4.0, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidOrigin);
    }

    #[test]
    fn test_movement_from_corner_vertex() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Diagonal from the corner crosses to the opposite corner
        let endpoint = model
            .next_position(Point2D::new(1.0, 1.0), PI / 4.0, &space)
            .unwrap();
        assert!(endpoint.approx_eq(&Point2D::new(9.0, 9.0), 1e-9));
    }

    #[test]
    fn test_corner_heading_outside_both_edges_rejected() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Diagonally away from the corner: outside both incident edges
        let result = model.next_position(Point2D::new(1.0, 1.0), 5.0 * PI / 4.0, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidHeading);
    }

    #[test]
    fn test_corner_heading_outside_one_edge_rejected() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Straight down at the bottom-left corner is tangent to the left
        // edge but outside the bottom edge's half-plane; the corner is
        // convex, so the heading must satisfy both incident edges
        let result = model.next_position(Point2D::new(1.0, 1.0), -PI / 2.0, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidHeading);
    }

    #[test]
    fn test_heading_across_notch_rejected() {
        // U-shaped boundary; a heading from the convex corner (7,10)
        // toward the far arm is inward of the top edge but outward of
        // the right arm's inner edge. It would only reach the boundary
        // again by crossing the notch between the arms, so it must be
        // rejected
        let u_shape = PolygonBoundary::create(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(7.0, 10.0),
            Point2D::new(7.0, 3.0),
            Point2D::new(3.0, 3.0),
            Point2D::new(3.0, 10.0),
            Point2D::new(0.0, 10.0),
        ])
        .unwrap();
        let model = LinearMovementModel::new();
        let heading = (-0.1_f64).atan2(-1.0);
        let result = model.next_position(Point2D::new(7.0, 10.0), heading, &u_shape);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidHeading);
    }

    #[test]
    fn test_reflex_vertex_one_sided_heading_accepted() {
        // At a reflex vertex the admissible cone is the union of the two
        // incident half-planes, so a heading inward of only one of them
        // is still valid
        let wall = WallBoundary::create(vec![
            Point2D::new(0.0, 20.0),
            Point2D::new(-20.0, -20.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(20.0, -20.0),
        ])
        .unwrap();
        let space = wall.generate_configuration_space(1.0).unwrap();
        let model = LinearMovementModel::new();

        let reflex = Point2D::new(0.0, 2.0_f64.sqrt());
        assert!(space.contains_on_boundary(reflex));
        // Shallow rightward climb: outward of the left incident edge,
        // inward of the right one
        let heading = 0.2_f64.atan2(1.0);
        let endpoint = model.next_position(reflex, heading, &space).unwrap();
        assert!(space.contains_on_boundary(endpoint));
        assert!(endpoint.x > 0.0);
    }

    #[test]
    fn test_near_tangent_heading_within_margin_accepted() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        // Barely inward of tangent to the bottom edge; the margin keeps
        // this admissible and the ray still crosses the right edge
        let heading = 1e-7;
        let result = model.next_position(Point2D::new(5.0, 1.0), heading, &space);
        assert!(result.is_ok());
    }

    #[test]
    fn test_movement_postcondition_on_boundary() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        let origin = Point2D::new(5.0, 1.0);
        for &heading in &[PI / 6.0, PI / 3.0, PI / 2.0, 2.0 * PI / 3.0] {
            let endpoint = model.next_position(origin, heading, &space).unwrap();
            assert!(space.contains_on_boundary(endpoint), "heading {}", heading);
            assert!(!endpoint.approx_eq(&origin, 1e-9), "heading {}", heading);
        }
    }

    #[test]
    fn test_generate_path() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        let origin = Point2D::new(5.0, 1.0);
        let path = model.generate_path(origin, PI / 2.0, &space).unwrap();
        assert_eq!(path.source, origin);
        assert!(path.target.approx_eq(&Point2D::new(5.0, 9.0), 1e-9));
        assert!((path.length() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_generate_path_invalid_heading_fails() {
        let space = inset_square_space();
        let model = LinearMovementModel::new();
        let result = model.generate_path(Point2D::new(1.0, 5.0), PI, &space);
        assert_eq!(result.unwrap_err(), SpaceError::InvalidHeading);
    }

    #[test]
    fn test_movement_in_concave_space() {
        // Arrowhead wall; movement from a point on the eroded boundary
        let wall = WallBoundary::create(vec![
            Point2D::new(0.0, 20.0),
            Point2D::new(-20.0, -20.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(20.0, -20.0),
        ])
        .unwrap();
        let space = wall.generate_configuration_space(1.0).unwrap();
        let model = LinearMovementModel::new();

        // The reflex vertex of the wall erodes to (0, sqrt(2)); move
        // straight up from it toward the apex side
        let reflex = Point2D::new(0.0, 2.0_f64.sqrt());
        assert!(space.contains_on_boundary(reflex));
        let endpoint = model.next_position(reflex, PI / 2.0, &space).unwrap();
        assert!(space.contains_on_boundary(endpoint));
        assert!(endpoint.y > reflex.y);
    }
}
