//! Configuration space: the wall boundary eroded inward by the robot
//! radius
//!
//! The builder uses the per-edge offset strategy: every wall edge is
//! translated along its inward normal by the radius, and cyclically
//! adjacent offset edges are reconnected by intersecting their
//! supporting lines. Supporting lines (not the clipped segments) are
//! used so offset edges that disconnect at reflex vertices still
//! reconnect.

use itertools::Itertools;
use log::debug;
use nalgebra::Vector2;

use crate::common::error::{SpaceError, SpaceResult};
use crate::common::traits::ConfigurationGeometry;
use crate::common::types::{BoundingBox2D, Point2D, Segment2D, WindingOrder};
use crate::geometry::boundary::PolygonBoundary;
use crate::geometry::primitives::{self, inward_normal, line_intersection};
use crate::utils::Visualizer;

/// All valid robot-center positions inside a wall boundary
///
/// Only a `WallBoundary` can construct one; the constructor is crate
/// private and the public path is `WallBoundary::generate_configuration_space`.
#[derive(Debug)]
pub struct ConfigurationSpace {
    boundary: PolygonBoundary,
}

impl ConfigurationSpace {
    pub(crate) fn new(boundary: PolygonBoundary) -> Self {
        Self { boundary }
    }

    /// First boundary edge containing the point, in iteration order
    pub fn edge_through(&self, point: Point2D) -> Option<(usize, Segment2D)> {
        self.boundary.edge_through(point)
    }

    /// Indices of every boundary edge the point lies on
    pub fn edges_through(&self, point: Point2D) -> Vec<usize> {
        self.boundary.edges_through(point)
    }

    pub fn boundary(&self) -> &PolygonBoundary {
        &self.boundary
    }
}

impl ConfigurationGeometry for ConfigurationSpace {
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
        self.boundary.render(vis);
    }
}

/// Erode a wall boundary inward by `radius`, producing the
/// configuration-space boundary oriented counterclockwise
///
/// Pure function of (wall, radius). Failure reasons are distinguished:
/// - `NumericalError`: negative radius, or adjacent offset lines that
///   are parallel where an intersection was required;
/// - `RobotTooLarge`: a reconnected vertex falls outside the wall
///   extent, meaning the erosion is geometrically invalid;
/// - `SpaceTooTight`: the reconnected loop collapses to a degenerate
///   polygon (too few distinct vertices, self-intersecting, collinear).
pub(crate) fn erode_boundary(wall: &PolygonBoundary, radius: f64) -> SpaceResult<PolygonBoundary> {
    if radius < 0.0 || !radius.is_finite() {
        return Err(SpaceError::NumericalError(format!(
            "erosion radius must be finite and non-negative, got {}",
            radius
        )));
    }

    let winding = wall.orientation();
    let offset_edges: Vec<Segment2D> = wall
        .edges()
        .iter()
        .map(|edge| {
            let shift = inward_normal(edge, winding) * radius;
            Segment2D::new(edge.source.translate(shift), edge.target.translate(shift))
        })
        .collect();

    // Reconnect cyclically adjacent offset edges on their supporting lines
    let mut candidate: Vec<Point2D> = Vec::with_capacity(offset_edges.len());
    for (prev, next) in offset_edges.iter().circular_tuple_windows::<(_, _)>() {
        let vertex = line_intersection(
            prev.source,
            prev.to_vector(),
            next.source,
            next.to_vector(),
        )
        .ok_or_else(|| {
            debug!("offset edges parallel, no reconnection vertex");
            SpaceError::NumericalError("adjacent offset edges are parallel".to_string())
        })?;
        candidate.push(vertex);
    }

    // A reconnected vertex outside the wall extent means the erosion
    // pushed past the opposite side of the wall
    let wall_bbox = wall.bounding_box();
    if candidate
        .iter()
        .any(|v| !wall_bbox.contains(*v, primitives::EPS))
    {
        debug!("erosion vertex outside wall extent, robot too large");
        return Err(SpaceError::RobotTooLarge);
    }

    // Collapse consecutive duplicates produced by a tight fit
    let mut distinct: Vec<Point2D> = Vec::with_capacity(candidate.len());
    for vertex in candidate {
        if !distinct
            .last()
            .map(|last| last.approx_eq(&vertex, primitives::EPS))
            .unwrap_or(false)
        {
            distinct.push(vertex);
        }
    }
    while distinct.len() > 1
        && distinct[0].approx_eq(distinct.last().unwrap_or(&distinct[0]), primitives::EPS)
    {
        distinct.pop();
    }
    if distinct.len() <= 2 {
        debug!("erosion collapsed to {} distinct vertices", distinct.len());
        return Err(SpaceError::SpaceTooTight);
    }

    let eroded = PolygonBoundary::create(distinct).map_err(|err| {
        debug!("eroded loop rejected by the construction gate: {}", err);
        SpaceError::SpaceTooTight
    })?;

    // Orientation policy: the configuration space is always counterclockwise
    Ok(match eroded.orientation() {
        WindingOrder::CounterClockwise => eroded,
        WindingOrder::Clockwise => eroded.reversed(),
    })
}
