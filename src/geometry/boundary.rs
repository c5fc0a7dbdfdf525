//! Immutable simple closed polygonal boundary with containment and
//! ray-intersection queries
//!
//! A `PolygonBoundary` backs both the wall geometry and the derived
//! configuration space. It is constructed once through the validation
//! gate and never mutated afterwards; the bounding box and the edge
//! table are derived caches computed at most once behind `OnceLock`,
//! so a boundary can be shared across threads for read-only queries.

use std::sync::OnceLock;

use nalgebra::Vector2;
use ordered_float::OrderedFloat;

use crate::common::error::{SpaceError, SpaceResult};
use crate::common::traits::ConfigurationGeometry;
use crate::common::types::{BoundingBox2D, Point2D, Ray2D, Segment2D, WindingOrder};
use crate::geometry::primitives::{
    self, all_collinear, is_simple_polygon, point_on_segment, ray_segment_intersection,
    winding_order,
};
use crate::utils::Visualizer;

#[derive(Debug)]
pub struct PolygonBoundary {
    vertices: Vec<Point2D>,
    winding: WindingOrder,
    bounding_box: OnceLock<BoundingBox2D>,
    edge_table: OnceLock<Vec<Segment2D>>,
}

impl PolygonBoundary {
    /// Construction gate for boundary geometry
    ///
    /// Rejects fewer than 3 points, consecutive duplicate points,
    /// self-intersecting loops, and collinear (zero-area) loops. Vertex
    /// order is kept as given, so the orientation is whatever the input
    /// implies; callers must not assume a fixed winding.
    pub fn create(vertices: Vec<Point2D>) -> SpaceResult<Self> {
        if vertices.len() < 3 {
            return Err(SpaceError::DegenerateBoundary(format!(
                "{} points, at least 3 required",
                vertices.len()
            )));
        }
        let n = vertices.len();
        for i in 0..n {
            if vertices[i].approx_eq(&vertices[(i + 1) % n], primitives::EPS) {
                return Err(SpaceError::DegenerateBoundary(
                    "consecutive duplicate points".to_string(),
                ));
            }
        }
        if all_collinear(&vertices) {
            return Err(SpaceError::DegenerateBoundary(
                "all points collinear".to_string(),
            ));
        }
        if !is_simple_polygon(&vertices) {
            return Err(SpaceError::DegenerateBoundary(
                "polygon is self-intersecting".to_string(),
            ));
        }

        let winding = winding_order(&vertices);
        Ok(Self {
            vertices,
            winding,
            bounding_box: OnceLock::new(),
            edge_table: OnceLock::new(),
        })
    }

    /// Same boundary walked in the opposite direction
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        let winding = winding_order(&vertices);
        Self {
            vertices,
            winding,
            bounding_box: OnceLock::new(),
            edge_table: OnceLock::new(),
        }
    }

    /// First edge in iteration order that contains the point, with its
    /// index
    ///
    /// At a shared vertex of two edges this deliberately returns the
    /// first edge found in iteration order; the tie-break is part of the
    /// contract, not hidden nondeterminism.
    pub fn edge_through(&self, point: Point2D) -> Option<(usize, Segment2D)> {
        self.edge_slice()
            .iter()
            .enumerate()
            .find(|(_, edge)| point_on_segment(point, edge))
            .map(|(i, edge)| (i, *edge))
    }

    /// Indices of every edge the point lies on (two at a shared vertex)
    pub fn edges_through(&self, point: Point2D) -> Vec<usize> {
        self.edge_slice()
            .iter()
            .enumerate()
            .filter(|(_, edge)| point_on_segment(point, edge))
            .map(|(i, _)| i)
            .collect()
    }

    fn edge_slice(&self) -> &[Segment2D] {
        self.edge_table.get_or_init(|| {
            let n = self.vertices.len();
            (0..n)
                .map(|i| Segment2D::new(self.vertices[i], self.vertices[(i + 1) % n]))
                .collect()
        })
    }
}

impl ConfigurationGeometry for PolygonBoundary {
    fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    fn edges(&self) -> &[Segment2D] {
        self.edge_slice()
    }

    fn orientation(&self) -> WindingOrder {
        self.winding
    }

    fn bounding_box(&self) -> BoundingBox2D {
        *self
            .bounding_box
            .get_or_init(|| BoundingBox2D::from_points(&self.vertices))
    }

    fn contains_on_boundary(&self, point: Point2D) -> bool {
        if !self.bounding_box().contains(point, primitives::EPS) {
            return false;
        }
        self.edge_slice()
            .iter()
            .any(|edge| point_on_segment(point, edge))
    }

    /// Enumerate all boundary crossings of a ray from `origin` along
    /// `direction`, excluding `origin` itself
    ///
    /// A hit at a shared vertex of two edges is reported once. Behavior
    /// is undefined for a trajectory exactly collinear with an edge.
    fn ray_intersections(&self, origin: Point2D, direction: Vector2<f64>) -> Vec<Point2D> {
        let norm = direction.norm();
        if norm < primitives::EPS {
            return Vec::new();
        }
        let ray = Ray2D::new(origin, direction / norm);

        let mut crossings: Vec<Point2D> = Vec::new();
        for edge in self.edge_slice() {
            if let Some(hit) = ray_segment_intersection(&ray, edge) {
                if hit.approx_eq(&origin, primitives::EPS) {
                    continue;
                }
                if !crossings.iter().any(|c| c.approx_eq(&hit, primitives::EPS)) {
                    crossings.push(hit);
                }
            }
        }
        crossings.sort_by_key(|c| OrderedFloat(origin.squared_distance(c)));
        crossings
    }

    fn render(&self, vis: &mut Visualizer) {
        vis.plot_boundary(&self.vertices, &Default::default());
    }
}
