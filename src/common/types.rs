//! Common geometric types used throughout blindbot

use nalgebra::Vector2;

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        self.squared_distance(other).sqrt()
    }

    pub fn squared_distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Translate the point by a vector
    pub fn translate(&self, v: Vector2<f64>) -> Point2D {
        Point2D::new(self.x + v[0], self.y + v[1])
    }

    /// Coordinate-wise equality within a tolerance
    pub fn approx_eq(&self, other: &Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Directed line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2D {
    pub source: Point2D,
    pub target: Point2D,
}

impl Segment2D {
    pub fn new(source: Point2D, target: Point2D) -> Self {
        Self { source, target }
    }

    /// Direction vector from source to target (not normalized)
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.target.x - self.source.x, self.target.y - self.source.y)
    }

    pub fn length(&self) -> f64 {
        self.source.distance(&self.target)
    }

    pub fn squared_length(&self) -> f64 {
        self.source.squared_distance(&self.target)
    }

    pub fn midpoint(&self) -> Point2D {
        Point2D::new(
            (self.source.x + self.target.x) / 2.0,
            (self.source.y + self.target.y) / 2.0,
        )
    }
}

/// Ray with an origin and a direction vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2D {
    pub origin: Point2D,
    pub direction: Vector2<f64>,
}

impl Ray2D {
    pub fn new(origin: Point2D, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// Build a ray from an origin and a heading angle in radians
    pub fn from_heading(origin: Point2D, heading: f64) -> Self {
        Self {
            origin,
            direction: Vector2::new(heading.cos(), heading.sin()),
        }
    }

    /// Point at parameter t along the ray
    pub fn point_at(&self, t: f64) -> Point2D {
        self.origin.translate(self.direction * t)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox2D {
    pub fn from_points(points: &[Point2D]) -> Self {
        let mut bbox = BoundingBox2D {
            xmin: f64::INFINITY,
            xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,
            ymax: f64::NEG_INFINITY,
        };
        for p in points {
            bbox.xmin = bbox.xmin.min(p.x);
            bbox.xmax = bbox.xmax.max(p.x);
            bbox.ymin = bbox.ymin.min(p.y);
            bbox.ymax = bbox.ymax.max(p.y);
        }
        bbox
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Check containment, allowing a tolerance band around the box
    pub fn contains(&self, point: Point2D, tolerance: f64) -> bool {
        point.x >= self.xmin - tolerance
            && point.x <= self.xmax + tolerance
            && point.y >= self.ymin - tolerance
            && point.y <= self.ymax + tolerance
    }
}

/// Winding order of a closed boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn total_length(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points.windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

impl Default for Path2D {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Segment2D> for Path2D {
    fn from(segment: Segment2D) -> Self {
        Self { points: vec![segment.source, segment.target] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.squared_distance(&b), 25.0);
    }

    #[test]
    fn test_segment_vector_and_midpoint() {
        let seg = Segment2D::new(Point2D::new(1.0, 1.0), Point2D::new(5.0, 1.0));
        assert_eq!(seg.to_vector(), Vector2::new(4.0, 0.0));
        assert_eq!(seg.midpoint(), Point2D::new(3.0, 1.0));
        assert_eq!(seg.length(), 4.0);
    }

    #[test]
    fn test_ray_from_heading() {
        let ray = Ray2D::from_heading(Point2D::origin(), 0.0);
        assert!((ray.direction[0] - 1.0).abs() < 1e-12);
        assert!(ray.direction[1].abs() < 1e-12);
        let p = ray.point_at(2.0);
        assert!((p.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounding_box() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ];
        let bbox = BoundingBox2D::from_points(&points);
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 10.0);
        assert!(bbox.contains(Point2D::new(5.0, 5.0), 0.0));
        assert!(!bbox.contains(Point2D::new(11.0, 5.0), 0.0));
        assert!(bbox.contains(Point2D::new(10.5, 5.0), 1.0));
    }

    #[test]
    fn test_path_from_segment() {
        let seg = Segment2D::new(Point2D::new(0.0, 0.0), Point2D::new(0.0, 2.0));
        let path = Path2D::from(seg);
        assert_eq!(path.len(), 2);
        assert_eq!(path.total_length(), 2.0);
    }
}
