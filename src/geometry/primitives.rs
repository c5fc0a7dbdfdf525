//! Geometric kernel primitives
//!
//! Plain f64 predicates and constructions with explicit tolerances. All
//! higher-level boundary and erosion code funnels its geometry through
//! this module so the tolerance policy lives in one place.

use nalgebra::Vector2;

use crate::common::types::{Point2D, Ray2D, Segment2D, WindingOrder};

/// Tolerance for coincidence tests (point equality, on-segment membership)
pub const EPS: f64 = 1e-9;

/// Margin for the inward-normal dot-product test at boundary features
pub const NORMAL_MARGIN: f64 = 1e-6;

/// Cross product of (a - o) and (b - o)
///
/// Positive when o→a→b turns counterclockwise, negative when clockwise,
/// near zero when collinear.
pub fn cross(o: Point2D, a: Point2D, b: Point2D) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn cross_sign(o: Point2D, a: Point2D, b: Point2D) -> i8 {
    let c = cross(o, a, b);
    if c > EPS {
        1
    } else if c < -EPS {
        -1
    } else {
        0
    }
}

/// True iff `point` lies on `segment` (endpoints included), within EPS
pub fn point_on_segment(point: Point2D, segment: &Segment2D) -> bool {
    let d = segment.to_vector();
    let len2 = segment.squared_length();
    if len2 < EPS * EPS {
        return point.approx_eq(&segment.source, EPS);
    }
    let to_point = Vector2::new(point.x - segment.source.x, point.y - segment.source.y);
    let t = to_point.dot(&d) / len2;
    if t < -EPS || t > 1.0 + EPS {
        return false;
    }
    let closest = segment.source.translate(d * t.clamp(0.0, 1.0));
    point.distance(&closest) <= EPS
}

/// Boolean segment intersection test, including endpoint touches and
/// collinear overlap; used by the polygon simplicity gate
pub fn segments_intersect(a: &Segment2D, b: &Segment2D) -> bool {
    let d1 = cross_sign(b.source, b.target, a.source);
    let d2 = cross_sign(b.source, b.target, a.target);
    let d3 = cross_sign(a.source, a.target, b.source);
    let d4 = cross_sign(a.source, a.target, b.target);

    if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0))
        && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0))
    {
        return true;
    }

    (d1 == 0 && point_on_segment(a.source, b))
        || (d2 == 0 && point_on_segment(a.target, b))
        || (d3 == 0 && point_on_segment(b.source, a))
        || (d4 == 0 && point_on_segment(b.target, a))
}

/// Intersection point of a ray with a segment solved parametrically
///
/// Returns None for a parallel ray; a trajectory exactly collinear with
/// an edge is an explicitly unsupported case and also reports None.
pub fn ray_segment_intersection(ray: &Ray2D, segment: &Segment2D) -> Option<Point2D> {
    let r = ray.direction;
    let s = segment.to_vector();
    let denom = r[0] * s[1] - r[1] * s[0];
    if denom.abs() < EPS {
        return None;
    }
    let qp = Vector2::new(
        segment.source.x - ray.origin.x,
        segment.source.y - ray.origin.y,
    );
    let t = (qp[0] * s[1] - qp[1] * s[0]) / denom;
    let u = (qp[0] * r[1] - qp[1] * r[0]) / denom;
    if t < -EPS || u < -EPS || u > 1.0 + EPS {
        return None;
    }
    Some(ray.point_at(t))
}

/// Intersection of two supporting lines given as point + direction
///
/// Used by the erosion builder, which must tolerate offset edges that
/// disconnect at reflex vertices. None means the lines are parallel.
pub fn line_intersection(
    p1: Point2D,
    d1: Vector2<f64>,
    p2: Point2D,
    d2: Vector2<f64>,
) -> Option<Point2D> {
    let denom = d1[0] * d2[1] - d1[1] * d2[0];
    if denom.abs() < EPS {
        return None;
    }
    let qp = Vector2::new(p2.x - p1.x, p2.y - p1.y);
    let t = (qp[0] * d2[1] - qp[1] * d2[0]) / denom;
    Some(p1.translate(d1 * t))
}

/// Shoelace signed area of a vertex loop (positive for counterclockwise)
pub fn signed_area(points: &[Point2D]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

/// Winding order of a vertex loop from the sign of its area
pub fn winding_order(points: &[Point2D]) -> WindingOrder {
    if signed_area(points) >= 0.0 {
        WindingOrder::CounterClockwise
    } else {
        WindingOrder::Clockwise
    }
}

/// True iff every point lies on one line (zero-area degenerate loop)
pub fn all_collinear(points: &[Point2D]) -> bool {
    if points.len() < 3 {
        return true;
    }
    // Pick a baseline from the first point to the farthest other point so
    // duplicate leading points do not mask a genuine turn
    let base = points[0];
    let far = points
        .iter()
        .skip(1)
        .max_by(|a, b| {
            base.squared_distance(a)
                .partial_cmp(&base.squared_distance(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied();
    let far = match far {
        Some(p) if !p.approx_eq(&base, EPS) => p,
        _ => return true,
    };
    points.iter().all(|&p| cross_sign(base, far, p) == 0)
}

/// Simplicity test: no two edges of the closed loop intersect except at
/// shared endpoints of adjacent edges
pub fn is_simple_polygon(points: &[Point2D]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let edges: Vec<Segment2D> = (0..n)
        .map(|i| Segment2D::new(points[i], points[(i + 1) % n]))
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                // Adjacent edges share one vertex; any further containment
                // means a spike folding back onto the previous edge
                let (first, second) = if j == i + 1 { (i, j) } else { (j, i) };
                if point_on_segment(edges[second].target, &edges[first])
                    || point_on_segment(edges[first].source, &edges[second])
                {
                    return false;
                }
            } else if segments_intersect(&edges[i], &edges[j]) {
                return false;
            }
        }
    }
    true
}

/// Unit inward normal of an edge for the given boundary winding
///
/// Rotate the edge direction +90 degrees when the boundary winds
/// counterclockwise, -90 degrees when clockwise.
pub fn inward_normal(edge: &Segment2D, winding: WindingOrder) -> Vector2<f64> {
    let d = edge.to_vector();
    let n = match winding {
        WindingOrder::CounterClockwise => Vector2::new(-d[1], d[0]),
        WindingOrder::Clockwise => Vector2::new(d[1], -d[0]),
    };
    let norm = n.norm();
    if norm < EPS {
        return Vector2::new(0.0, 0.0);
    }
    n / norm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_cross_orientation() {
        let o = Point2D::origin();
        let a = Point2D::new(1.0, 0.0);
        let b = Point2D::new(0.0, 1.0);
        assert!(cross(o, a, b) > 0.0);
        assert!(cross(o, b, a) < 0.0);
        assert_eq!(cross(o, a, Point2D::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_point_on_segment() {
        let seg = Segment2D::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        assert!(point_on_segment(Point2D::new(5.0, 0.0), &seg));
        assert!(point_on_segment(Point2D::new(0.0, 0.0), &seg));
        assert!(point_on_segment(Point2D::new(10.0, 0.0), &seg));
        assert!(!point_on_segment(Point2D::new(5.0, 0.1), &seg));
        assert!(!point_on_segment(Point2D::new(10.1, 0.0), &seg));
    }

    #[test]
    fn test_ray_segment_intersection() {
        let ray = Ray2D::new(Point2D::new(5.0, 5.0), Vector2::new(1.0, 0.0));
        let seg = Segment2D::new(Point2D::new(10.0, 0.0), Point2D::new(10.0, 10.0));
        let p = ray_segment_intersection(&ray, &seg).unwrap();
        assert!(p.approx_eq(&Point2D::new(10.0, 5.0), 1e-9));

        // Parallel ray reports no intersection
        let parallel = Ray2D::new(Point2D::new(5.0, 5.0), Vector2::new(0.0, 1.0));
        assert!(ray_segment_intersection(&parallel, &seg).is_none());

        // The segment is behind the ray origin
        let behind = Ray2D::new(Point2D::new(5.0, 5.0), Vector2::new(-1.0, 0.0));
        assert!(ray_segment_intersection(&behind, &seg).is_none());

        // Touching an endpoint counts
        let corner = Ray2D::new(Point2D::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let p = ray_segment_intersection(&corner, &seg).unwrap();
        assert!(p.approx_eq(&Point2D::new(10.0, 0.0), 1e-9));
    }

    #[test]
    fn test_line_intersection() {
        let p = line_intersection(
            Point2D::new(0.0, 1.0),
            Vector2::new(1.0, 0.0),
            Point2D::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert!(p.approx_eq(&Point2D::new(1.0, 1.0), 1e-9));

        // Parallel lines have no intersection
        assert!(line_intersection(
            Point2D::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
            Vector2::new(1.0, 0.0),
        )
        .is_none());
    }

    #[test]
    fn test_signed_area_and_winding() {
        let ccw = square();
        assert!((signed_area(&ccw) - 100.0).abs() < 1e-9);
        assert_eq!(winding_order(&ccw), WindingOrder::CounterClockwise);

        let cw: Vec<Point2D> = ccw.iter().rev().copied().collect();
        assert!((signed_area(&cw) + 100.0).abs() < 1e-9);
        assert_eq!(winding_order(&cw), WindingOrder::Clockwise);
    }

    #[test]
    fn test_all_collinear() {
        let line = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
        ];
        assert!(all_collinear(&line));
        assert!(!all_collinear(&square()));
    }

    #[test]
    fn test_is_simple_polygon() {
        assert!(is_simple_polygon(&square()));

        // Bowtie self-intersects
        let bowtie = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(0.0, 10.0),
        ];
        assert!(!is_simple_polygon(&bowtie));

        // Concave arrowhead is simple
        let arrowhead = vec![
            Point2D::new(0.0, 20.0),
            Point2D::new(-20.0, -20.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(20.0, -20.0),
        ];
        assert!(is_simple_polygon(&arrowhead));
    }

    #[test]
    fn test_inward_normal() {
        // Bottom edge of a CCW square points the interior upward
        let bottom = Segment2D::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        let n = inward_normal(&bottom, WindingOrder::CounterClockwise);
        assert!((n[0]).abs() < 1e-12);
        assert!((n[1] - 1.0).abs() < 1e-12);

        // Same edge walked in a CW boundary points the interior downward
        let n = inward_normal(&bottom, WindingOrder::Clockwise);
        assert!((n[1] + 1.0).abs() < 1e-12);
    }
}
