//! 2D segment intersection for the crossing engine.

use super::{is_on_segment, orientation, Orientation, Point2, Segment2};

/// Test whether segments `p` and `q` share at least one point.
///
/// The general case is decided by orientation: the segments properly cross
/// when each one separates the endpoints of the other. When one of the four
/// triples is collinear, the middle point is checked against the bounding box
/// of the other segment, which covers touching endpoints and collinear
/// overlap. The box check does not re-verify collinearity, so a point that is
/// box-contained but not on the segment can still be accepted.
pub fn segments_intersect(p: &Segment2, q: &Segment2) -> bool {
    let (p1, p2) = (&p.start, &p.end);
    let (q1, q2) = (&q.start, &q.end);

    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && is_on_segment(p1, q1, p2))
        || (o2 == Orientation::Collinear && is_on_segment(p1, q2, p2))
        || (o3 == Orientation::Collinear && is_on_segment(q1, p1, q2))
        || (o4 == Orientation::Collinear && is_on_segment(q1, p2, q2))
}

/// Intersection of the infinite lines through `p` and `q`.
///
/// Returns `None` when the determinant is exactly zero (parallel or
/// coincident lines). The point is not clamped to either segment.
pub fn line_intersection_point(p: &Segment2, q: &Segment2) -> Option<Point2> {
    let (x1, y1) = (p.start.x, p.start.y);
    let (x2, y2) = (p.end.x, p.end.y);
    let (x3, y3) = (q.start.x, q.start.y);
    let (x4, y4) = (q.end.x, q.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }

    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;

    Some(Point2::new(
        (a * (x3 - x4) - (x1 - x2) * b) / denom,
        (a * (y3 - y4) - (y1 - y2) * b) / denom,
    ))
}
