//! Orientation and on-segment predicates for planar points.
//!
//! Both predicates compare floating-point values exactly. No tolerance band
//! is applied, so near-collinear triples are classified by the sign of the
//! raw cross product.

use super::Point2;

/// Rotational sense of three ordered points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify the turn `a -> b -> c`.
///
/// Evaluates `(b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)`:
/// - `== 0`: [`Orientation::Collinear`]
/// - `> 0`: [`Orientation::Clockwise`]
/// - `< 0`: [`Orientation::CounterClockwise`]
///
/// A NaN value falls through to `CounterClockwise`.
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);

    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Check whether `b` lies inside the closed axis-aligned box spanned by `a` and `c`.
///
/// Collinearity is not checked here; callers pair this with [`orientation`].
pub fn is_on_segment(a: &Point2, b: &Point2, c: &Point2) -> bool {
    in_range(a.x, c.x, b.x) && in_range(a.y, c.y, b.y)
}

#[inline]
fn in_range(a: f64, c: f64, v: f64) -> bool {
    v <= a.max(c) && v >= a.min(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn test_orientation_sign() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 0.0);

        // Left turn is counter-clockwise.
        assert_eq!(orientation(&a, &b, &p(10.0, 10.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(&a, &b, &p(10.0, -10.0)), Orientation::Clockwise);
        assert_eq!(orientation(&a, &b, &p(20.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn test_orientation_degenerate_is_collinear() {
        let a = p(3.0, 3.0);
        assert_eq!(orientation(&a, &a, &p(-7.0, 12.5)), Orientation::Collinear);
        assert_eq!(orientation(&p(1.0, 2.0), &a, &a), Orientation::Collinear);
    }

    #[test]
    fn test_orientation_no_tolerance() {
        // Off the x-axis by far less than any usual epsilon, still not collinear.
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(2.0, 1e-300);
        assert_ne!(orientation(&a, &b, &c), Orientation::Collinear);
    }

    #[test]
    fn test_is_on_segment_inclusive() {
        let a = p(0.0, 0.0);
        let c = p(10.0, 0.0);

        assert!(is_on_segment(&a, &p(0.0, 0.0), &c));
        assert!(is_on_segment(&a, &p(5.0, 0.0), &c));
        assert!(is_on_segment(&a, &p(10.0, 0.0), &c));
        assert!(!is_on_segment(&a, &p(11.0, 0.0), &c));
        assert!(!is_on_segment(&a, &p(5.0, 1.0), &c));
    }

    #[test]
    fn test_is_on_segment_is_bounding_box_only() {
        // (1, 2) is inside the box of (0,0)-(4,4) but not on the diagonal.
        assert!(is_on_segment(&p(0.0, 0.0), &p(1.0, 2.0), &p(4.0, 4.0)));
        // Endpoint order does not matter.
        assert!(is_on_segment(&p(4.0, 4.0), &p(1.0, 2.0), &p(0.0, 0.0)));
    }
}
