use nalgebra as na;

pub type Point2 = na::Point2<f64>;
pub type Vector2 = na::Vector2<f64>;

/// Tolerance for approximate comparisons. The intersection predicates never
/// use it; they compare against exact zero.
pub const EPSILON: f64 = 1e-6;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

/// A directed 2D segment from `start` to `end`.
///
/// Zero-length segments are allowed; every orientation query against one
/// reports [`Orientation::Collinear`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn from_coords(start: [f64; 2], end: [f64; 2]) -> Self {
        Self::new(start.into(), end.into())
    }

    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }
}

pub mod predicates;
pub use predicates::*;

pub mod intersection;
pub use intersection::*;
