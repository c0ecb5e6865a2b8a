//! All-pairs crossing search between a query linestring and the reference set.

use crate::geometry::{line_intersection_point, segments_intersect, Segment2};
use crate::linestring::LineString;
use crate::reference::ReferenceSegment;
use serde::Serialize;

/// One crossing between a reference segment and a query segment.
///
/// `intersection` is `None` when the segments were found to touch but their
/// supporting lines are parallel, so no single point can be solved for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntersectionResult {
    #[serde(rename = "lineID")]
    pub line_id: String,
    pub intersection: Option<[f64; 2]>,
}

impl IntersectionResult {
    pub fn has_point(&self) -> bool {
        self.intersection.is_some()
    }

    pub fn is_finite(&self) -> bool {
        self.intersection
            .map_or(true, |[x, y]| x.is_finite() && y.is_finite())
    }
}

/// Find every crossing between `linestring` and `references`.
///
/// Reference segments are scanned in input order and, for each, the query
/// segments in index order; the output follows that order. A reference that
/// crosses several query segments yields one result per crossing.
pub fn find_intersections(
    linestring: &LineString,
    references: &[ReferenceSegment],
) -> Vec<IntersectionResult> {
    let query: Vec<Segment2> = linestring.segments().collect();
    let mut results = Vec::new();

    for reference in references {
        let line = reference.segment();
        for segment in &query {
            if segments_intersect(&line, segment) {
                results.push(IntersectionResult {
                    line_id: reference.id.clone(),
                    intersection: line_intersection_point(&line, segment).map(Into::into),
                });
            }
        }
    }

    results
}
