pub mod geometry;
pub mod linestring;
pub mod reference;
pub mod engine;

pub use engine::{find_intersections, IntersectionResult};
pub use linestring::LineString;
pub use reference::{
    load_reference_segments, JsonFileSource, LoadError, LoadResult, ReferenceSegment,
    ReferenceSource,
};

pub fn version() -> &'static str {
    "0.1.0"
}
