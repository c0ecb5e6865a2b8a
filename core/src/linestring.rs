//! Query polylines in their GeoJSON `LineString` wire shape.

use crate::geometry::Segment2;
use serde::{Deserialize, Deserializer};

pub const LINESTRING_TYPE: &str = "LineString";

/// An ordered run of vertices. `n` vertices induce `n - 1` segments.
///
/// A field that is absent or `null` takes its empty value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LineString {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Vec<[f64; 2]>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LineString {
    pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            kind: LINESTRING_TYPE.to_string(),
            coordinates,
        }
    }

    /// Whether the `type` tag names a GeoJSON LineString.
    pub fn is_tagged_linestring(&self) -> bool {
        self.kind == LINESTRING_TYPE
    }

    pub fn segment_count(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Consecutive vertex pairs in index order.
    pub fn segments(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.coordinates
            .windows(2)
            .map(|w| Segment2::from_coords(w[0], w[1]))
    }
}
