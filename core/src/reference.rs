//! Loading of the labelled reference segments ("scattered lines").
//!
//! The store is read-only from this crate's point of view. Every call to
//! [`ReferenceSource::load`] reads the backing store afresh.

use crate::geometry::Segment2;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a reference set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Reference set not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read reference set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed reference set: {0}")]
    MalformedData(#[from] serde_json::Error),
}

/// Result type for reference set loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// A segment tagged with an identifier. Identifiers are not required to be
/// unique; each entry is treated independently.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceSegment {
    pub id: String,
    #[serde(rename = "startPoint")]
    pub start_point: [f64; 2],
    #[serde(rename = "endPoint")]
    pub end_point: [f64; 2],
}

impl ReferenceSegment {
    pub fn new(id: impl Into<String>, start_point: [f64; 2], end_point: [f64; 2]) -> Self {
        Self {
            id: id.into(),
            start_point,
            end_point,
        }
    }

    pub fn segment(&self) -> Segment2 {
        Segment2::from_coords(self.start_point, self.end_point)
    }
}

/// A backing store for reference segments.
///
/// Implementations return the full ordered sequence or fail without partial
/// results.
pub trait ReferenceSource: Send + Sync {
    fn load(&self) -> LoadResult<Vec<ReferenceSegment>>;
}

/// Reference set stored as a JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReferenceSource for JsonFileSource {
    fn load(&self) -> LoadResult<Vec<ReferenceSegment>> {
        let data = std::fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(self.path.clone()),
            _ => LoadError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let segments = parse_reference_segments(&data)?;
        tracing::debug!(
            "Loaded {} reference segments from {}",
            segments.len(),
            self.path.display()
        );
        Ok(segments)
    }
}

/// Parse a JSON reference document.
pub fn parse_reference_segments(data: &[u8]) -> LoadResult<Vec<ReferenceSegment>> {
    Ok(serde_json::from_slice(data)?)
}

/// Load the reference set stored at `path`.
pub fn load_reference_segments(path: impl AsRef<Path>) -> LoadResult<Vec<ReferenceSegment>> {
    JsonFileSource::new(path.as_ref()).load()
}
