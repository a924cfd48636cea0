//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeoGridError {
    /// A required input was missing, e.g. an empty batch of rings where a center point or an edge is needed.
    #[error("missing required input: {0}")]
    NullArgument(&'static str),

    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),

    /// GeoJSON text could not be parsed.
    #[cfg(feature = "geojson")]
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),
}

/// Result type with [`GeoGridError`] as the error.
pub type Result<T> = std::result::Result<T, GeoGridError>;
