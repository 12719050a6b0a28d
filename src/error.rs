use thiserror::Error;

/// Top-level error type for the geoedit library.
#[derive(Debug, Error)]
pub enum GeoeditError {
    #[error("invalid feature: {0}")]
    InvalidFeature(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),
}

/// Convenience type alias for results using [`GeoeditError`].
pub type Result<T> = std::result::Result<T, GeoeditError>;
