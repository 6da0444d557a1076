use thiserror::Error;

/// Top-level error type for bubble outline computations.
#[derive(Debug, Error)]
pub enum BubblineError {
    #[error(transparent)]
    InvalidArgument(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Invalid arguments rejected while constructing a bubble parameter set.
///
/// These are never clamped away: they surface before any geometry is computed.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("bubble direction is not set")]
    MissingDirection,

    #[error("parameter {parameter} is not a number")]
    NotANumber { parameter: &'static str },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid dimensions: width = {width}, height = {height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to flattening or stroking an outline.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`BubblineError`].
pub type Result<T> = std::result::Result<T, BubblineError>;
