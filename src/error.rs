use thiserror::Error;

/// Top-level error type for the `lateral` crate.
#[derive(Debug, Error)]
pub enum LateralError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Errors related to vector computations in the local frame.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The normalized vector did not come out with unit length, which means the
    /// two sample points were coincident or nearly so.
    #[error("degenerate vector: normalized length {norm} is not within [0.99, 1.01]")]
    DegenerateVector { norm: f64 },
}

/// Errors related to directed paths and point interpolation along them.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("no point could be interpolated at distance {distance}")]
    Interpolation { distance: f64 },
}

/// Convenience type alias for results using [`LateralError`].
pub type Result<T> = std::result::Result<T, LateralError>;
