use thiserror::Error;

/// Top-level error type for the geomat toolkit.
#[derive(Debug, Error)]
pub enum GeomatError {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to vector and matrix arithmetic.
#[derive(Debug, Error)]
pub enum AlgebraError {
    #[error("division by a near-zero scalar")]
    DivisionByZero,

    #[error("matrix is singular")]
    SingularMatrix,

    #[error("projective transform produced a near-zero homogeneous coordinate")]
    ProjectiveDivide,
}

/// Errors related to geometric queries and constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("slope of a vertical direction is undefined")]
    VerticalSlope,
}

/// Errors produced while reading persisted geometry text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected} coordinates, found {found}")]
    CoordinateCount { expected: usize, found: usize },

    #[error("invalid coordinate: {token:?}")]
    InvalidCoordinate { token: String },
}

/// Convenience type alias for results using [`GeomatError`].
pub type Result<T> = std::result::Result<T, GeomatError>;
