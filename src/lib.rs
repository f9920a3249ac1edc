pub mod algebra;
pub mod error;
pub mod geometry;
pub mod scalar;

pub use error::{GeomatError, Result};
pub use scalar::Scalar;
