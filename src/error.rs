//! Errors for the simulation driver.

use crate::Float;

/// Validation errors returned by [`crate::simulate`] before integration
/// begins. Contract violations (NaN abscissa, dimension mismatch) are not
/// represented here; those abort with a diagnostic instead.
#[derive(Debug, Clone)]
pub enum Error {
    InvalidStepSize(Float),
    InvalidStepCount(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(v) => {
                write!(f, "step size h must be positive and finite (got {})", v)
            }
            Error::InvalidStepCount(v) => {
                write!(f, "trajectory must hold at least one sample (got {})", v)
            }
        }
    }
}

impl std::error::Error for Error {}
