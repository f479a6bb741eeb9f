use math::error::MathError;
use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for reconstruction.
pub type ReconstructResult<T> = std::result::Result<T, ReconstructError>;

/// Errors that abort a single reconstruction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(
        "shares interpolate to {numerator}/{denominator}, not an integer"
    )]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("invalid threshold: {0}")]
    InvalidThreshold(usize),
    #[error("invalid share index: {0:?}")]
    InvalidShareIndex(String),
    #[error("invalid share position: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Coarse grouping callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input itself is broken; retrying with the same data cannot help.
    MalformedInput,
    /// The input parsed fine but the chosen shares disagree. Another
    /// subset may still reconstruct.
    InconsistentShares,
}

impl ReconstructError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonIntegerResult { .. } => ErrorKind::InconsistentShares,
            _ => ErrorKind::MalformedInput,
        }
    }

    pub fn is_invalid_digit(&self) -> bool {
        matches!(self, Self::Math(MathError::InvalidDigit { .. }))
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Math(MathError::DivisionByZero))
    }
}
