use thiserror::Error;

/// Common result type used across this crate.
pub type MathResult<T, E = MathError> = core::result::Result<T, E>;

/// Errors raised by the radix decoder and the exact fraction type.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("base {0} is outside the supported range 2..=16")]
    InvalidBase(u32),
    #[error("digit string is empty")]
    EmptyDigits,
    #[error("division by zero")]
    DivisionByZero,
    #[error("fraction {numerator}/{denominator} is not an integer")]
    NotAnInteger {
        numerator: String,
        denominator: String,
    },
}

pub type Error = MathError;
