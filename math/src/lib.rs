//! Arbitrary-precision building blocks: radix decoding and exact fractions.

pub mod error;
pub mod fraction;
pub mod prelude;
pub mod radix;

pub use error::{MathError, MathResult};
pub use fraction::Fraction;
