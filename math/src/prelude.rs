pub use crate::{
    error::{MathError, MathResult},
    fraction::Fraction,
    radix::{decode, encode, MAX_BASE, MIN_BASE},
};
pub use num_bigint::{BigInt, BigUint};
