//! Positional decoding of digit strings in bases 2 through 16.
//!
//! Every base goes through the same big-integer accumulation, so a share
//! value is never squeezed through a machine-word parser on its way in.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{MathError, MathResult};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 16;

fn check_base(base: u32) -> MathResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(MathError::InvalidBase(base))
    }
}

/// Decode `digits` written in `base` into an unbounded unsigned integer.
///
/// Digits are `0-9` and `a-f` (either case); each must be smaller than
/// `base`.
///
/// ```
/// use math::radix::decode;
/// use num_bigint::BigUint;
///
/// assert_eq!(decode("1010", 2).unwrap(), BigUint::from(10u32));
/// assert_eq!(decode("1010", 16).unwrap(), BigUint::from(4112u32));
/// ```
pub fn decode(digits: &str, base: u32) -> MathResult<BigUint> {
    check_base(base)?;
    if digits.is_empty() {
        return Err(MathError::EmptyDigits);
    }

    let mut acc = BigUint::zero();
    for (position, ch) in digits.chars().enumerate() {
        let value = ch.to_digit(base).ok_or(MathError::InvalidDigit {
            digit: ch,
            position,
            base,
        })?;
        acc = acc * base + value;
    }

    Ok(acc)
}

/// Render `value` in `base` with lower-case digits.
pub fn encode(value: &BigUint, base: u32) -> MathResult<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
