//! Exact rationals over unbounded integers.

use std::fmt;
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::Serialize;

use crate::error::{MathError, MathResult};

/// A ratio of two big integers with a non-zero denominator.
///
/// Arithmetic does not reduce on its own; call [`Fraction::reduce`] to bring
/// a value into lowest terms. `Add` leaves the sign on the numerator.
///
/// Equality is structural: `1/2` and `2/4` compare unequal until reduced.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Build `numerator / denominator` as given, without reducing.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> MathResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self {
            numerator: numerator.into(),
            denominator,
        })
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Multiply by an integer without building an intermediate fraction.
    pub fn mul_integer(&self, factor: &BigInt) -> Self {
        Self {
            numerator: &self.numerator * factor,
            denominator: self.denominator.clone(),
        }
    }

    /// Divide both parts by their gcd. The result has a positive denominator.
    pub fn reduce(self) -> Self {
        let divisor = self.numerator.gcd(&self.denominator);
        // gcd(0, d) == |d|, so a zero numerator collapses to 0/1.
        Self {
            numerator: self.numerator / &divisor,
            denominator: self.denominator / divisor,
        }
        .normalize_sign()
    }

    /// Move a negative sign from the denominator onto the numerator.
    pub fn normalize_sign(self) -> Self {
        if self.denominator.is_negative() {
            Self {
                numerator: -self.numerator,
                denominator: -self.denominator,
            }
        } else {
            self
        }
    }

    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Exact integer value, or [`MathError::NotAnInteger`].
    pub fn to_integer(&self) -> MathResult<BigInt> {
        if !self.is_integer() {
            let normalized = self.clone().normalize_sign();
            return Err(MathError::NotAnInteger {
                numerator: normalized.numerator.to_string(),
                denominator: normalized.denominator.to_string(),
            });
        }
        Ok(&self.numerator / &self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    /// `a/b + c/d = (a*d + c*b) / (b*d)`
    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction {
            numerator: &self.numerator * &rhs.denominator
                + &rhs.numerator * &self.denominator,
            denominator: &self.denominator * &rhs.denominator,
        }
        .normalize_sign()
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}
