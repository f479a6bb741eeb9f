//! Exact Lagrange interpolation over big rationals.
//!
//! The weighted basis terms are summed into a single fraction that is
//! reduced after every step, so intermediate sizes track the data rather
//! than growing factorially with `k`.

use log::{debug, trace};
use math::Fraction;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::basis::{basis_term, basis_term_at};
use crate::error::{ReconstructError, ReconstructResult};
use crate::traits::Point;

/// Constant term of the polynomial through the first `k` of `shares`.
///
/// Selection is positional: `shares[..k]` in the order given, with anything
/// after that ignored.
pub fn interpolate<P: Point>(
    shares: &[P],
    k: usize,
) -> ReconstructResult<BigInt> {
    let selected = select(shares, k)?;
    accumulate(selected, |points, j| basis_term(points, j))
}

/// Value at `x` of the polynomial through the first `k` of `shares`.
pub fn interpolate_at<P: Point>(
    shares: &[P],
    k: usize,
    x: &BigInt,
) -> ReconstructResult<BigInt> {
    let selected = select(shares, k)?;
    accumulate(selected, |points, j| basis_term_at(points, j, x))
}

fn select<P: Point>(shares: &[P], k: usize) -> ReconstructResult<&[P]> {
    if k == 0 {
        return Err(ReconstructError::InvalidThreshold(k));
    }
    shares
        .get(..k)
        .ok_or(ReconstructError::InsufficientShares {
            required: k,
            provided: shares.len(),
        })
}

fn accumulate<P, F>(selected: &[P], basis: F) -> ReconstructResult<BigInt>
where
    P: Point,
    F: Fn(&[P], usize) -> ReconstructResult<Fraction>,
{
    debug!("interpolating over {} shares", selected.len());

    let mut acc = Fraction::zero();
    for (j, share) in selected.iter().enumerate() {
        let term = basis(selected, j)?.mul_integer(share.y());
        acc = (&acc + &term).reduce();
        trace!("share {j} (x = {}): accumulator = {acc}", share.x());
    }

    let acc = acc.normalize_sign();
    if !acc.is_integer() {
        let (numerator, denominator) = acc.into_parts();
        return Err(ReconstructError::NonIntegerResult {
            numerator,
            denominator,
        });
    }

    let (numerator, denominator) = acc.into_parts();
    Ok(numerator / denominator)
}
