use math::Fraction;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{ReconstructError, ReconstructResult};
use crate::traits::Point;

/// The `j`-th Lagrange basis polynomial over `points`, evaluated at zero:
/// `prod_{i != j} (-x_i) / (x_j - x_i)`.
///
/// The fraction is returned unreduced. Two points sharing an x-coordinate
/// make the denominator vanish, which surfaces as
/// [`MathError::DivisionByZero`](math::MathError::DivisionByZero).
pub fn basis_term<P: Point>(
    points: &[P],
    j: usize,
) -> ReconstructResult<Fraction> {
    basis_term_at(points, j, &BigInt::zero())
}

/// The `j`-th Lagrange basis polynomial over `points`, evaluated at `x`:
/// `prod_{i != j} (x - x_i) / (x_j - x_i)`.
pub fn basis_term_at<P: Point>(
    points: &[P],
    j: usize,
    x: &BigInt,
) -> ReconstructResult<Fraction> {
    let xj = points
        .get(j)
        .ok_or(ReconstructError::IndexOutOfRange {
            index: j,
            len: points.len(),
        })?
        .x();

    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();
    for (i, point) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        let xi = point.x();
        numerator *= x - xi;
        denominator *= xj - xi;
    }

    Ok(Fraction::new(numerator, denominator)?)
}
