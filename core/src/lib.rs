//! Secret reconstruction from threshold shares by exact Lagrange
//! interpolation at zero.
//!
//! ```
//! use num_bigint::BigInt;
//! use secret_core::{reconstruct_secret, Share, ShareSet};
//!
//! let shares = vec![
//!     Share::decode("1", "4", 10)?,
//!     Share::decode("2", "111", 2)?,
//!     Share::decode("3", "12", 10)?,
//! ];
//! let set = ShareSet::new(3, shares)?;
//! assert_eq!(reconstruct_secret(&set)?, BigInt::from(3));
//! # Ok::<(), secret_core::ReconstructError>(())
//! ```

pub mod basis;
pub mod error;
pub mod interpolate;
pub mod params;
pub mod share;
pub mod traits;

use log::debug;
use num_bigint::BigInt;

pub use error::{ErrorKind, ReconstructError, ReconstructResult};
pub use interpolate::{interpolate, interpolate_at};
pub use share::{Share, ShareSet};
pub use traits::Point;

/// Recover the secret (the polynomial's value at zero) from `share_set`.
///
/// Uses the first `threshold` shares in order. Fails with
/// [`ReconstructError::NonIntegerResult`] when those shares do not describe
/// an integer secret, and with
/// [`MathError::DivisionByZero`](math::MathError::DivisionByZero) when two
/// of them share an index.
pub fn reconstruct_secret(share_set: &ShareSet) -> ReconstructResult<BigInt> {
    debug!(
        "reconstructing from {} of {} shares",
        share_set.threshold(),
        share_set.len()
    );
    let secret = interpolate(share_set.shares(), share_set.threshold())?;
    debug!("reconstructed secret {secret}");
    Ok(secret)
}
