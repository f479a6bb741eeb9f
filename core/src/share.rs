use std::str::FromStr;

use math::radix;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::{ReconstructError, ReconstructResult};
use crate::params::validate_threshold;
use crate::traits::Point;

/// One `(x, y)` point of the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    x: BigInt,
    y: BigInt,
}

impl Share {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Build a share from its textual form: a base-10 index `key` and a
    /// `value` written in `base`.
    pub fn decode(
        key: &str,
        value: &str,
        base: u32,
    ) -> ReconstructResult<Self> {
        let invalid = || ReconstructError::InvalidShareIndex(key.to_owned());
        // `from_str` takes `_` separators; a share index never carries one.
        if key.contains('_') {
            return Err(invalid());
        }
        let x = BigInt::from_str(key.trim()).map_err(|_| invalid())?;
        let y = radix::decode(value, base)?;
        Ok(Self { x, y: y.into() })
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl Point for Share {
    fn x(&self) -> &BigInt {
        &self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

/// Shares in input order together with the threshold `k`.
///
/// Only the first `k` shares take part in reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    threshold: usize,
    shares: Vec<Share>,
    declared_total: Option<usize>,
}

impl ShareSet {
    pub fn new(
        threshold: usize,
        shares: Vec<Share>,
    ) -> ReconstructResult<Self> {
        if threshold == 0 {
            return Err(ReconstructError::InvalidThreshold(threshold));
        }
        if !validate_threshold(threshold, shares.len()) {
            return Err(ReconstructError::InsufficientShares {
                required: threshold,
                provided: shares.len(),
            });
        }

        Ok(Self {
            threshold,
            shares,
            declared_total: None,
        })
    }

    /// Record the share count the producer claimed to have issued.
    pub fn with_declared_total(mut self, total: usize) -> Self {
        self.declared_total = Some(total);
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The shares reconstruction will actually use.
    pub fn selected(&self) -> &[Share] {
        &self.shares[..self.threshold]
    }

    pub fn declared_total(&self) -> Option<usize> {
        self.declared_total
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
