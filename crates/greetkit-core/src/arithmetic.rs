//! Arithmetic utilities.
//!
//! `add` and `multiply` are generic over the std operator traits, so they
//! work for integers and floats alike. `factorial` is the only fallible
//! operation in the crate.

use std::ops::{Add, Mul};

use tracing::{debug, instrument};

use crate::error::{GreetkitError, GreetkitResult};

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Compute `n!`.
///
/// # Errors
///
/// - [`GreetkitError::InvalidArgument`] when `n` is negative.
/// - [`GreetkitError::Overflow`] when `n > MAX_FACTORIAL_INPUT`.
#[instrument(level = "trace")]
pub fn factorial(n: i64) -> GreetkitResult<u128> {
    let Ok(upper) = u64::try_from(n) else {
        debug!(n, "rejecting negative factorial input");
        return Err(GreetkitError::negative_factorial(n));
    };

    (1..=u128::from(upper))
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| GreetkitError::Overflow {
            operation: "factorial",
            input: n.to_string(),
            ty: "u128",
        })
}
