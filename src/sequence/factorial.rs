//! Exact factorials and division of floats by big integers.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Largest power-of-two step applied per scaling multiplication.
const MAX_SCALE_STEP: u64 = 1000;

/// Compute `n!` exactly.
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// Divide `numerator` by an arbitrary-precision `divisor`.
///
/// When the divisor fits in an `f64` this is a plain division. Beyond
/// `f64::MAX` the divisor is reduced to its leading 64 bits and the quotient
/// is rescaled by the dropped power of two, so the result keeps full `f64`
/// precision until it genuinely underflows.
#[must_use]
pub fn div_big(numerator: f64, divisor: &BigUint) -> f64 {
    if let Some(d) = divisor.to_f64() {
        if d.is_finite() && d != 0.0 {
            return numerator / d;
        }
    }

    let shift = divisor.bits().saturating_sub(64);
    let leading = (divisor >> shift).to_f64().unwrap_or(f64::INFINITY);
    let mut quotient = numerator / leading;
    let mut remaining = shift;
    while remaining > 0 && quotient != 0.0 {
        let step = remaining.min(MAX_SCALE_STEP);
        quotient *= 2f64.powi(-(step as i32));
        remaining -= step;
    }
    quotient
}
