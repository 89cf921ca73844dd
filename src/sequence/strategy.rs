//! The two evaluation strategies for F(n).

use std::collections::HashMap;

use num_bigint::BigUint;

use super::factorial::{div_big, factorial};
use crate::error::{LabError, LabResult};

/// Largest index either strategy evaluates.
///
/// |F(n)| roughly doubles per step and overflows `f64` shortly past this
/// index. It also bounds the recursion depth of [`CachedRecursive`].
pub const MAX_SEQUENCE_INDEX: u64 = 1000;

/// Reject indices outside `1..=MAX_SEQUENCE_INDEX`.
fn check_index(n: u64) -> LabResult<()> {
    if n < 1 {
        return Err(LabError::InvalidIndex(n));
    }
    if n > MAX_SEQUENCE_INDEX {
        return Err(LabError::IndexOutOfRange {
            index: n,
            max: MAX_SEQUENCE_INDEX,
        });
    }
    Ok(())
}

/// A way of evaluating F(n).
pub trait SequenceStrategy {
    /// Short human-readable name used in reports.
    fn name(&self) -> &'static str;

    /// Evaluate F(n).
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidIndex` when `n < 1` and
    /// `LabError::IndexOutOfRange` when `n > MAX_SEQUENCE_INDEX`.
    fn value(&mut self, n: u64) -> LabResult<f64>;
}

/// F(n) from F(n-1), F(n-2) and the exact (2n)!.
pub(crate) fn next_value(n: u64, prev: f64, prev2: f64, factorial_2n: &BigUint) -> f64 {
    let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
    sign * (div_big(prev, factorial_2n) - 4.0 * prev2)
}

/// Recursive evaluation with a per-instance memo.
///
/// The cache persists across calls on the same instance, so evaluating
/// F(15) after F(14) only computes one new term. Call [`reset`](Self::reset)
/// to start cold. Recursion depth is proportional to the largest uncached `n`
/// and never exceeds [`MAX_SEQUENCE_INDEX`] frames.
#[derive(Debug, Clone, Default)]
pub struct CachedRecursive {
    cache: HashMap<u64, f64>,
}

impl CachedRecursive {
    /// Create a strategy with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every memoized value.
    pub fn reset(&mut self) {
        log::debug!("recursive cache reset ({} entries dropped)", self.cache.len());
        self.cache.clear();
    }

    /// Number of memoized values.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Whether F(n) is already memoized.
    #[must_use]
    pub fn is_cached(&self, n: u64) -> bool {
        self.cache.contains_key(&n)
    }

    fn eval(&mut self, n: u64) -> f64 {
        if n <= 2 {
            return 1.0;
        }
        if let Some(&v) = self.cache.get(&n) {
            return v;
        }
        let prev = self.eval(n - 1);
        let prev2 = self.eval(n - 2);
        let v = next_value(n, prev, prev2, &factorial(2 * n));
        self.cache.insert(n, v);
        v
    }
}

impl SequenceStrategy for CachedRecursive {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn value(&mut self, n: u64) -> LabResult<f64> {
        check_index(n)?;
        Ok(self.eval(n))
    }
}

/// Bottom-up evaluation over a fresh table for every call.
///
/// (2i)! is carried from one index to the next by multiplying in
/// `(2i - 1) * 2i`, which keeps it exact without recomputing from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedIterative;

impl TabulatedIterative {
    /// Create the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SequenceStrategy for TabulatedIterative {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn value(&mut self, n: u64) -> LabResult<f64> {
        check_index(n)?;
        if n <= 2 {
            return Ok(1.0);
        }
        let len = usize::try_from(n)
            .map_err(|_| LabError::config(format!("index {n} is too large to tabulate")))?;

        let mut table = vec![0.0; len + 1];
        table[1] = 1.0;
        table[2] = 1.0;
        let mut factorial_2i = factorial(4);
        for i in 3..=len {
            let k = i as u64;
            factorial_2i *= 2 * k - 1;
            factorial_2i *= 2 * k;
            table[i] = next_value(k, table[i - 1], table[i - 2], &factorial_2i);
        }
        Ok(table[len])
    }
}

/// Relative comparison used to cross-check the two strategies.
#[must_use]
pub fn values_agree(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: [f64; 15] = [
        1.0,
        1.0,
        3.998_611_111_111_111,
        -3.999_900_828_097_443,
        15.994_445_546_709_883,
        15.999_603_345_780_987,
        63.977_782_186_656_01,
        -63.998_413_383_120_89,
        255.911_128_746_624_03,
        255.993_653_532_483_56,
        1_023.644_514_986_496_1,
        -1_023.974_614_129_934_3,
        4_094.578_059_945_984_5,
        4_095.898_456_519_737,
        16_378.312_239_783_938,
    ];

    #[test]
    fn test_base_cases_are_exactly_one() {
        let mut rec = CachedRecursive::new();
        let mut it = TabulatedIterative::new();
        for n in [1, 2] {
            assert_eq!(rec.value(n).ok(), Some(1.0));
            assert_eq!(it.value(n).ok(), Some(1.0));
        }
    }

    #[test]
    fn test_third_term() {
        let mut it = TabulatedIterative::new();
        let v = it.value(3).unwrap_or(f64::NAN);
        assert!((v - (4.0 - 1.0 / 720.0)).abs() < 1e-15);
    }

    #[test]
    fn test_reference_values() {
        let mut rec = CachedRecursive::new();
        let mut it = TabulatedIterative::new();
        for (i, &expected) in REFERENCE.iter().enumerate() {
            let n = i as u64 + 1;
            let r = rec.value(n).unwrap_or(f64::NAN);
            let t = it.value(n).unwrap_or(f64::NAN);
            assert!(values_agree(r, expected, 1e-12), "recursive F({n}) = {r}");
            assert!(values_agree(t, expected, 1e-12), "iterative F({n}) = {t}");
        }
    }

    #[test]
    fn test_strategies_agree_up_to_fifteen() {
        let mut rec = CachedRecursive::new();
        let mut it = TabulatedIterative::new();
        for n in 1..=15 {
            let r = rec.value(n).unwrap_or(f64::NAN);
            let t = it.value(n).unwrap_or(f64::NAN);
            assert!(values_agree(r, t, 1e-9), "n={n}: {r} vs {t}");
        }
    }

    #[test]
    fn test_index_zero_rejected() {
        assert!(matches!(
            CachedRecursive::new().value(0),
            Err(LabError::InvalidIndex(0))
        ));
        assert!(matches!(
            TabulatedIterative::new().value(0),
            Err(LabError::InvalidIndex(0))
        ));
    }

    #[test]
    fn test_index_past_maximum_rejected() {
        let n = MAX_SEQUENCE_INDEX + 1;
        assert!(matches!(
            CachedRecursive::new().value(n),
            Err(LabError::IndexOutOfRange { index, max }) if index == n && max == MAX_SEQUENCE_INDEX
        ));
        assert!(matches!(
            TabulatedIterative::new().value(n),
            Err(LabError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            CachedRecursive::new().value(100_000),
            Err(LabError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_maximum_index_is_finite() {
        let v = TabulatedIterative::new().value(MAX_SEQUENCE_INDEX);
        assert!(v.is_ok_and(f64::is_finite));
    }

    #[test]
    fn test_cache_persists_across_calls() {
        let mut rec = CachedRecursive::new();
        assert_eq!(rec.cached_len(), 0);
        let _ = rec.value(10);
        // Indices 3..=10 are memoized; 1 and 2 are base cases.
        assert_eq!(rec.cached_len(), 8);
        assert!(rec.is_cached(10));
        let _ = rec.value(12);
        assert_eq!(rec.cached_len(), 10);
    }

    #[test]
    fn test_cache_reset() {
        let mut rec = CachedRecursive::new();
        let before = rec.value(8).unwrap_or(f64::NAN);
        rec.reset();
        assert_eq!(rec.cached_len(), 0);
        assert!(!rec.is_cached(8));
        let after = rec.value(8).unwrap_or(f64::NAN);
        assert_eq!(before.to_bits(), after.to_bits());
    }

    #[test]
    fn test_base_cases_not_cached() {
        let mut rec = CachedRecursive::new();
        let _ = rec.value(2);
        assert_eq!(rec.cached_len(), 0);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(CachedRecursive::new().name(), "recursive");
        assert_eq!(TabulatedIterative::new().name(), "iterative");
    }

    #[test]
    fn test_large_index_stays_finite() {
        // (2n)! is far beyond f64 range here; the division must not collapse to NaN.
        let mut it = TabulatedIterative::new();
        let v = it.value(200).unwrap_or(f64::NAN);
        assert!(v.is_finite());
        let mut rec = CachedRecursive::new();
        let r = rec.value(200).unwrap_or(f64::NAN);
        assert!(values_agree(v, r, 1e-9));
    }

    #[test]
    fn test_values_agree() {
        assert!(values_agree(1.0, 1.0, 0.0));
        assert!(values_agree(1.0, 1.0 + 1e-12, 1e-9));
        assert!(!values_agree(1.0, 1.1, 1e-9));
        assert!(values_agree(0.0, 0.0, 1e-9));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: both strategies agree for every index in range.
        #[test]
        fn prop_strategies_agree(n in 1u64..60) {
            let r = CachedRecursive::new().value(n).unwrap_or(f64::NAN);
            let t = TabulatedIterative::new().value(n).unwrap_or(f64::NAN);
            prop_assert!(values_agree(r, t, 1e-9), "n={}: {} vs {}", n, r, t);
        }

        /// Property: warm and cold recursive evaluation give the same bits.
        #[test]
        fn prop_cache_does_not_change_result(n in 1u64..60, warmup in 1u64..60) {
            let mut warm = CachedRecursive::new();
            let _ = warm.value(warmup);
            let w = warm.value(n).unwrap_or(f64::NAN);
            let c = CachedRecursive::new().value(n).unwrap_or(f64::NAN);
            prop_assert_eq!(w.to_bits(), c.to_bits());
        }
    }
}
