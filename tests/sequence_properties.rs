//! Integration tests for the recurrence evaluator.
//!
//! Each test states the claim it tries to break.

use tourlab::prelude::*;
use tourlab::sequence::values_agree;

// Claim: the two strategies disagree somewhere in 1..=15.
// Falsification: evaluate both and compare at 1e-9 relative tolerance.
#[test]
fn strategies_agree_for_first_fifteen_indices() {
    let mut rec = CachedRecursive::new();
    let mut it = TabulatedIterative::new();
    for n in 1..=15 {
        let r = rec.value(n).unwrap();
        let t = it.value(n).unwrap();
        assert!(values_agree(r, t, 1e-9), "F({n}): recursive {r}, iterative {t}");
    }
}

// Claim: the base cases are approximated.
#[test]
fn base_cases_are_exactly_one() {
    let mut rec = CachedRecursive::new();
    let mut it = TabulatedIterative::new();
    assert_eq!(rec.value(1).unwrap(), 1.0);
    assert_eq!(rec.value(2).unwrap(), 1.0);
    assert_eq!(it.value(1).unwrap(), 1.0);
    assert_eq!(it.value(2).unwrap(), 1.0);
}

// Claim: index zero is silently clamped to one.
#[test]
fn index_zero_is_an_error() {
    let err = CachedRecursive::new().value(0).unwrap_err();
    assert!(matches!(err, LabError::InvalidIndex(0)));
    let err = TabulatedIterative::new().value(0).unwrap_err();
    assert!(matches!(err, LabError::InvalidIndex(0)));
}

// Claim: a shared cache changes results relative to a fresh one.
#[test]
fn warm_cache_matches_cold_evaluation() {
    let mut warm = CachedRecursive::new();
    for n in 1..=30 {
        let w = warm.value(n).unwrap();
        let c = CachedRecursive::new().value(n).unwrap();
        assert_eq!(w.to_bits(), c.to_bits(), "F({n})");
    }
    assert_eq!(warm.cached_len(), 28);
}

// Claim: the sign pattern follows (-1)^n on the bracket, as observed in
// the reference values: F(4), F(8) and F(12) are the negative terms up to 15.
#[test]
fn sign_pattern_of_reference_values() {
    let mut it = TabulatedIterative::new();
    let negative: Vec<u64> = (1..=15)
        .filter(|&n| it.value(n).unwrap() < 0.0)
        .collect();
    assert_eq!(negative, vec![4, 8, 12]);
}

// Claim: the comparison harness mixes up the two columns.
#[test]
fn comparison_rows_match_direct_evaluation() {
    for mode in [TimingMode::Warm, TimingMode::Cold] {
        let rows = compare_strategies(15, mode).unwrap();
        let mut it = TabulatedIterative::new();
        for row in &rows {
            assert_eq!(row.iterative.to_bits(), it.value(row.n).unwrap().to_bits());
            assert!(values_agree(row.recursive, row.iterative, 1e-9));
        }
        assert_eq!(rows.last().map(|r| r.n), Some(15));
    }
}

// Claim: the factorial divisor loses precision once (2n)! exceeds f64.
// Falsification: n = 100 needs 200!, which overflows f64.
#[test]
fn large_index_uses_exact_factorial() {
    let mut rec = CachedRecursive::new();
    let mut it = TabulatedIterative::new();
    let r = rec.value(100).unwrap();
    let t = it.value(100).unwrap();
    assert!(r.is_finite());
    assert!(values_agree(r, t, 1e-9));
}
