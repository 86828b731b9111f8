// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end totals: the aggregation over every sub-multiset.
//!
//! The concrete small scenarios pin the exact challenge outputs; the larger
//! boxes are checked against the brute-force enumerator.

mod common;

use arrangement_sum::{ArrangementAccumulator, MODULUS};

fn total(n4: u32, n5: u32, n6: u32) -> u64 {
    ArrangementAccumulator::new(n4, n5, n6).total()
}

#[test]
fn test_no_digits_at_all() {
    // Only the empty arrangement exists and it contributes nothing.
    assert_eq!(total(0, 0, 0), 0);
}

#[test]
fn test_single_four() {
    // Sub-multisets: (0,0,0) → 0 and (1,0,0) → "4".
    assert_eq!(total(1, 0, 0), 4);
}

#[test]
fn test_one_four_one_five() {
    // 0 + 4 + 5 + (45 + 54) = 108.
    assert_eq!(total(1, 1, 0), 108);
}

#[test]
fn test_two_fours() {
    // 0 + 4 + 44 = 48.
    assert_eq!(total(2, 0, 0), 48);
}

#[test]
fn test_totals_match_brute_force() {
    for &(n4, n5, n6) in &[(1, 1, 1), (2, 2, 1), (3, 1, 2), (0, 2, 3), (4, 0, 4)] {
        assert_eq!(
            total(n4, n5, n6),
            common::brute_force_total(n4, n5, n6),
            "total({}, {}, {})",
            n4,
            n5,
            n6
        );
    }
}

#[test]
fn test_total_is_deterministic_and_reduced() {
    let first = total(30, 25, 20);
    let second = total(30, 25, 20);
    assert_eq!(first, second);
    assert!(first < MODULUS);
}

#[test]
fn test_accumulator_reports_its_inputs() {
    let acc = ArrangementAccumulator::new(7, 8, 9);
    assert_eq!(acc.n4(), 7);
    assert_eq!(acc.n5(), 8);
    assert_eq!(acc.n6(), 9);
}
