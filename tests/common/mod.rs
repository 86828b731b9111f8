// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The brute-force oracle enumerates every distinct arrangement explicitly,
//! independent of the memoized recurrences, so the two implementations can
//! only agree by both being correct.

use arrangement_sum::MODULUS;

/// Sum of all distinct arrangements of a "4"s, b "5"s and c "6"s, read as
/// base-10 integers, computed by explicit enumeration. Exact in `u128`
/// until the final reduction, so keep a+b+c small (≤ 12 or so).
pub fn brute_force_weighted_sum(a: u32, b: u32, c: u32) -> u64 {
    let mut acc: u128 = 0;
    enumerate(a, b, c, 0, &mut acc);
    (acc % MODULUS as u128) as u64
}

/// Sum of [`brute_force_weighted_sum`] over the whole coordinate box,
/// mirroring the aggregation in `total()`.
pub fn brute_force_total(n4: u32, n5: u32, n6: u32) -> u64 {
    let mut acc: u128 = 0;
    for i in 0..=n4 {
        for j in 0..=n5 {
            for k in 0..=n6 {
                acc += brute_force_weighted_sum(i, j, k) as u128;
            }
        }
    }
    (acc % MODULUS as u128) as u64
}

/// Number of distinct arrangements, by explicit enumeration.
pub fn brute_force_multiplicity(a: u32, b: u32, c: u32) -> u64 {
    let mut count: u64 = 0;
    count_arrangements(a, b, c, &mut count);
    count % MODULUS
}

// Extends the prefix by one digit from each nonempty class. Digits within
// a class are identical, so this visits each distinct string exactly once.
fn enumerate(a: u32, b: u32, c: u32, prefix: u128, acc: &mut u128) {
    if a + b + c == 0 {
        *acc += prefix;
        return;
    }
    if a > 0 {
        enumerate(a - 1, b, c, prefix * 10 + 4, acc);
    }
    if b > 0 {
        enumerate(a, b - 1, c, prefix * 10 + 5, acc);
    }
    if c > 0 {
        enumerate(a, b, c - 1, prefix * 10 + 6, acc);
    }
}

fn count_arrangements(a: u32, b: u32, c: u32, count: &mut u64) {
    if a + b + c == 0 {
        *count += 1;
        return;
    }
    if a > 0 {
        count_arrangements(a - 1, b, c, count);
    }
    if b > 0 {
        count_arrangements(a, b - 1, c, count);
    }
    if c > 0 {
        count_arrangements(a, b, c - 1, count);
    }
}
