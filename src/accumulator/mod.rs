// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The memoized digit-arrangement accumulator.
//!
//! One [`ArrangementAccumulator`] owns everything a computation run needs:
//! the immutable input triple, the two write-once memo tables, and the call
//! statistics. There is no process-wide mutable state; independent runs use
//! independent accumulators.
//!
//! # Recursion structure
//!
//! `multiplicity` calls itself; `weighted_sum` calls both itself and
//! `multiplicity`. Both only ever recurse to coordinates with one unit
//! removed from one class, so the dependency graph over coordinates is
//! acyclic and bounded by (0, 0, 0). Each coordinate is computed once and
//! then served from its table.

use crate::arithmetic::{add_mod, mul_mod, MODULUS};
use crate::statistics::{Counters, Statistics};
use crate::table::MemoTable;

/// Decimal value contributed by each digit class, indexed in class order.
const DIGIT_VALUES: [u64; 3] = [4, 5, 6];

/// Accumulator for one (n4, n5, n6) computation run.
#[derive(Debug)]
pub struct ArrangementAccumulator {
    /// Available copies of digit "4".
    n4: u32,
    /// Available copies of digit "5".
    n5: u32,
    /// Available copies of digit "6".
    n6: u32,
    /// Memoized arrangement counts, one cell per coordinate.
    multiplicities: MemoTable,
    /// Memoized arrangement-value sums, same shape and lifecycle.
    sums: MemoTable,
    /// Call and cache-hit counters.
    pub statistics: Statistics,
}

impl ArrangementAccumulator {
    /// Create an accumulator for the given digit counts.
    ///
    /// Both tables are allocated to full (n4+1)×(n5+1)×(n6+1) size up
    /// front; cells are populated lazily by the recursion.
    pub fn new(n4: u32, n5: u32, n6: u32) -> Self {
        Self {
            n4,
            n5,
            n6,
            multiplicities: MemoTable::new(n4, n5, n6),
            sums: MemoTable::new(n4, n5, n6),
            statistics: Statistics::new(),
        }
    }

    pub fn n4(&self) -> u32 {
        self.n4
    }

    pub fn n5(&self) -> u32 {
        self.n5
    }

    pub fn n6(&self) -> u32 {
        self.n6
    }

    /// Number of distinct orderings of a "4"s, b "5"s and c "6"s, mod p.
    ///
    /// Uses the multinomial recurrence
    /// M(a,b,c) = M(a-1,b,c) + M(a,b-1,c) + M(a,b,c-1): the most
    /// significant position holds a digit from exactly one class, and
    /// removing that digit leaves a smaller instance of the same problem.
    ///
    /// Coordinates must lie inside the accumulator's box (caller-enforced).
    pub fn multiplicity(&mut self, a: u32, b: u32, c: u32) -> u64 {
        debug_assert!(a <= self.n4 && b <= self.n5 && c <= self.n6);
        self.statistics.increment(Counters::MultiplicityCalls);
        if a + b + c == 0 {
            // The empty arrangement: cheap enough to recompute.
            return 1;
        }
        if let Some(cached) = self.multiplicities.get(a, b, c) {
            self.statistics.increment(Counters::MultiplicityCacheHits);
            return cached;
        }
        let mut acc: u64 = 0;
        if a > 0 {
            acc += self.multiplicity(a - 1, b, c);
        }
        if b > 0 {
            acc += self.multiplicity(a, b - 1, c);
        }
        if c > 0 {
            acc += self.multiplicity(a, b, c - 1);
        }
        let value = acc % MODULUS;
        self.multiplicities.set(a, b, c, value);
        value
    }

    /// Sum of all distinct arrangements of a "4"s, b "5"s and c "6"s, each
    /// read as a base-10 integer, mod p.
    ///
    /// Fixing the most significant digit to class value v and recursing on
    /// the remaining positions gives, per remainder arrangement, a value of
    /// 10·(remainder value) + v. Summed over all M(reduced) remainders:
    ///
    /// ```text
    /// S(a,b,c) = Σ_{nonempty class} 10·S(reduced) + v·M(reduced)
    /// ```
    ///
    /// where `reduced` removes one unit from that class. Note that M is
    /// evaluated at the same reduced coordinate as S.
    pub fn weighted_sum(&mut self, a: u32, b: u32, c: u32) -> u64 {
        debug_assert!(a <= self.n4 && b <= self.n5 && c <= self.n6);
        self.statistics.increment(Counters::WeightedSumCalls);
        if a + b + c == 0 {
            // The empty arrangement contributes no numeric value.
            return 0;
        }
        if let Some(cached) = self.sums.get(a, b, c) {
            self.statistics.increment(Counters::WeightedSumCacheHits);
            return cached;
        }
        let mut acc: u64 = 0;
        if a > 0 {
            let sum = self.weighted_sum(a - 1, b, c);
            let mult = self.multiplicity(a - 1, b, c);
            acc += add_mod(mul_mod(10, sum), mul_mod(DIGIT_VALUES[0], mult));
        }
        if b > 0 {
            let sum = self.weighted_sum(a, b - 1, c);
            let mult = self.multiplicity(a, b - 1, c);
            acc += add_mod(mul_mod(10, sum), mul_mod(DIGIT_VALUES[1], mult));
        }
        if c > 0 {
            let sum = self.weighted_sum(a, b, c - 1);
            let mult = self.multiplicity(a, b, c - 1);
            acc += add_mod(mul_mod(10, sum), mul_mod(DIGIT_VALUES[2], mult));
        }
        let value = acc % MODULUS;
        self.sums.set(a, b, c, value);
        value
    }

    /// The challenge answer: Σ weighted_sum(i, j, k) over the whole
    /// coordinate box, reduced mod p once at the end.
    ///
    /// Every per-coordinate term is already below the modulus, so the raw
    /// accumulation fits in a `u64` for any box with fewer than ~1.7·10^10
    /// coordinates; only the final result needs reduction. Enumeration
    /// order is irrelevant.
    pub fn total(&mut self) -> u64 {
        let mut sum: u64 = 0;
        for i in 0..=self.n4 {
            for j in 0..=self.n5 {
                for k in 0..=self.n6 {
                    sum += self.weighted_sum(i, j, k);
                }
            }
        }
        sum % MODULUS
    }

    /// Peek at a multiplicity cell without computing it.
    pub fn cached_multiplicity(&self, a: u32, b: u32, c: u32) -> Option<u64> {
        self.multiplicities.get(a, b, c)
    }

    /// Peek at a weighted-sum cell without computing it.
    pub fn cached_sum(&self, a: u32, b: u32, c: u32) -> Option<u64> {
        self.sums.get(a, b, c)
    }
}
