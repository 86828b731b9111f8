// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the accumulator and incremented on every call
//! into the recursive operations. They make the memoization discipline
//! observable: a repeated call must register as a cache hit and perform no
//! new recursive work.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Calls into `multiplicity`, including recursive ones.
    MultiplicityCalls,
    /// `multiplicity` calls answered from the memo table.
    MultiplicityCacheHits,
    /// Calls into `weighted_sum`, including recursive ones.
    WeightedSumCalls,
    /// `weighted_sum` calls answered from the memo table.
    WeightedSumCacheHits,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Calls that actually descended into the recurrence (misses).
    pub fn multiplicity_misses(&self) -> u64 {
        self.get(Counters::MultiplicityCalls) - self.get(Counters::MultiplicityCacheHits)
    }

    pub fn weighted_sum_misses(&self) -> u64 {
        self.get(Counters::WeightedSumCalls) - self.get(Counters::WeightedSumCacheHits)
    }
}
