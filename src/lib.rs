// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized digit-arrangement accumulator.
//!
//! Given counts (n4, n5, n6) of available digits "4", "5" and "6", this crate
//! computes, modulo 1,000,000,007, the sum of every distinct decimal number
//! that can be formed by arranging any sub-multiset (a, b, c) with a ≤ n4,
//! b ≤ n5, c ≤ n6 in every distinct order.
//!
//! # Architecture
//!
//! The computation uses a two-table memory model, owned by a single
//! [`ArrangementAccumulator`] per run:
//!
//! ## Multiplicity table
//!
//! `multiplicity(a, b, c)` counts distinct orderings of a multiset of
//! a "4"s, b "5"s and c "6"s via the multinomial recurrence
//!
//! ```text
//! M(a,b,c) = M(a-1,b,c) + M(a,b-1,c) + M(a,b,c-1)
//! ```
//!
//! ## Sum table
//!
//! `weighted_sum(a, b, c)` sums every arrangement read as a base-10 integer,
//! by fixing the most significant digit and recursing on the remainder:
//!
//! ```text
//! S(a,b,c) = Σ over nonempty classes: 10·S(reduced) + digit·M(reduced)
//! ```
//!
//! Both tables are dense, pre-allocated at (n4+1)×(n5+1)×(n6+1), and each
//! cell is written exactly once. The coordinate domain is well-founded
//! (recursion strictly decreases toward (0,0,0)), so the recursion always
//! terminates and every triple is computed once, giving O(n4·n5·n6) work.
//!
//! # Parallelization
//!
//! All table values depend only on strictly smaller coordinates, so a
//! wavefront decomposition (all a+b+c = s before s+1) would be safe. The
//! reference computation is sequential; parallel evaluation is out of scope.

pub mod accumulator;
pub mod arithmetic;
pub mod input;
pub mod statistics;
pub mod table;

// Re-export commonly used types
pub use accumulator::ArrangementAccumulator;
pub use arithmetic::MODULUS;
pub use input::{read_counts, InputError};
pub use statistics::{Counters, Statistics};
