// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular arithmetic over the fixed challenge modulus.
//!
//! All table values are residues modulo [`MODULUS`]. The helpers here keep
//! the reduction discipline in one place: recursive terms are reduced before
//! summation, and only the final aggregate is reduced after accumulation.
//!
//! The closed-form [`multinomial`] is an independent cross-check for the
//! recurrence-based multiplicity table. It computes exact factorials in
//! `u128`, so it is only tractable for small coordinates (a+b+c ≤ 33); the
//! production path never calls it.

/// The challenge modulus, 10^9 + 7 (prime).
pub const MODULUS: u64 = 1_000_000_007;

/// Multiply two residues modulo [`MODULUS`].
///
/// Both operands must already be reduced; the product of two values below
/// 2^30 fits comfortably in a `u64`.
#[inline]
pub fn mul_mod(a: u64, b: u64) -> u64 {
    debug_assert!(a < MODULUS && b < MODULUS);
    a * b % MODULUS
}

/// Add two residues modulo [`MODULUS`].
#[inline]
pub fn add_mod(a: u64, b: u64) -> u64 {
    debug_assert!(a < MODULUS && b < MODULUS);
    (a + b) % MODULUS
}

/// Exact multinomial coefficient (a+b+c)! / (a!·b!·c!), reduced mod [`MODULUS`].
///
/// # Panics
///
/// Panics if a+b+c > 33, where the intermediate factorial overflows `u128`.
pub fn multinomial(a: u32, b: u32, c: u32) -> u64 {
    let n = a + b + c;
    assert!(n <= 33, "factorial of {} overflows u128", n);
    let exact = factorial(n) / (factorial(a) * factorial(b) * factorial(c));
    (exact % MODULUS as u128) as u64
}

/// Exact binomial coefficient C(n, k), reduced mod [`MODULUS`].
pub fn binomial(n: u32, k: u32) -> u64 {
    assert!(k <= n, "C({}, {}) is undefined", n, k);
    multinomial(k, n - k, 0)
}

fn factorial(n: u32) -> u128 {
    (1..=n as u128).product()
}
