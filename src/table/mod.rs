// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense write-once memo tables indexed by digit-count triples.
//!
//! Each table covers the full coordinate box [0, n4] × [0, n5] × [0, n6]
//! and is allocated up front as a flat `Vec<Option<u64>>`. The explicit
//! `Option` per cell replaces a magic "not yet computed" sentinel value,
//! which could collide with a legitimate residue if the value domain ever
//! changed.
//!
//! # Memory Layout
//!
//! **Heap-allocated** flat Vec of (n4+1)·(n5+1)·(n6+1) cells in row-major
//! order (a outermost, c innermost). `Option<u64>` is 16 bytes, so memory
//! grows with the product of the three counts: 101³ cells ≈ 16 MB per
//! table. A single flat allocation with computed strides keeps lookups on
//! the recursion's hot path to one multiply-add per axis.

/// A dense 3-D table of write-once memoized residues.
#[derive(Debug, Clone)]
pub struct MemoTable {
    /// Flat cell storage, row-major in (a, b, c).
    cells: Vec<Option<u64>>,
    /// Extent of the b axis (n5 + 1).
    dim_b: usize,
    /// Extent of the c axis (n6 + 1).
    dim_c: usize,
}

impl MemoTable {
    /// Allocate an empty table covering [0, n4] × [0, n5] × [0, n6].
    pub fn new(n4: u32, n5: u32, n6: u32) -> Self {
        let dim_a = n4 as usize + 1;
        let dim_b = n5 as usize + 1;
        let dim_c = n6 as usize + 1;
        Self {
            cells: vec![None; dim_a * dim_b * dim_c],
            dim_b,
            dim_c,
        }
    }

    #[inline]
    fn index(&self, a: u32, b: u32, c: u32) -> usize {
        (a as usize * self.dim_b + b as usize) * self.dim_c + c as usize
    }

    /// Read the cached value at (a, b, c), or `None` if not yet computed.
    ///
    /// Coordinates are caller-enforced to lie inside the allocated box;
    /// out-of-range access is a contract violation.
    #[inline]
    pub fn get(&self, a: u32, b: u32, c: u32) -> Option<u64> {
        self.cells[self.index(a, b, c)]
    }

    /// Cache a value at (a, b, c). Each cell is written at most once.
    #[inline]
    pub fn set(&mut self, a: u32, b: u32, c: u32, value: u64) {
        let index = self.index(a, b, c);
        debug_assert!(
            self.cells[index].is_none(),
            "memo cell ({}, {}, {}) written twice",
            a,
            b,
            c
        );
        self.cells[index] = Some(value);
    }

    /// Number of cells that have been computed so far.
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Total number of cells in the box.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }
}
