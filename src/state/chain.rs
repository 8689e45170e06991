// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized chain lengths for pairs of prime ranks.
//!
//! For ranks `i < j` with primes `a = prime(i)` and `b = prime(j)`, the chain
//! length of `(i, j)` is 1 when `c = 2b - a` is not a prime `<= bound`, and
//! otherwise one more than the chain length of `(j, rank_of(c))`.
//!
//! Each step moves to a strictly larger prime, so chains are finite and the
//! pair graph is acyclic. Lengths are resolved with an explicit worklist rather
//! than native recursion: walk forward until a resolved cell or a dead end, then
//! fill the visited cells on the way back.
//!
//! Cells are filled once and never change.

use tracing::trace;

use crate::memo::PrimeSieve;
use crate::progression::Rank;
use crate::state::statistics::{Counters, Statistics};

/// Cell value meaning "not yet computed". Every real chain length is at least 1.
pub const UNRESOLVED: u32 = 0;

/// Square table of chain lengths indexed by `(rank, rank)`.
#[derive(Debug, Clone)]
pub struct ChainTable {
    size: usize,
    cells: Vec<u32>,
}

impl ChainTable {
    /// Allocate a `size x size` table with every cell unresolved.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![UNRESOLVED; size * size],
        }
    }

    /// Largest rank the table can hold.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn cell(&self, i: Rank, j: Rank) -> usize {
        assert!(
            i.get() <= self.size && j.get() <= self.size,
            "Rank pair ({}, {}) out of bounds for chain table of size {}",
            i,
            j,
            self.size
        );
        i.index() * self.size + j.index()
    }

    /// The cached length, or `None` if unresolved.
    #[inline]
    pub fn get(&self, i: Rank, j: Rank) -> Option<u32> {
        match self.cells[self.cell(i, j)] {
            UNRESOLVED => None,
            length => Some(length),
        }
    }

    #[inline]
    fn set(&mut self, i: Rank, j: Rank, length: u32) {
        debug_assert_ne!(length, UNRESOLVED);
        let cell = self.cell(i, j);
        debug_assert_eq!(self.cells[cell], UNRESOLVED, "cell resolved twice");
        self.cells[cell] = length;
    }

    /// Number of resolved cells.
    pub fn resolved(&self) -> usize {
        self.cells.iter().filter(|&&c| c != UNRESOLVED).count()
    }
}

/// Lazily computed chain lengths over the rank pairs of a [`PrimeSieve`].
#[derive(Debug, Clone)]
pub struct ChainMemo {
    table: ChainTable,
}

impl ChainMemo {
    /// Create a memo sized for every rank the sieve produced.
    pub fn new(sieve: &PrimeSieve) -> Self {
        Self {
            table: ChainTable::new(sieve.prime_count()),
        }
    }

    pub fn table(&self) -> &ChainTable {
        &self.table
    }

    /// Peek at a cell without computing it.
    pub fn cached(&self, i: Rank, j: Rank) -> Option<u32> {
        self.table.get(i, j)
    }

    pub fn is_resolved(&self, i: Rank, j: Rank) -> bool {
        self.cached(i, j).is_some()
    }

    /// Chain length of the pair `(i, j)`, computing and caching it if needed.
    ///
    /// Every pair visited on the way is cached too, so the pairs that make up
    /// the tail of a progression are resolved by the time this returns.
    ///
    /// # Panics
    ///
    /// Panics unless `i < j <= sieve.prime_count()`.
    pub fn length(
        &mut self,
        sieve: &PrimeSieve,
        stats: &mut Statistics,
        i: Rank,
        j: Rank,
    ) -> u32 {
        assert!(i < j, "Chain pair must be increasing, got ({}, {})", i, j);

        let mut path: Vec<(Rank, Rank)> = Vec::new();
        let (mut i, mut j) = (i, j);
        let mut length = loop {
            if let Some(length) = self.table.get(i, j) {
                stats.increment_counter(Counters::CacheHits);
                break length;
            }
            path.push((i, j));

            let a = sieve.prime(i) as u64;
            let b = sieve.prime(j) as u64;
            match sieve.rank_of(2 * b - a) {
                Some(k) => (i, j) = (j, k),
                None => break 0,
            }
        };

        for &(i, j) in path.iter().rev() {
            length += 1;
            self.table.set(i, j, length);
            stats.increment_counter(Counters::CellsResolved);
        }
        if !path.is_empty() {
            stats.record_chain(length);
            trace!(steps = path.len(), length, "chain resolved");
        }
        length
    }
}
