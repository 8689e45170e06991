// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext owns everything the search touches:
//! - Tier 1 (MEMO): the prime sieve, immutable once built
//! - Tier 2 (DYNAMIC): the chain memo and statistics
//!
//! Nothing is global; independent contexts never share state.

use tracing::debug;

use crate::errors::Result;
use crate::memo::PrimeSieve;
use crate::progression::Rank;
use crate::state::{ChainMemo, Statistics};

/// Search context passed through the enumeration.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: PrimeSieve,        // Tier 1: immutable
///     chains: ChainMemo,       // Tier 2: fill-once cells
///     statistics: Statistics,  // Tier 2: counters
/// }
/// ```
///
/// For a bound of 1000 the chain table holds 168 x 168 cells (~110 KB).
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub memo: PrimeSieve,
    pub chains: ChainMemo,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Sieve up to `bound` and allocate a chain table sized from the result.
    pub fn new(bound: u32) -> Result<Self> {
        let memo = PrimeSieve::build(bound)?;
        Ok(Self::with_memo(memo))
    }

    /// Create a context around an existing sieve, with an empty chain table.
    pub fn with_memo(memo: PrimeSieve) -> Self {
        let chains = ChainMemo::new(&memo);
        debug!(size = chains.table().size(), "chain table allocated");
        Self {
            memo,
            chains,
            statistics: Statistics::new(),
        }
    }

    /// Chain length for the rank pair `(i, j)`, memoized.
    ///
    /// # Panics
    ///
    /// Panics unless `i < j <= prime_count`.
    pub fn chain_length(&mut self, i: Rank, j: Rank) -> u32 {
        self.chains.length(&self.memo, &mut self.statistics, i, j)
    }

    pub fn is_resolved(&self, i: Rank, j: Rank) -> bool {
        self.chains.is_resolved(i, j)
    }

    /// Primes with ranks `i` and `j`.
    pub fn pair(&self, i: Rank, j: Rank) -> (u32, u32) {
        (self.memo.prime(i), self.memo.prime(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Counters;

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new(1000).unwrap();
        assert_eq!(ctx.memo.prime_count(), 168);
        assert_eq!(ctx.chains.table().size(), 168);
        assert_eq!(ctx.chains.table().resolved(), 0);
    }

    #[test]
    fn test_independent_contexts() {
        let memo = PrimeSieve::build(100).unwrap();
        let mut ctx1 = SearchContext::with_memo(memo.clone());
        let ctx2 = SearchContext::with_memo(memo);

        let (i, j) = (Rank::new(2).unwrap(), Rank::new(3).unwrap());
        assert_eq!(ctx1.chain_length(i, j), 2);
        assert!(ctx1.is_resolved(i, j));
        assert!(!ctx2.is_resolved(i, j));
        assert_eq!(ctx2.statistics.get(Counters::CellsResolved), 0);
    }

    #[test]
    fn test_pair() {
        let ctx = SearchContext::new(50).unwrap();
        assert_eq!(ctx.pair(Rank::new(1).unwrap(), Rank::new(15).unwrap()), (2, 47));
    }
}
