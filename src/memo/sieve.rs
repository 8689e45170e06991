// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sieve of Eratosthenes and the prime/rank lookup tables.
//!
//! # Tables
//!
//! - `is_prime`: primality flag for every integer in `0..=bound`
//! - `primes`: the primes `<= bound` in increasing order (rank 1 is at index 0)
//! - `rank_of`: for every integer in `0..=bound`, the rank of that prime, or
//!   `None` for composites, 0 and 1
//!
//! `primes` and `rank_of` are exact inverses on the primes. All three tables
//! are built once and never modified.

use tracing::debug;

use crate::errors::{ProgressionError, Result};
use crate::progression::Rank;

/// Immutable primality and rank tables for the integers up to a bound.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    bound: u32,
    is_prime: Vec<bool>,
    primes: Vec<u32>,
    rank_of: Vec<Option<Rank>>,
}

impl PrimeSieve {
    /// Sieve the integers `0..=bound`.
    ///
    /// Each `i` still marked prime is appended to the prime list, then its
    /// multiples `i*2, i*3, ...` up to `bound` are crossed out.
    pub fn build(bound: u32) -> Result<Self> {
        if bound < 2 {
            return Err(ProgressionError::BoundTooSmall { bound });
        }
        let size = bound as usize + 1;
        let mut is_prime = vec![true; size];
        is_prime[0] = false;
        is_prime[1] = false;
        let mut primes = Vec::new();
        let mut rank_of = vec![None; size];

        for i in 2..size {
            if !is_prime[i] {
                continue;
            }
            primes.push(i as u32);
            rank_of[i] = Rank::new(primes.len());

            let mut multiplier = 2;
            while i * multiplier < size {
                is_prime[i * multiplier] = false;
                multiplier += 1;
            }
        }

        debug!(bound, primes = primes.len(), "sieve complete");

        Ok(Self {
            bound,
            is_prime,
            primes,
            rank_of,
        })
    }

    /// The largest integer considered.
    #[inline]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Number of primes `<= bound`; also the largest valid rank.
    #[inline]
    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Primality of `n`; false for anything outside `0..=bound`.
    #[inline]
    pub fn is_prime(&self, n: u64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|n| self.is_prime.get(n))
            .copied()
            .unwrap_or(false)
    }

    /// The prime with the given rank.
    ///
    /// # Panics
    ///
    /// Panics if `rank > prime_count()`.
    #[inline]
    pub fn prime(&self, rank: Rank) -> u32 {
        assert!(
            rank.get() <= self.primes.len(),
            "Rank {} out of bounds ({} primes)",
            rank,
            self.primes.len()
        );
        self.primes[rank.index()]
    }

    /// Rank of `value` if it is a prime `<= bound`.
    #[inline]
    pub fn rank_of(&self, value: u64) -> Option<Rank> {
        usize::try_from(value)
            .ok()
            .and_then(|v| self.rank_of.get(v))
            .copied()
            .flatten()
    }

    /// All primes in increasing order.
    pub fn primes(&self) -> &[u32] {
        &self.primes
    }

    /// All valid ranks, `1..=prime_count()`.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        (1..=self.primes.len()).filter_map(Rank::new)
    }
}
