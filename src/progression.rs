// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ranks and progressions.
//!
//! A [`Rank`] is the 1-based position of a prime in the ordered prime list.
//! A [`Progression`] is never materialised: it is stored as its first two terms
//! plus the number of times the pair was extended, and regenerated on demand.

use std::fmt;
use std::num::NonZeroUsize;

/// 1-based position of a prime within the prime list (rank 1 = 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(NonZeroUsize);

impl Rank {
    /// The smallest rank.
    pub const FIRST: Rank = Rank(NonZeroUsize::MIN);

    /// Create a rank, returning `None` for 0.
    #[inline]
    pub fn new(rank: usize) -> Option<Self> {
        NonZeroUsize::new(rank).map(Rank)
    }

    /// The 1-based rank value.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based index into the prime list.
    #[inline]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }

    /// The following rank.
    #[inline]
    pub fn next(self) -> Self {
        Rank(self.0.saturating_add(1))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An arithmetic progression of primes, described by its first two terms.
///
/// `extensions` is the chain length: the pair `(first, second)` followed by
/// `extensions - 1` further terms, i.e. `extensions + 1` terms in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub first: u32,
    pub second: u32,
    pub extensions: u32,
}

impl Progression {
    pub fn new(first: u32, second: u32, extensions: u32) -> Self {
        debug_assert!(first < second, "progression must be increasing");
        Self {
            first,
            second,
            extensions,
        }
    }

    /// Number of terms, `extensions + 1`.
    pub fn len(&self) -> usize {
        self.extensions as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn common_difference(&self) -> u32 {
        self.second - self.first
    }

    /// Final term of the progression.
    pub fn last(&self) -> u64 {
        self.first as u64 + self.common_difference() as u64 * self.extensions as u64
    }

    /// Iterate over the terms in increasing order.
    pub fn terms(&self) -> Terms {
        Terms {
            window: Some((self.first as u64, self.second as u64)),
            remaining: self.extensions,
        }
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, term) in self.terms().enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

/// Iterator over the terms of a [`Progression`].
///
/// The two-term window slides forward by one position per step: the next term
/// is `2 * second - first`, and the new first term is the average of the old
/// first term and the new term.
#[derive(Debug, Clone)]
pub struct Terms {
    window: Option<(u64, u64)>,
    remaining: u32,
}

impl Iterator for Terms {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let (first, second) = self.window?;
        if self.remaining == 0 {
            self.window = None;
            return Some(first);
        }
        self.remaining -= 1;
        let next = 2 * second - first;
        self.window = Some(((first + next) / 2, next));
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.window {
            Some(_) => self.remaining as usize + 1,
            None => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Terms {}
