// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the chain memo
//! and the enumerator as they work.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Rank pairs looked at by the enumerator.
    PairsVisited,
    /// Chain table cells filled.
    CellsResolved,
    /// Lookups answered from an already filled cell.
    CacheHits,
    /// Progressions of three or more terms reported.
    Progressions,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    longest_chain: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn record_chain(&mut self, length: u32) {
        self.longest_chain = self.longest_chain.max(length);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Largest chain length resolved so far.
    pub fn longest_chain(&self) -> u32 {
        self.longest_chain
    }
}
