// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of maximal prime progressions.
//!
//! The enumerator visits every rank pair `(i, j)` with `i < j`, in increasing
//! `i` then increasing `j`. A pair that is still unresolved when visited is the
//! start of a progression: had `2a - b` been prime, the pair ending at `a` would
//! have been visited earlier and resolved this one as part of its chain.
//! Unresolved pairs whose chain length exceeds 1 are therefore exactly the
//! maximal progressions of three or more terms.
//!
//! Each progression found is handed to a [`ProgressionSink`].
//!
//! # Example
//!
//! ```
//! use prime_progressions::context::SearchContext;
//! use prime_progressions::engine::Enumerator;
//! use prime_progressions::Progression;
//!
//! let mut ctx = SearchContext::new(20).unwrap();
//! let mut found: Vec<Progression> = Vec::new();
//! let total = Enumerator::new().run(&mut ctx, &mut found).unwrap();
//!
//! assert_eq!(total, 5);
//! assert_eq!(found[0].to_string(), "3 5 7");
//! ```

use std::io;

use tracing::{debug, info, trace};

use crate::context::SearchContext;
use crate::progression::{Progression, Rank};
use crate::state::Counters;

/// Receiver for the progressions found by the [`Enumerator`].
pub trait ProgressionSink {
    /// Called once per progression, in enumeration order.
    fn progression(&mut self, progression: &Progression) -> io::Result<()>;

    /// Called once after the last progression with the total count.
    fn finish(&mut self, _total: u64) -> io::Result<()> {
        Ok(())
    }
}

impl ProgressionSink for Vec<Progression> {
    fn progression(&mut self, progression: &Progression) -> io::Result<()> {
        self.push(*progression);
        Ok(())
    }
}

impl<S: ProgressionSink + ?Sized> ProgressionSink for &mut S {
    fn progression(&mut self, progression: &Progression) -> io::Result<()> {
        (**self).progression(progression)
    }

    fn finish(&mut self, total: u64) -> io::Result<()> {
        (**self).finish(total)
    }
}

/// Drives the chain memo over all rank pairs.
#[derive(Debug, Default)]
pub struct Enumerator {
    found: u64,
}

impl Enumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit all rank pairs, report each maximal progression, and return the
    /// number reported.
    ///
    /// The sink's `finish` is called with the total before returning.
    pub fn run<S: ProgressionSink>(
        mut self,
        ctx: &mut SearchContext,
        mut sink: S,
    ) -> io::Result<u64> {
        let prime_count = ctx.memo.prime_count();
        debug!(prime_count, "enumerating rank pairs");

        let ranks: Vec<Rank> = ctx.memo.ranks().collect();
        for (n, &i) in ranks.iter().enumerate() {
            for &j in &ranks[n + 1..] {
                self.visit(ctx, &mut sink, i, j)?;
            }
        }

        info!(
            progressions = self.found,
            longest = ctx.statistics.longest_chain() + 1,
            cells = ctx.statistics.get(Counters::CellsResolved),
            "enumeration complete"
        );
        sink.finish(self.found)?;
        Ok(self.found)
    }

    fn visit<S: ProgressionSink>(
        &mut self,
        ctx: &mut SearchContext,
        sink: &mut S,
        i: Rank,
        j: Rank,
    ) -> io::Result<()> {
        ctx.statistics.increment_counter(Counters::PairsVisited);
        if ctx.is_resolved(i, j) {
            return Ok(());
        }
        let length = ctx.chain_length(i, j);
        if length > 1 {
            let (first, second) = ctx.pair(i, j);
            let progression = Progression::new(first, second, length);
            trace!(%progression, "found");
            sink.progression(&progression)?;
            ctx.statistics.increment_counter(Counters::Progressions);
            self.found += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enumerate(bound: u32) -> (Vec<Progression>, u64) {
        let mut ctx = SearchContext::new(bound).unwrap();
        let mut found = Vec::new();
        let total = Enumerator::new().run(&mut ctx, &mut found).unwrap();
        (found, total)
    }

    #[test]
    fn test_first_progression_is_three_five_seven() {
        let (found, total) = enumerate(1000);
        assert_eq!(found[0], Progression::new(3, 5, 2));
        assert_eq!(total as usize, found.len());
    }

    #[test]
    fn test_bound_seven() {
        let (found, total) = enumerate(7);
        assert_eq!(found, vec![Progression::new(3, 5, 2)]);
        assert_eq!(total, 1);
    }

    #[test]
    fn test_no_progressions_below_seven() {
        for bound in 2..7 {
            let (found, total) = enumerate(bound);
            assert!(found.is_empty(), "bound {}", bound);
            assert_eq!(total, 0);
        }
    }

    #[test]
    fn test_tails_are_not_reported() {
        // 5, 11, 17, 23, 29 is reported once; 11, 17, 23, 29 is not.
        let (found, _) = enumerate(100);
        assert!(found.contains(&Progression::new(5, 11, 4)));
        assert!(!found.iter().any(|p| p.first == 11 && p.second == 17));
        assert!(!found.iter().any(|p| p.first == 17 && p.second == 23));
    }

    #[test]
    fn test_enumeration_order() {
        let (found, _) = enumerate(1000);
        let keys: Vec<(u32, u32)> = found.iter().map(|p| (p.first, p.second)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_every_pair_is_visited_and_resolved() {
        let mut ctx = SearchContext::new(200).unwrap();
        Enumerator::new().run(&mut ctx, Vec::<Progression>::new()).unwrap();
        let n = ctx.memo.prime_count() as u64;
        assert_eq!(ctx.statistics.get(Counters::PairsVisited), n * (n - 1) / 2);
        assert_eq!(
            ctx.statistics.get(Counters::CellsResolved),
            ctx.statistics.get(Counters::PairsVisited)
        );
    }

    struct Counting {
        seen: u64,
        finished: Option<u64>,
    }

    impl ProgressionSink for Counting {
        fn progression(&mut self, _progression: &Progression) -> io::Result<()> {
            self.seen += 1;
            Ok(())
        }

        fn finish(&mut self, total: u64) -> io::Result<()> {
            self.finished = Some(total);
            Ok(())
        }
    }

    #[test]
    fn test_sink_receives_total() {
        let mut ctx = SearchContext::new(1000).unwrap();
        let mut sink = Counting {
            seen: 0,
            finished: None,
        };
        let total = Enumerator::new().run(&mut ctx, &mut sink).unwrap();
        assert_eq!(sink.finished, Some(total));
        assert_eq!(sink.seen, total);
    }
}
