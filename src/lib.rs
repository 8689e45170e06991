// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of maximal arithmetic progressions of primes.
//!
//! Among the primes up to a bound N, every progression `p, p + d, p + 2d, ...`
//! of three or more primes that cannot be extended in either direction is
//! printed on its own line, followed by a `Total:` line.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once by the sieve and never changed:
//! - Primality table for `0..=N`
//! - Prime list in rank order, and the reverse map from value to rank
//!
//! ## Tier 2: DYNAMIC Data (Fill-once)
//!
//! - Chain table: for each rank pair `(i, j)`, how many times the pair
//!   `prime(i), prime(j)` extends while `2 * prime(j) - prime(i)` stays prime
//! - Statistics counters
//!
//! # Pipeline
//!
//! 1. **Sieve** ([`memo::PrimeSieve`]): primes and ranks up to N
//! 2. **ChainMemo** ([`state::ChainMemo`]): memoized chain length per rank pair
//! 3. **Enumerator** ([`engine::Enumerator`]): visits pairs in rank order and
//!    reports the unresolved ones with chain length above 1
//! 4. **Emitter** ([`output::Emitter`]): regenerates and prints each progression
//!
//! # Example
//!
//! ```
//! use prime_progressions::{run, Config};
//!
//! let mut out = Vec::new();
//! let total = run(&Config::new(10, 4), &mut out).unwrap();
//! assert_eq!(total, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "3 5 7\nTotal: 1\n");
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod memo;
pub mod output;
pub mod progression;
pub mod state;

use std::io::Write;

use tracing::info;

// Re-export commonly used types
pub use config::{Config, DEFAULT_BOUND};
pub use context::SearchContext;
pub use engine::{Enumerator, ProgressionSink};
pub use errors::{ProgressionError, Result};
pub use output::Emitter;
pub use progression::{Progression, Rank};

/// Run the whole pipeline, writing progressions and the total to `writer`.
///
/// The table size is validated against the sieve before anything is written.
pub fn run<W: Write>(config: &Config, writer: W) -> Result<u64> {
    let mut ctx = SearchContext::new(config.bound)?;
    config.validate(&ctx.memo)?;
    info!(
        bound = config.bound,
        table_size = config.table_size,
        primes = ctx.memo.prime_count(),
        "searching"
    );
    let total = Enumerator::new().run(&mut ctx, Emitter::new(writer))?;
    Ok(total)
}
