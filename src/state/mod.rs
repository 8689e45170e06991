// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, fill-once).
//!
//! - Chain table: memoized chain lengths per rank pair
//! - Statistics: counters updated as the search runs
//!
//! The only mutation after allocation is filling an unresolved cell.

pub mod chain;
pub mod statistics;

pub use chain::{ChainMemo, ChainTable};
pub use statistics::{Counters, Statistics};
