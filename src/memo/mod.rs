// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! - Primality table for `0..=bound`
//! - Ordered prime list and the value-to-rank reverse map

pub mod sieve;

pub use sieve::PrimeSieve;
