// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration: the fixed bound and the table size read from input.
//!
//! The table size is the declared extent of the chain table. The table itself is
//! always allocated from the prime count the sieve produces; the declared size is
//! only checked against it, so a size too small for the primes below the bound is
//! rejected instead of leaving part of the table unusable.

use std::io::Read;

use crate::errors::{ProgressionError, Result};
use crate::memo::PrimeSieve;

/// Upper bound on the integers searched.
pub const DEFAULT_BOUND: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Largest integer considered for primality.
    pub bound: u32,
    /// Declared chain table size, read from input.
    pub table_size: usize,
}

impl Config {
    pub fn new(bound: u32, table_size: usize) -> Self {
        Self { bound, table_size }
    }

    /// Parse the table size from `input`, which must hold exactly one integer
    /// (surrounding whitespace is ignored).
    pub fn parse(input: &str, bound: u32) -> Result<Self> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ProgressionError::InvalidInput {
                input: trimmed.to_string(),
            })?;
        let table_size =
            usize::try_from(value).map_err(|_| ProgressionError::NegativeTableSize { value })?;
        Ok(Self::new(bound, table_size))
    }

    /// Read all of `reader` and parse it with [`Config::parse`].
    pub fn read_from<R: Read>(mut reader: R, bound: u32) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input, bound)
    }

    /// Check the declared table size against the primes the sieve found.
    pub fn validate(&self, sieve: &PrimeSieve) -> Result<()> {
        if self.table_size < sieve.prime_count() {
            return Err(ProgressionError::TableTooSmall {
                table_size: self.table_size,
                prime_count: sieve.prime_count(),
            });
        }
        Ok(())
    }
}
