// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for input validation and output.

use thiserror::Error;

/// Errors raised at the boundary, before any progression is printed.
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// The input could not be read as an integer.
    #[error("expected a single integer on input, found {input:?}")]
    InvalidInput { input: String },

    /// The table size parameter was negative.
    #[error("table size must be non-negative, found {value}")]
    NegativeTableSize { value: i64 },

    /// The declared table size cannot hold every prime rank below the bound.
    #[error("table size {table_size} is smaller than the prime count {prime_count}")]
    TableTooSmall {
        table_size: usize,
        prime_count: usize,
    },

    /// The sieve needs at least one prime to work with.
    #[error("bound must be at least 2, found {bound}")]
    BoundTooSmall { bound: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProgressionError>;
