// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line-oriented text output.
//!
//! One line per progression, terms separated by a single space, followed by a
//! final `Total: <count>` line.

use std::io::{self, Write};

use crate::engine::ProgressionSink;
use crate::progression::Progression;

/// Writes progressions to any [`Write`] implementation.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    writer: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the progression starting `first, second` with `extensions` terms
    /// after the first.
    ///
    /// The two-term window is shifted along the progression: the next term is
    /// `2 * second - first`, and the new first term is the average of the old
    /// first term and the next term.
    pub fn emit(&mut self, first: u32, second: u32, extensions: u32) -> io::Result<()> {
        let (mut first, mut second) = (first as u64, second as u64);
        write!(self.writer, "{}", first)?;
        for _ in 0..extensions {
            write!(self.writer, " {}", second)?;
            second = 2 * second - first;
            first = (first + second) / 2;
        }
        writeln!(self.writer)
    }

    /// Write the `Total:` trailer and flush.
    pub fn finish(&mut self, total: u64) -> io::Result<()> {
        writeln!(self.writer, "Total: {}", total)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressionSink for Emitter<W> {
    fn progression(&mut self, progression: &Progression) -> io::Result<()> {
        self.emit(progression.first, progression.second, progression.extensions)
    }

    fn finish(&mut self, total: u64) -> io::Result<()> {
        Emitter::finish(self, total)
    }
}
