//! Plain-text reporting of comparison results

use crate::compare::DiffStats;
use std::io::{self, Write};

/// Writes the sum and mean, one per line, using default float formatting
pub struct Reporter<W: Write> {
    writer: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Reporter { writer }
    }

    pub fn report(&mut self, stats: &DiffStats) -> io::Result<()> {
        writeln!(self.writer, "{}", stats.sum)?;
        writeln!(self.writer, "{}", stats.mean)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
