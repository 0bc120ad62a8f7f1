//! FASTA to chromosome sizes conversion.
//!
//! Every `>` header opens a sequence named by the rest of the header
//! line; every other line adds its character count to the open sequence.

use crate::bed::{LineReader, Result};
use crate::streaming::output::RecordWriter;
use std::fmt;
use std::io::{Read, Write};

/// Counts for a FASTA sizing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastaSizesStats {
    /// Sequences (headers) seen
    pub sequences: usize,
    /// Total residues across all sequences
    pub bases: u64,
}

impl fmt::Display for FastaSizesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequences: {}, Bases: {}", self.sequences, self.bases)
    }
}

/// Running state of the sizer.
#[derive(Debug, Default)]
struct SequenceSizer {
    current: Option<(String, u64)>,
}

impl SequenceSizer {
    /// Feed one line; returns the sequence closed by a header, if any.
    fn feed(&mut self, line: &str) -> Option<(String, u64)> {
        match line.strip_prefix('>') {
            Some(name) => self.current.replace((name.to_string(), 0)),
            None => {
                if let Some((_, length)) = self.current.as_mut() {
                    *length += line.chars().count() as u64;
                }
                None
            }
        }
    }

    fn finish(self) -> Option<(String, u64)> {
        self.current
    }
}

/// FASTA to sizes conversion command.
#[derive(Debug, Clone, Default)]
pub struct FastaSizesCommand;

impl FastaSizesCommand {
    pub fn new() -> Self {
        Self
    }

    /// Stream `name\tlength` lines in header order.
    ///
    /// Residue lines before the first header are ignored.
    pub fn run<R: Read, W: Write>(
        &self,
        mut reader: LineReader<R>,
        output: W,
    ) -> Result<FastaSizesStats> {
        let mut stats = FastaSizesStats::default();
        let mut writer = RecordWriter::new(output);
        let mut sizer = SequenceSizer::default();

        while let Some((_, line)) = reader.read_line()? {
            if let Some((name, length)) = sizer.feed(line) {
                write_sequence(&mut writer, &mut stats, &name, length)?;
            }
        }
        if let Some((name, length)) = sizer.finish() {
            write_sequence(&mut writer, &mut stats, &name, length)?;
        }

        writer.flush()?;
        Ok(stats)
    }
}

fn write_sequence<W: Write>(
    writer: &mut RecordWriter<W>,
    stats: &mut FastaSizesStats,
    name: &str,
    length: u64,
) -> Result<()> {
    stats.sequences += 1;
    stats.bases += length;
    writer.write_size(name, length)
}
