//! Command implementations for bedkit.

pub mod bedpe_filter;
pub mod bedpe_to_bed;
pub mod fasta_sizes;
pub mod move_annotations;
pub mod resize;

pub use bedpe_filter::BedpeFilterCommand;
pub use bedpe_to_bed::BedpeToBedCommand;
pub use fasta_sizes::{FastaSizesCommand, FastaSizesStats};
pub use move_annotations::MoveCommand;
pub use resize::ResizeCommand;

use crate::bed::{Line, LineReader, Result};
use crate::streaming::output::RecordWriter;
use crate::streaming::parsing::split_fields;
use std::fmt;
use std::io::{Read, Write};

/// Line counts for a record transform run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Data lines read
    pub records_read: usize,
    /// Data lines written
    pub records_written: usize,
    /// Data lines dropped by a filter
    pub records_discarded: usize,
    /// Metadata lines copied through
    pub passthrough_lines: usize,
}

impl fmt::Display for TransformStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read: {}, Written: {}, Discarded: {}, Passed through: {}",
            self.records_read,
            self.records_written,
            self.records_discarded,
            self.passthrough_lines
        )
    }
}

/// What a record handler did with one data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Written,
    Discarded,
}

/// Drive a record handler over every data line of `reader`.
///
/// Metadata lines are copied to `output` unchanged; every other line,
/// empty ones included, goes to the handler. The handler
/// receives the split fields, the raw line and its line number, and writes
/// whatever it keeps. Output is flushed once the stream is exhausted.
pub(crate) fn for_each_record<R, W, F>(
    mut reader: LineReader<R>,
    output: W,
    mut handler: F,
) -> Result<TransformStats>
where
    R: Read,
    W: Write,
    F: FnMut(&[&str], &str, usize, &mut RecordWriter<W>) -> Result<Outcome>,
{
    let mut stats = TransformStats::default();
    let mut writer = RecordWriter::new(output);

    while let Some((line_number, line)) = reader.read_line()? {
        match Line::classify(line) {
            Line::Metadata(_) => {
                writer.write_line(line)?;
                stats.passthrough_lines += 1;
            }
            Line::Record(record) => {
                stats.records_read += 1;
                let fields = split_fields(record);
                match handler(&fields, record, line_number, &mut writer)? {
                    Outcome::Written => stats.records_written += 1,
                    Outcome::Discarded => stats.records_discarded += 1,
                }
            }
        }
    }

    writer.flush()?;
    Ok(stats)
}
