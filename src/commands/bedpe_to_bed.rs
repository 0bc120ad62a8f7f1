//! BEDPE to BED conversion.
//!
//! Keeps the first mate's coordinates and the pair's name, score and
//! first strand: output columns are input columns 0, 1, 2, 6, 7 and 8.

use super::{for_each_record, Outcome, TransformStats};
use crate::bed::{LineReader, Result};
use crate::streaming::parsing::require_columns;
use std::io::{Read, Write};

/// Input columns copied to the BED record, in output order.
pub const BED_COLUMNS: [usize; 6] = [0, 1, 2, 6, 7, 8];

/// BEDPE to BED conversion command.
#[derive(Debug, Clone, Default)]
pub struct BedpeToBedCommand;

impl BedpeToBedCommand {
    pub fn new() -> Self {
        Self
    }

    /// Streaming conversion of every data line.
    pub fn run<R: Read, W: Write>(
        &self,
        reader: LineReader<R>,
        output: W,
    ) -> Result<TransformStats> {
        for_each_record(reader, output, |fields, _, line, writer| {
            require_columns(fields, 9, line)?;
            let projected = BED_COLUMNS.map(|i| fields[i]);
            writer.write_fields(&projected)?;
            Ok(Outcome::Written)
        })
    }
}
