//! Move command implementation.
//!
//! Shifts annotations by a signed distance, optionally in the opposite
//! direction on the negative strand.

use super::{for_each_record, Outcome, TransformStats};
use crate::bed::{BedError, LineReader, Result};
use crate::interval::Interval;
use log::{debug, info};
use std::io::{Read, Write};

/// Move command configuration.
#[derive(Debug, Clone)]
pub struct MoveCommand {
    /// Distance to shift, may be negative
    pub distance: i64,
    /// Shift by `-distance` for records on the negative strand
    pub reverse_for_negative_strand: bool,
    /// Drop records whose shifted start or end falls below zero
    pub discard_negative: bool,
}

impl MoveCommand {
    pub fn new(distance: i64) -> Self {
        Self {
            distance,
            reverse_for_negative_strand: false,
            discard_negative: false,
        }
    }

    pub fn with_reverse_for_negative_strand(mut self, reverse: bool) -> Self {
        self.reverse_for_negative_strand = reverse;
        self
    }

    pub fn with_discard_negative(mut self, discard: bool) -> Self {
        self.discard_negative = discard;
        self
    }

    /// Shift a single interval, or `None` on overflow.
    #[inline]
    pub fn shift(&self, interval: &Interval) -> Option<Interval> {
        if self.reverse_for_negative_strand && interval.is_negative_strand() {
            interval.shift(self.distance.checked_neg()?)
        } else {
            interval.shift(self.distance)
        }
    }

    /// Streaming move of every data line.
    pub fn run<R: Read, W: Write>(
        &self,
        reader: LineReader<R>,
        output: W,
    ) -> Result<TransformStats> {
        let stats = for_each_record(reader, output, |fields, record, line, writer| {
            let interval = Interval::from_fields(fields, line)?;
            let moved = self
                .shift(&interval)
                .ok_or(BedError::Overflow { line })?;

            if self.discard_negative && moved.has_negative_coordinate() {
                debug!("Discarding annotation {}", record);
                return Ok(Outcome::Discarded);
            }

            writer.write_with_coordinates(fields, moved.start, moved.end)?;
            Ok(Outcome::Written)
        })?;

        if stats.records_discarded > 0 {
            info!(
                "discarded {} annotations with negative coordinates",
                stats.records_discarded
            );
        }
        Ok(stats)
    }
}
