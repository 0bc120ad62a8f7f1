//! Interval and strand types for annotation records.

use crate::bed::Result;
use crate::streaming::parsing::{parse_coordinate, require_columns};

/// Column holding the start coordinate.
pub const START_COLUMN: usize = 1;

/// Column holding the end coordinate.
pub const END_COLUMN: usize = 2;

/// Column holding the strand in BED6 and wider records.
pub const STRAND_COLUMN: usize = 5;

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Plus,
    Minus,
    Unknown,
}

impl Strand {
    /// Parse a strand column. Only the exact text `+` or `-` is oriented.
    pub fn from_field(field: &str) -> Self {
        match field {
            "+" => Strand::Plus,
            "-" => Strand::Minus,
            _ => Strand::Unknown,
        }
    }
}

/// Coordinates of an annotation record.
///
/// Start and end are signed: moves can push them below zero, and no
/// `start <= end` ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
    /// `None` when the record has fewer than six columns.
    pub strand: Option<Strand>,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(start: i64, end: i64, strand: Option<Strand>) -> Self {
        Self { start, end, strand }
    }

    /// Read coordinates and strand from split record fields.
    pub fn from_fields(fields: &[&str], line: usize) -> Result<Self> {
        require_columns(fields, 3, line)?;
        let start = parse_coordinate(fields[START_COLUMN], "start", line)?;
        let end = parse_coordinate(fields[END_COLUMN], "end", line)?;
        let strand = fields.get(STRAND_COLUMN).map(|s| Strand::from_field(s));
        Ok(Self { start, end, strand })
    }

    /// Returns true only for records that carry a `-` strand column.
    #[inline]
    pub fn is_negative_strand(&self) -> bool {
        self.strand == Some(Strand::Minus)
    }

    /// Shift both ends by `distance`, or `None` on overflow.
    #[inline]
    pub fn shift(&self, distance: i64) -> Option<Self> {
        Some(Self {
            start: self.start.checked_add(distance)?,
            end: self.end.checked_add(distance)?,
            strand: self.strand,
        })
    }

    /// Returns true if either end is below zero.
    #[inline]
    pub fn has_negative_coordinate(&self) -> bool {
        self.start < 0 || self.end < 0
    }
}
