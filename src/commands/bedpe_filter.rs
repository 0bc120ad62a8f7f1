//! BEDPE filtering by insert size.

use super::{for_each_record, Outcome, TransformStats};
use crate::bed::{LineReader, Result};
use crate::streaming::parsing::{parse_coordinate, require_columns};
use log::info;
use std::io::{Read, Write};

/// BEDPE filter command configuration.
#[derive(Debug, Clone, Default)]
pub struct BedpeFilterCommand {
    /// Records with a larger insert size are dropped. `None` keeps everything.
    pub maximum_insert_size: Option<i64>,
}

/// Insert size between the two mates of a pair.
///
/// Measured from the end of the leftmost mate to the start of the other,
/// as a signed difference: overlapping mates give a negative size.
#[inline]
pub fn insert_size(start1: i64, end1: i64, start2: i64, end2: i64) -> i64 {
    if start1 > start2 {
        start1.saturating_sub(end2)
    } else {
        start2.saturating_sub(end1)
    }
}

impl BedpeFilterCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maximum_insert_size(mut self, maximum: Option<i64>) -> Self {
        self.maximum_insert_size = maximum;
        self
    }

    /// Check a split record against the filter.
    pub fn passes(&self, fields: &[&str], line: usize) -> Result<bool> {
        let Some(maximum) = self.maximum_insert_size else {
            return Ok(true);
        };
        require_columns(fields, 6, line)?;
        let start1 = parse_coordinate(fields[1], "start1", line)?;
        let end1 = parse_coordinate(fields[2], "end1", line)?;
        let start2 = parse_coordinate(fields[4], "start2", line)?;
        let end2 = parse_coordinate(fields[5], "end2", line)?;
        Ok(insert_size(start1, end1, start2, end2) <= maximum)
    }

    /// Streaming filter of every data line.
    pub fn run<R: Read, W: Write>(
        &self,
        reader: LineReader<R>,
        output: W,
    ) -> Result<TransformStats> {
        let stats = for_each_record(reader, output, |fields, record, line, writer| {
            if self.passes(fields, line)? {
                writer.write_line(record)?;
                Ok(Outcome::Written)
            } else {
                Ok(Outcome::Discarded)
            }
        })?;

        info!("removed {} lines from file", stats.records_discarded);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bed::BedError;

    fn run(cmd: &BedpeFilterCommand, content: &str) -> (String, TransformStats) {
        let mut output = Vec::new();
        let stats = cmd
            .run(LineReader::new(content.as_bytes()), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn test_insert_size() {
        assert_eq!(insert_size(100, 200, 500, 600), 300);
        assert_eq!(insert_size(500, 600, 100, 200), 300);
        assert_eq!(insert_size(100, 300, 150, 400), -150);
    }

    #[test]
    fn test_filter_maximum_insert_size() {
        let cmd = BedpeFilterCommand::new().with_maximum_insert_size(Some(400));
        let content = "chr1\t100\t200\tchr1\t500\t600\tkeep\t0\t+\t-\n\
                       chr1\t100\t200\tchr1\t650\t750\tdrop\t0\t+\t-\n\
                       chr1\t700\t800\tchr1\t100\t300\tkeep2\t0\t-\t+\n";
        let (out, stats) = run(&cmd, content);
        assert_eq!(
            out,
            "chr1\t100\t200\tchr1\t500\t600\tkeep\t0\t+\t-\n\
             chr1\t700\t800\tchr1\t100\t300\tkeep2\t0\t-\t+\n"
        );
        assert_eq!(stats.records_discarded, 1);
        assert_eq!(stats.records_written, 2);
    }

    #[test]
    fn test_filter_boundary_is_inclusive() {
        let cmd = BedpeFilterCommand::new().with_maximum_insert_size(Some(300));
        let (out, _) = run(&cmd, "chr1\t100\t200\tchr1\t500\t600\n");
        assert_eq!(out, "chr1\t100\t200\tchr1\t500\t600\n");
    }

    #[test]
    fn test_filter_negative_insert_size_passes() {
        let cmd = BedpeFilterCommand::new().with_maximum_insert_size(Some(1));
        let (out, stats) = run(&cmd, "chr1\t100\t300\tchr1\t150\t400\n");
        assert_eq!(out, "chr1\t100\t300\tchr1\t150\t400\n");
        assert_eq!(stats.records_discarded, 0);
    }

    #[test]
    fn test_no_maximum_keeps_everything() {
        let content = "#c\nanything\tgoes\nchr1\t1\t2\tchr1\t1000000\t2000000\n";
        let (out, stats) = run(&BedpeFilterCommand::new(), content);
        assert_eq!(out, content);
        assert_eq!(stats.records_read, 2);
        assert_eq!(stats.records_discarded, 0);
    }

    #[test]
    fn test_blank_line_without_maximum_is_kept() {
        let content = "chr1\t1\t2\tchr1\t5\t6\n\n";
        let (out, stats) = run(&BedpeFilterCommand::new(), content);
        assert_eq!(out, content);
        assert_eq!(stats.records_read, 2);
    }

    #[test]
    fn test_blank_line_with_maximum_is_malformed() {
        let cmd = BedpeFilterCommand::new().with_maximum_insert_size(Some(10));
        let mut output = Vec::new();
        let result = cmd.run(LineReader::new("#c\n\n".as_bytes()), &mut output);
        assert!(matches!(
            result,
            Err(BedError::Malformed {
                line: 2,
                expected: 6,
                found: 1
            })
        ));
    }

    #[test]
    fn test_comments_never_filtered() {
        let cmd = BedpeFilterCommand::new().with_maximum_insert_size(Some(10));
        let (out, _) = run(
            &cmd,
            "#comment 1\nchr1\t100\t200\tchr1\t500\t600\n#comment 2\n",
        );
        assert_eq!(out, "#comment 1\n#comment 2\n");
    }

    #[test]
    fn test_filter_parse_error() {
        let cmd = BedpeFilterCommand::new().with_maximum_insert_size(Some(10));
        let mut output = Vec::new();
        let result = cmd.run(
            LineReader::new("chr1\t1\t2\tchr1\tx\t4\n".as_bytes()),
            &mut output,
        );
        assert!(matches!(result, Err(BedError::Parse { line: 1, .. })));
    }
}
