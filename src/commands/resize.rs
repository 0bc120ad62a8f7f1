//! Resize command implementation.
//!
//! Sets every annotation to a fixed size by moving one of its ends while
//! the other stays anchored.

use super::{for_each_record, Outcome, TransformStats};
use crate::bed::{BedError, LineReader, Result};
use crate::interval::{Interval, END_COLUMN, START_COLUMN};
use std::io::{Read, Write};

/// End of the annotation that keeps its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Keep start, set `end = start + size`.
    Start,
    /// Keep end, set `start = end - size`.
    End,
}

/// Resize command configuration.
#[derive(Debug, Clone)]
pub struct ResizeCommand {
    /// New annotation size
    pub size: i64,
    /// Move the start instead of the end
    pub change_start: bool,
    /// Swap the moved end for records on the negative strand
    pub reverse_for_negative_strand: bool,
}

impl ResizeCommand {
    pub fn new(size: i64) -> Self {
        Self {
            size,
            change_start: false,
            reverse_for_negative_strand: false,
        }
    }

    pub fn with_change_start(mut self, change_start: bool) -> Self {
        self.change_start = change_start;
        self
    }

    pub fn with_reverse_for_negative_strand(mut self, reverse: bool) -> Self {
        self.reverse_for_negative_strand = reverse;
        self
    }

    /// Pick the anchored end for a record.
    ///
    /// | change_start | reversed `-` strand | anchor |
    /// |--------------|---------------------|--------|
    /// | false        | false               | Start  |
    /// | true         | false               | End    |
    /// | false        | true                | End    |
    /// | true         | true                | Start  |
    #[inline]
    pub fn anchor(&self, interval: &Interval) -> Anchor {
        let reversed = self.reverse_for_negative_strand && interval.is_negative_strand();
        match (self.change_start, reversed) {
            (false, false) => Anchor::Start,
            (true, false) => Anchor::End,
            (false, true) => Anchor::End,
            (true, true) => Anchor::Start,
        }
    }

    /// Resize a single interval, or `None` on overflow.
    #[inline]
    pub fn resize(&self, interval: &Interval) -> Option<Interval> {
        let mut resized = *interval;
        match self.anchor(interval) {
            Anchor::Start => resized.end = interval.start.checked_add(self.size)?,
            Anchor::End => resized.start = interval.end.checked_sub(self.size)?,
        }
        Some(resized)
    }

    /// Streaming resize of every data line.
    ///
    /// Only the moved coordinate is re-formatted; the anchored one keeps
    /// its input text.
    pub fn run<R: Read, W: Write>(
        &self,
        reader: LineReader<R>,
        output: W,
    ) -> Result<TransformStats> {
        for_each_record(reader, output, |fields, _, line, writer| {
            let interval = Interval::from_fields(fields, line)?;
            let resized = self
                .resize(&interval)
                .ok_or(BedError::Overflow { line })?;
            match self.anchor(&interval) {
                Anchor::Start => writer.write_with_coordinate(fields, END_COLUMN, resized.end)?,
                Anchor::End => writer.write_with_coordinate(fields, START_COLUMN, resized.start)?,
            }
            Ok(Outcome::Written)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Strand;

    fn run(cmd: &ResizeCommand, content: &str) -> String {
        let mut output = Vec::new();
        cmd.run(LineReader::new(content.as_bytes()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_resize_end() {
        let cmd = ResizeCommand::new(3);
        let out = run(&cmd, "chr1\t100\t200\tgene\t0\t+\nchr2\t10\t20\n");
        assert_eq!(out, "chr1\t100\t103\tgene\t0\t+\nchr2\t10\t13\n");
    }

    #[test]
    fn test_resize_change_start() {
        let cmd = ResizeCommand::new(3).with_change_start(true);
        let out = run(&cmd, "chr1\t100\t200\tgene\t0\t-\n");
        assert_eq!(out, "chr1\t197\t200\tgene\t0\t-\n");
    }

    #[test]
    fn test_resize_reverse_negative_strand() {
        let cmd = ResizeCommand::new(3).with_reverse_for_negative_strand(true);
        let out = run(
            &cmd,
            "chr1\t100\t200\ta\t0\t+\nchr1\t100\t200\tb\t0\t-\nchr1\t100\t200\tc\t0\t.\n",
        );
        assert_eq!(
            out,
            "chr1\t100\t103\ta\t0\t+\nchr1\t197\t200\tb\t0\t-\nchr1\t100\t103\tc\t0\t.\n"
        );
    }

    #[test]
    fn test_resize_change_start_reverse_negative_strand() {
        let cmd = ResizeCommand::new(3)
            .with_change_start(true)
            .with_reverse_for_negative_strand(true);
        let out = run(&cmd, "chr1\t100\t200\ta\t0\t+\nchr1\t100\t200\tb\t0\t-\n");
        assert_eq!(out, "chr1\t197\t200\ta\t0\t+\nchr1\t100\t103\tb\t0\t-\n");
    }

    #[test]
    fn test_resize_reverse_without_strand_column() {
        let cmd = ResizeCommand::new(3).with_reverse_for_negative_strand(true);
        let out = run(&cmd, "chr1\t100\t200\ta\t-\n");
        assert_eq!(out, "chr1\t100\t103\ta\t-\n");
    }

    #[test]
    fn test_resize_keeps_anchored_text() {
        let content = "chr1\t0100\t200\nchr1\t+5\t9\n";
        assert_eq!(
            run(&ResizeCommand::new(3), content),
            "chr1\t0100\t103\nchr1\t+5\t8\n"
        );
        assert_eq!(
            run(&ResizeCommand::new(3).with_change_start(true), "chr1\t100\t0200\n"),
            "chr1\t197\t0200\n"
        );
    }

    #[test]
    fn test_resize_blank_line_is_malformed() {
        let cmd = ResizeCommand::new(3);
        let mut output = Vec::new();
        let result = cmd.run(
            LineReader::new("chr1\t1\t2\n\nchr1\t4\t5\n".as_bytes()),
            &mut output,
        );
        assert!(matches!(
            result,
            Err(BedError::Malformed {
                line: 2,
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn test_resize_metadata_passthrough() {
        let cmd = ResizeCommand::new(3);
        let content = "browser position chr7:127471196-127495720\ntrack name=\"my track\"\n#comment 1\nchr1\t100\t200\n#comment 2\n";
        let out = run(&cmd, content);
        assert_eq!(
            out,
            "browser position chr7:127471196-127495720\ntrack name=\"my track\"\n#comment 1\nchr1\t100\t103\n#comment 2\n"
        );
    }

    #[test]
    fn test_resize_preserves_extra_columns() {
        let cmd = ResizeCommand::new(10);
        let out = run(&cmd, "chr1\t5\t6\t\tx\t+\t7\t8\t\n");
        assert_eq!(out, "chr1\t5\t15\t\tx\t+\t7\t8\t\n");
    }

    #[test]
    fn test_resize_parse_error() {
        let cmd = ResizeCommand::new(3);
        let mut output = Vec::new();
        let result = cmd.run(
            LineReader::new("chr1\t1\t2\nchr1\tabc\t200\n".as_bytes()),
            &mut output,
        );
        assert!(matches!(result, Err(BedError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_resize_too_few_columns() {
        let cmd = ResizeCommand::new(3);
        let mut output = Vec::new();
        let result = cmd.run(LineReader::new("chr1\t100\n".as_bytes()), &mut output);
        assert!(matches!(
            result,
            Err(BedError::Malformed {
                line: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_anchor_table() {
        let plus = Interval::new(0, 10, Some(Strand::Plus));
        let minus = Interval::new(0, 10, Some(Strand::Minus));
        let cmd = ResizeCommand::new(1);
        assert_eq!(cmd.anchor(&minus), Anchor::Start);

        let cmd = cmd.with_reverse_for_negative_strand(true);
        assert_eq!(cmd.anchor(&plus), Anchor::Start);
        assert_eq!(cmd.anchor(&minus), Anchor::End);

        let cmd = cmd.with_change_start(true);
        assert_eq!(cmd.anchor(&plus), Anchor::End);
        assert_eq!(cmd.anchor(&minus), Anchor::Start);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let cmd = ResizeCommand::new(25).with_change_start(true);
        let once = run(&cmd, "chr1\t100\t200\nchr1\t7\t9\n");
        let twice = run(&cmd, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resize_overflow() {
        let cmd = ResizeCommand::new(10);
        assert_eq!(cmd.resize(&Interval::new(i64::MAX, 0, None)), None);
    }
}
