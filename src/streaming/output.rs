//! Buffered record output.
//!
//! Uses itoa for integer formatting to avoid allocation in the hot path.

use crate::bed::BedError;
use crate::streaming::buffers::DEFAULT_OUTPUT_BUFFER;
use std::io::{BufWriter, Write};

/// Tab-separated record writer.
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new RecordWriter with the default 2MB buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_OUTPUT_BUFFER, output)
    }

    /// Create a new RecordWriter with specified buffer size.
    fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a full line as-is with newline.
    #[inline]
    pub fn write_line(&mut self, line: &str) -> Result<(), BedError> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write fields joined by tabs, followed by newline.
    #[inline]
    pub fn write_fields(&mut self, fields: &[&str]) -> Result<(), BedError> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b"\t")?;
            }
            self.writer.write_all(field.as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a record with columns 1 and 2 replaced by `start` and `end`.
    ///
    /// Every other column is written unchanged. `fields` must hold at
    /// least three columns.
    #[inline]
    pub fn write_with_coordinates(
        &mut self,
        fields: &[&str],
        start: i64,
        end: i64,
    ) -> Result<(), BedError> {
        self.writer.write_all(fields[0].as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(start).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(end).as_bytes())?;
        for field in &fields[3..] {
            self.writer.write_all(b"\t")?;
            self.writer.write_all(field.as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a record with the single column `column` replaced by `value`.
    ///
    /// Every other column, the other coordinate included, is written as
    /// read.
    #[inline]
    pub fn write_with_coordinate(
        &mut self,
        fields: &[&str],
        column: usize,
        value: i64,
    ) -> Result<(), BedError> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b"\t")?;
            }
            if i == column {
                self.writer
                    .write_all(self.itoa_buf.format(value).as_bytes())?;
            } else {
                self.writer.write_all(field.as_bytes())?;
            }
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a `name\tlength` sizes line.
    #[inline]
    pub fn write_size(&mut self, name: &str, length: u64) -> Result<(), BedError> {
        self.writer.write_all(name.as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(length).as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), BedError> {
        self.writer.flush()?;
        Ok(())
    }
}
