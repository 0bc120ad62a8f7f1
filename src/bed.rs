//! Streaming line reader for BED, BEDPE and FASTA input.

use crate::streaming::parsing::is_metadata_line;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while transforming a record stream.
#[derive(Error, Debug)]
pub enum BedError {
    #[error("Could not read input or write to output: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Malformed record at line {line}: expected at least {expected} columns, got {found}")]
    Malformed {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Coordinate overflow at line {line}")]
    Overflow { line: usize },
}

pub type Result<T> = std::result::Result<T, BedError>;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `browser`, `track` or `#` line, copied verbatim.
    Metadata(&'a str),
    /// Tab-separated data line. An empty line is a data line too.
    Record(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if is_metadata_line(line) {
            Line::Metadata(line)
        } else {
            Line::Record(line)
        }
    }
}

/// A streaming line reader.
///
/// Lines are returned without their terminator; a trailing `\r` is
/// stripped as well so CRLF input behaves like LF input.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl LineReader<File> {
    /// Open a file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Create a line reader with custom buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line together with its 1-based line number,
    /// or `None` at end of stream.
    pub fn read_line(&mut self) -> Result<Option<(usize, &str)>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut line = self.buffer.as_str();
        if let Some(stripped) = line.strip_suffix('\n') {
            line = stripped;
        }
        if let Some(stripped) = line.strip_suffix('\r') {
            line = stripped;
        }
        Ok(Some((self.line_number, line)))
    }

    /// 1-based number of the line most recently returned.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
