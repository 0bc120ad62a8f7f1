//! Input and output resolution for commands.
//!
//! A missing path means the process's standard stream, so every command
//! can sit in a pipeline.

use crate::bed::{LineReader, Result};
use crate::streaming::buffers::DEFAULT_INPUT_BUFFER;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Open the input path, or stdin when `None`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Open a line reader over the input path, or stdin when `None`.
pub fn open_reader(path: Option<&Path>) -> Result<LineReader<Box<dyn Read>>> {
    Ok(LineReader::with_capacity(
        open_input(path)?,
        DEFAULT_INPUT_BUFFER,
    ))
}

/// Create (or truncate) the output path, or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout().lock())),
    }
}
