//! bedkit: line-oriented transformations of genomic interval files.
//!
//! Every operation reads a tab-separated stream one line at a time and
//! writes a transformed stream. `browser`, `track` and `#` lines are copied
//! through unchanged.
//!
//! # Operations
//!
//! - **resize**: set every annotation to a fixed size, strand-aware
//! - **move**: shift annotations by a signed distance, strand-aware
//! - **fasta-to-sizes**: FASTA to a `name\tlength` sizes table
//! - **bedpe-filter**: drop pairs whose insert size exceeds a maximum
//! - **bedpe-to-bed**: project BEDPE pairs onto BED6 records
//!
//! # Example
//!
//! ```rust
//! use bedkit::{commands::ResizeCommand, LineReader};
//!
//! let input = "track name=genes\nchr1\t100\t200\tgene\t0\t-\n";
//! let cmd = ResizeCommand::new(10).with_reverse_for_negative_strand(true);
//!
//! let mut output = Vec::new();
//! cmd.run(LineReader::new(input.as_bytes()), &mut output).unwrap();
//! assert_eq!(output, b"track name=genes\nchr1\t190\t200\tgene\t0\t-\n");
//! ```

pub mod bed;
pub mod commands;
pub mod interval;
pub mod io;
pub mod streaming;

// Re-export commonly used types
pub use bed::{BedError, Line, LineReader};
pub use interval::{Interval, Strand};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bed::{BedError, LineReader};
    pub use crate::commands::{
        BedpeFilterCommand, BedpeToBedCommand, FastaSizesCommand, MoveCommand, ResizeCommand,
        TransformStats,
    };
    pub use crate::interval::{Interval, Strand};
}
