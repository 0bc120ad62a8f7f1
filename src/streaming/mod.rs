//! Shared streaming components for all commands:
//! - Line classification and tab-separated field parsing
//! - Buffered record output
//! - Buffer sizing

pub mod buffers;
pub mod output;
pub mod parsing;

pub use output::RecordWriter;
pub use parsing::{
    is_metadata_line, parse_coordinate, require_columns, split_fields, COLUMN_SEPARATOR,
};
