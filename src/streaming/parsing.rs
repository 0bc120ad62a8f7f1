//! Line classification and field parsing utilities.
//!
//! Fields are borrowed slices of the input line, so splitting a record
//! never allocates per column.

use crate::bed::{BedError, Result};
use memchr::{memchr, memchr_iter};

/// Column separator for every tab-separated format handled here.
pub const COLUMN_SEPARATOR: u8 = b'\t';

/// Returns true if `field` is `keyword` alone or `keyword` followed by a
/// space and anything else.
#[inline]
fn matches_keyword(field: &str, keyword: &str) -> bool {
    match field.strip_prefix(keyword) {
        Some(rest) => rest.is_empty() || rest.starts_with(' '),
        None => false,
    }
}

/// Check if a line is a `browser`, `track` or `#` comment line.
///
/// `browser` and `track` are matched against the first tab-separated
/// field; the comment prefix is matched against the whole line.
#[inline]
pub fn is_metadata_line(line: &str) -> bool {
    if line.starts_with('#') {
        return true;
    }
    let first = match memchr(COLUMN_SEPARATOR, line.as_bytes()) {
        Some(tab) => &line[..tab],
        None => line,
    };
    matches_keyword(first, "browser") || matches_keyword(first, "track")
}

/// Split a line on tabs, keeping empty fields.
///
/// Re-joining the result with `\t` reproduces the line exactly.
#[inline]
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(12);
    let mut begin = 0;
    for tab in memchr_iter(COLUMN_SEPARATOR, line.as_bytes()) {
        fields.push(&line[begin..tab]);
        begin = tab + 1;
    }
    fields.push(&line[begin..]);
    fields
}

/// Ensure a record has at least `expected` columns.
#[inline]
pub fn require_columns(fields: &[&str], expected: usize, line: usize) -> Result<()> {
    if fields.len() < expected {
        return Err(BedError::Malformed {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parse a signed coordinate field.
pub fn parse_coordinate(field: &str, column: &str, line: usize) -> Result<i64> {
    field.parse().map_err(|_| BedError::Parse {
        line,
        message: format!("Invalid {} position: '{}'", column, field),
    })
}
