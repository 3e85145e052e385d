//! CSV output formatting

use std::borrow::Cow;
use std::io::{self, Write};

use crate::pipeline::MatchRow;

pub const CSV_HEADER: &str = "path,size_bytes,size_human,mtime_iso";

/// Quote a field if it contains a separator, quote, or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write a header row and one record per row.
pub fn write_csv<W: Write>(out: &mut W, rows: &[MatchRow]) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{}",
            escape_field(&row.path),
            row.size_bytes,
            escape_field(&row.size_human),
            escape_field(&row.modified)
        )?;
    }
    Ok(())
}
