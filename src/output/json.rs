//! JSON output formatting

use std::io::{self, Write};

use crate::pipeline::MatchRow;

/// Write rows as a pretty-printed JSON array, followed by a newline.
pub fn write_json<W: Write>(out: &mut W, rows: &[MatchRow]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows).map_err(io::Error::other)?;
    writeln!(out)
}
