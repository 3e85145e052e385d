//! Result rendering
//!
//! Renderers only read rows; they never reorder or modify them.
//!
//! # Module Structure
//!
//! - `config` - Output format and colour settings
//! - `lines` - One path per line
//! - `table` - Aligned columns with a title
//! - `csv` - CSV with a header row
//! - `json` - Pretty-printed JSON array

mod config;
mod csv;
mod json;
mod lines;
mod table;

use std::io;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::search::SearchOutcome;

pub use config::{OutputConfig, OutputFormat};
pub use csv::{CSV_HEADER, write_csv};
pub use json::write_json;
pub use lines::write_lines;
pub use table::write_table;

/// Write the trailing summary: match count, then skipped count if nonzero.
pub fn write_summary<W: WriteColor>(out: &mut W, matched: usize, skipped: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} file(s) found", matched)?;
    if skipped > 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "{} path(s) skipped due to permission/filesystem errors", skipped)?;
        out.reset()?;
    }
    Ok(())
}

/// Render an outcome in the configured format.
///
/// Rows go to `out`. The summary follows them on `out`, except for CSV and
/// JSON where it goes to `diag` so the data stays parseable. Count mode
/// prints the row count alone.
pub fn render<W: WriteColor, E: WriteColor>(
    config: &OutputConfig,
    outcome: &SearchOutcome,
    root: &Path,
    out: &mut W,
    diag: &mut E,
) -> io::Result<()> {
    let rows = &outcome.rows;
    match config.format {
        OutputFormat::Count => {
            writeln!(out, "{}", rows.len())?;
            return out.flush();
        }
        OutputFormat::Lines => write_lines(out, rows)?,
        OutputFormat::Table => write_table(out, rows, &format!("Matches in {}", root.display()))?,
        OutputFormat::Csv => write_csv(out, rows)?,
        OutputFormat::Json => write_json(out, rows)?,
    }
    out.flush()?;

    if config.format.summary_to_stderr() {
        write_summary(diag, rows.len(), outcome.skipped)
    } else {
        write_summary(out, rows.len(), outcome.skipped)?;
        out.flush()
    }
}

/// Renders to the process's stdout and stderr.
pub struct Printer {
    config: OutputConfig,
    stdout: StandardStream,
    stderr: StandardStream,
}

impl Printer {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }

    pub fn print(&mut self, outcome: &SearchOutcome, root: &Path) -> io::Result<()> {
        let mut out = self.stdout.lock();
        let mut diag = self.stderr.lock();
        render(&self.config, outcome, root, &mut out, &mut diag)
    }
}
