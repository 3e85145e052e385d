//! Tabular output
//!
//! Columns: `#`, `Path`, `Size`, `Modified`. Index and size are right
//! aligned. Widths are measured in chars.

use std::io;

use termcolor::{ColorSpec, WriteColor};

use crate::pipeline::MatchRow;

const HEADERS: [&str; 4] = ["#", "Path", "Size", "Modified"];
const GAP: &str = "  ";

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, w: usize) -> String {
    format!("{}{}", " ".repeat(w.saturating_sub(width(s))), s)
}

fn pad_right(s: &str, w: usize) -> String {
    format!("{}{}", s, " ".repeat(w.saturating_sub(width(s))))
}

/// Format one line of cells; the last column is never padded.
fn format_line(cells: [&str; 4], widths: [usize; 4]) -> String {
    [
        pad_left(cells[0], widths[0]),
        pad_right(cells[1], widths[1]),
        pad_left(cells[2], widths[2]),
        cells[3].to_string(),
    ]
    .join(GAP)
}

pub fn write_table<W: WriteColor>(out: &mut W, rows: &[MatchRow], title: &str) -> io::Result<()> {
    let indices: Vec<String> = (1..=rows.len()).map(|i| i.to_string()).collect();

    let mut widths = HEADERS.map(width);
    for (row, index) in rows.iter().zip(&indices) {
        widths[0] = widths[0].max(width(index));
        widths[1] = widths[1].max(width(&row.path));
        widths[2] = widths[2].max(width(&row.size_human));
        widths[3] = widths[3].max(width(&row.modified));
    }

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    out.set_color(&bold)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", format_line(HEADERS, widths))?;
    out.reset()?;

    let rule_len = widths.iter().sum::<usize>() + GAP.len() * (widths.len() - 1);
    writeln!(out, "{}", "─".repeat(rule_len))?;

    for (row, index) in rows.iter().zip(&indices) {
        let cells: [&str; 4] = [index, &row.path, &row.size_human, &row.modified];
        writeln!(out, "{}", format_line(cells, widths))?;
    }
    Ok(())
}
