//! Line-per-path output

use std::io::{self, Write};

use crate::pipeline::MatchRow;

pub fn write_lines<W: Write>(out: &mut W, rows: &[MatchRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_path_per_line() {
        let rows: Vec<MatchRow> = ["b.txt", "dir with spaces/a.md"]
            .iter()
            .map(|p| MatchRow {
                path: p.to_string(),
                size_bytes: 1,
                size_human: "1B".to_string(),
                modified: String::new(),
            })
            .collect();
        let mut buf = Vec::new();
        write_lines(&mut buf, &rows).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "b.txt\ndir with spaces/a.md\n");
    }
}
