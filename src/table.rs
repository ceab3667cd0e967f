// src/table.rs
use anyhow::{anyhow, Context, Result};
use std::{fs, path::Path};
use tracing::{debug, instrument, trace};

/// Default cell separator of the input table.
pub const DEFAULT_SEPARATOR: char = '|';

/// How the input text is cut into rows and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub separator: char,
    /// Drop whitespace-only lines instead of turning them into one-cell rows.
    pub skip_blank_lines: bool,
}

impl TableFormat {
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            skip_blank_lines: false,
        }
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names, from the first line.
    pub headers: Vec<String>,
    /// Every following line, split and trimmed. Rows keep their own length;
    /// padding happens when the dataset is built.
    pub rows: Vec<Vec<String>>,
}

/// Split one line on `separator` and trim every cell.
///
/// There is no quoting: a separator inside a value always splits it.
pub fn split_row(line: &str, separator: char) -> Vec<String> {
    line.split(separator).map(|s| s.trim().to_string()).collect()
}

/// Read `path` and parse it into a `RawTable`.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P, format: &TableFormat) -> Result<RawTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input table {:?}", path))?;
    parse_with(&text, format).with_context(|| format!("Failed to parse {:?}", path))
}

/// Parse table text with the default line handling: every line is a row,
/// a blank line included.
pub fn parse_str(text: &str, separator: char) -> Result<RawTable> {
    parse_with(text, &TableFormat::new(separator))
}

/// Parse table text: first line is the header, each later line one row.
pub fn parse_with(text: &str, format: &TableFormat) -> Result<RawTable> {
    let skip_blank = format.skip_blank_lines;
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !(skip_blank && line.trim().is_empty()));

    let (_, header_line) = lines
        .next()
        .ok_or_else(|| anyhow!("table has no header row"))?;
    let headers = split_row(header_line, format.separator);
    trace!(?headers, "Parsed header");

    let rows: Vec<Vec<String>> = lines
        .map(|(idx, line)| {
            let row = split_row(line, format.separator);
            trace!(line = idx + 1, cells = row.len(), "Parsed row");
            row
        })
        .collect();

    debug!(columns = headers.len(), rows = rows.len(), "Finished table parsing");
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "code | msg | http_status\r\n\
                          not found | missing | 404\r\n\
                          Invalid Arg|bad argument\n";

    #[test]
    fn test_split_row_trims_all_whitespace() {
        assert_eq!(
            split_row(" a |\tb\t| c\u{a0}", '|'),
            vec!["a".to_string(), "b".into(), "c".into()]
        );
    }

    #[test]
    fn test_split_row_without_separator_is_single_cell() {
        assert_eq!(split_row("  lonely ", '|'), vec!["lonely".to_string()]);
    }

    #[test]
    fn test_split_row_keeps_empty_cells() {
        assert_eq!(split_row("a||", '|'), vec!["a", "", ""]);
    }

    #[test]
    fn test_parse_str_header_and_rows() -> Result<()> {
        let table = parse_str(SAMPLE, '|')?;
        assert_eq!(table.headers, vec!["code", "msg", "http_status"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["not found", "missing", "404"]);
        assert_eq!(table.rows[1], vec!["Invalid Arg", "bad argument"]);
        Ok(())
    }

    #[test]
    fn test_parse_str_keeps_blank_lines_as_rows() -> Result<()> {
        let table = parse_str("code|msg\nA|b\n\n  \nlast|x\n", '|')?;
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[1], vec![""]);
        assert_eq!(table.rows[2], vec![""]);
        assert_eq!(table.rows[3], vec!["last", "x"]);
        Ok(())
    }

    #[test]
    fn test_parse_str_blank_first_line_is_header() -> Result<()> {
        let table = parse_str("\ncode|msg\n", '|')?;
        assert_eq!(table.headers, vec![""]);
        assert_eq!(table.rows, vec![vec!["code".to_string(), "msg".to_string()]]);
        Ok(())
    }

    #[test]
    fn test_parse_with_skip_blank_lines() -> Result<()> {
        let format = TableFormat {
            separator: ',',
            skip_blank_lines: true,
        };
        let table = parse_with("\n  \ncode,msg\n\nA,b\n   \n", &format)?;
        assert_eq!(table.headers, vec!["code", "msg"]);
        assert_eq!(table.rows, vec![vec!["A".to_string(), "b".to_string()]]);
        Ok(())
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(parse_str("", '|').is_err());
        let format = TableFormat {
            skip_blank_lines: true,
            ..Default::default()
        };
        assert!(parse_with(" \n\n", &format).is_err());
    }

    #[test]
    fn test_parse_file_roundtrip() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(SAMPLE.as_bytes())?;
        let table = parse_file(tmp.path(), &TableFormat::default())?;
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(dir.path().join("nope.csv"), &TableFormat::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.csv"));
    }
}
