//! Delimited table reading and writing
//!
//! The input is a header-rowed, delimiter-separated text table. Everything
//! here is plain string cells; the only typing applied is the allele-column
//! text check demanded before any network activity starts.

use crate::error::{AlffError, Result};
use std::path::Path;
use tracing::warn;

/// In-memory table: one header row plus data rows, all string cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a delimited table from `path`
    pub fn read(path: &Path, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.len() < 2 {
            return Err(AlffError::TooFewColumns(headers.len()));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Ragged short rows are padded so column indexing stays safe.
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Table { headers, rows })
    }

    /// Write the table to `path`, overwriting any existing file
    pub fn write(&self, path: &Path, delimiter: u8) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Values of one column, in row order
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[index].as_str())
    }
}

/// Turn a separator argument into the single byte the csv reader needs.
///
/// Shell-quoted escape sequences are honored the way the original tool
/// decoded them, so `--isep '\t'` means a real tab.
pub fn parse_separator(raw: &str) -> Result<u8> {
    let unescaped = match raw {
        "\\t" => "\t",
        "\\n" => "\n",
        "\\r" => "\r",
        "\\0" => "\0",
        other => other,
    };

    let bytes = unescaped.as_bytes();
    if bytes.len() != 1 {
        return Err(AlffError::config(format!(
            "Separator must be a single character, got '{}'",
            raw
        )));
    }
    Ok(bytes[0])
}

/// Resolve a configured column name against the table headers.
///
/// An empty or unknown name falls back to the column at `fallback`, with a
/// warning, matching how the tool has always auto-detected its columns.
pub fn resolve_column(table: &Table, configured: &str, fallback: usize, role: &str) -> usize {
    if !configured.is_empty() {
        if let Some(index) = table.headers.iter().position(|h| h == configured) {
            return index;
        }
        warn!(
            "Column '{}' not found; defaulting to column {} as {} column.",
            configured,
            fallback + 1,
            role
        );
        return fallback;
    }
    warn!("Defaulting to column {} as {} column.", fallback + 1, role);
    fallback
}

/// True when a column holds no text: it has at least one non-empty cell and
/// every non-empty cell parses as a number. Used to reject a numeric allele
/// column before any requests go out.
pub fn column_is_numeric(table: &Table, index: usize) -> bool {
    let mut saw_value = false;
    for value in table.column(index) {
        if value.is_empty() {
            continue;
        }
        saw_value = true;
        if value.parse::<f64>().is_err() {
            return false;
        }
    }
    saw_value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            headers: vec!["snp".into(), "allele".into(), "beta".into()],
            rows: vec![
                vec!["rs123".into(), "A".into(), "0.2".into()],
                vec!["rs456".into(), "T".into(), "-0.1".into()],
            ],
        }
    }

    #[test]
    fn test_parse_separator_escapes() {
        assert_eq!(parse_separator("\\t").unwrap(), b'\t');
        assert_eq!(parse_separator(",").unwrap(), b',');
        assert_eq!(parse_separator(";").unwrap(), b';');
        assert!(parse_separator("ab").is_err());
        assert!(parse_separator("").is_err());
    }

    #[test]
    fn test_resolve_column_by_name() {
        let table = sample();
        assert_eq!(resolve_column(&table, "allele", 0, "allele"), 1);
    }

    #[test]
    fn test_resolve_column_falls_back() {
        let table = sample();
        assert_eq!(resolve_column(&table, "", 0, "SNP"), 0);
        assert_eq!(resolve_column(&table, "missing", 1, "allele"), 1);
    }

    #[test]
    fn test_column_is_numeric() {
        let table = sample();
        assert!(!column_is_numeric(&table, 0));
        assert!(!column_is_numeric(&table, 1));
        assert!(column_is_numeric(&table, 2));
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.tsv");
        std::fs::write(&path, "snp\tallele\nrs1\tA\nrs2\tT\n").unwrap();

        let table = Table::read(&path, b'\t').unwrap();
        assert_eq!(table.headers, vec!["snp", "allele"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["rs1", "A"]);

        let out = dir.path().join("out.csv");
        table.write(&out, b',').unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "snp,allele\nrs1,A\nrs2,T\n");
    }

    #[test]
    fn test_read_rejects_single_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.tsv");
        std::fs::write(&path, "snp\nrs1\n").unwrap();

        let err = Table::read(&path, b'\t').unwrap_err();
        assert!(matches!(err, AlffError::TooFewColumns(1)));
    }
}
