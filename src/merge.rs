//! Merging lookup results back into the table
//!
//! Pure lookup-and-default: each row gets the frequency recorded for its
//! SNP identifier, or the -1 sentinel when the map has no entry. Row order
//! and all original columns are untouched.

use crate::dispatch::ResultMap;
use crate::table::Table;

/// Sentinel meaning "frequency not determinable"
pub const NO_FREQUENCY: f64 = -1.0;

/// Header of the appended frequency column
pub const FREQ_COLUMN: &str = "freq";

/// Append the `freq` column to every row of the table
pub fn merge_results(table: &mut Table, snp_col: usize, results: &ResultMap) {
    table.headers.push(FREQ_COLUMN.to_string());
    for row in &mut table.rows {
        let freq = results
            .get(row[snp_col].as_str())
            .copied()
            .unwrap_or(NO_FREQUENCY);
        row.push(format_frequency(freq));
    }
}

/// Render a frequency cell: fractions keep their full precision, the
/// sentinel prints as a bare -1
fn format_frequency(freq: f64) -> String {
    if freq == NO_FREQUENCY {
        "-1".to_string()
    } else {
        format!("{}", freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table() -> Table {
        Table {
            headers: vec!["snp".into(), "allele".into()],
            rows: vec![
                vec!["rs1".into(), "A".into()],
                vec!["rs2".into(), "T".into()],
                vec!["rs1".into(), "C".into()],
            ],
        }
    }

    #[test]
    fn test_merge_appends_one_column() {
        let mut t = table();
        let results: ResultMap = HashMap::from([("rs1".to_string(), 0.25)]);

        merge_results(&mut t, 0, &results);

        assert_eq!(t.headers, vec!["snp", "allele", "freq"]);
        assert_eq!(t.rows.len(), 3);
        assert_eq!(t.rows[0], vec!["rs1", "A", "0.25"]);
        assert_eq!(t.rows[1], vec!["rs2", "T", "-1"]);
        assert_eq!(t.rows[2], vec!["rs1", "C", "0.25"]);
    }

    #[test]
    fn test_merge_is_deterministic() {
        let results: ResultMap =
            HashMap::from([("rs1".to_string(), 0.7), ("rs2".to_string(), -1.0)]);

        let mut a = table();
        let mut b = table();
        merge_results(&mut a, 0, &results);
        merge_results(&mut b, 0, &results);

        assert_eq!(a, b);
    }

    #[test]
    fn test_sentinel_renders_as_minus_one() {
        assert_eq!(format_frequency(-1.0), "-1");
        assert_eq!(format_frequency(0.3), "0.3");
        assert_eq!(format_frequency(1.0 / 3.0), "0.3333333333333333");
    }
}
