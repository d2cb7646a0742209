//! Lookup key extraction
//!
//! Derives the set of (SNP identifier, target allele) pairs the dispatcher
//! will resolve. One lookup per distinct identifier; when an identifier
//! appears on several rows the last row's allele wins, same as building a
//! plain map over the rows.

use crate::table::Table;
use std::collections::HashMap;

/// One unit of lookup work: a refSNP accession and the allele whose
/// frequency is wanted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    pub snp: String,
    pub allele: String,
}

/// Extract deduplicated lookup keys from the resolved SNP and allele columns.
///
/// Keys come back in first-seen row order with the last-seen allele for each
/// identifier. Empty identifiers are skipped; they can never resolve.
pub fn extract_keys(table: &Table, snp_col: usize, allele_col: usize) -> Vec<LookupKey> {
    let mut order: Vec<String> = Vec::new();
    let mut alleles: HashMap<String, String> = HashMap::new();

    for row in &table.rows {
        let snp = row[snp_col].as_str();
        if snp.is_empty() {
            continue;
        }
        if !alleles.contains_key(snp) {
            order.push(snp.to_string());
        }
        alleles.insert(snp.to_string(), row[allele_col].clone());
    }

    order
        .into_iter()
        .map(|snp| {
            let allele = alleles.remove(&snp).unwrap_or_default();
            LookupKey { snp, allele }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> Table {
        Table {
            headers: vec!["snp".into(), "allele".into()],
            rows: rows
                .iter()
                .map(|(s, a)| vec![s.to_string(), a.to_string()])
                .collect(),
        }
    }

    #[test]
    fn test_extract_keys_basic() {
        let keys = extract_keys(&table(&[("rs1", "A"), ("rs2", "T")]), 0, 1);
        assert_eq!(
            keys,
            vec![
                LookupKey { snp: "rs1".into(), allele: "A".into() },
                LookupKey { snp: "rs2".into(), allele: "T".into() },
            ]
        );
    }

    #[test]
    fn test_duplicate_identifier_last_allele_wins() {
        let keys = extract_keys(&table(&[("rs1", "A"), ("rs2", "G"), ("rs1", "C")]), 0, 1);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0], LookupKey { snp: "rs1".into(), allele: "C".into() });
        assert_eq!(keys[1], LookupKey { snp: "rs2".into(), allele: "G".into() });
    }

    #[test]
    fn test_empty_identifier_skipped() {
        let keys = extract_keys(&table(&[("", "A"), ("rs9", "T")]), 0, 1);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].snp, "rs9");
    }
}
