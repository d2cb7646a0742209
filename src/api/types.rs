//! Typed decoding of the frequency endpoint response
//!
//! The body of interest is nested as
//! `results[<any key>].counts[<organism>].allele_counts[<population>]`,
//! a mapping from allele label to chromosome count. Every absence along
//! that path is a named resolution instead of a blanket decode failure.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Top-level frequency response
///
/// `results` is kept optional so a body without the key is distinguishable
/// from one with an empty map; both resolve to "no frequency".
#[derive(Debug, Deserialize)]
pub struct FrequencyResponse {
    pub results: Option<BTreeMap<String, RefSnpResult>>,
}

/// Per-refSNP entry under `results`
#[derive(Debug, Deserialize)]
pub struct RefSnpResult {
    /// Study counts keyed by bioproject (organism) code
    #[serde(default)]
    pub counts: HashMap<String, StudyCounts>,
}

/// Counts for one organism, keyed by population sample code
#[derive(Debug, Deserialize)]
pub struct StudyCounts {
    #[serde(default)]
    pub allele_counts: HashMap<String, HashMap<String, u64>>,
}

/// How far the response got toward a usable frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Target allele's fraction of the population total
    Frequency(f64),
    /// No `results` key, or it was empty
    MissingResults,
    /// Organism or population code absent from the counts
    MissingPopulation,
    /// Counts present but they sum to zero
    ZeroTotal,
    /// Nonzero counts but no case-insensitive match for the target allele
    NoAlleleMatch,
}

impl FrequencyResponse {
    /// Resolve the target allele's frequency for one organism/population.
    ///
    /// Reads the first entry under `results` (responses carry one per
    /// refSNP) and matches the allele label case-insensitively.
    pub fn resolve(&self, organism: &str, population: &str, allele: &str) -> Resolution {
        let Some(results) = &self.results else {
            return Resolution::MissingResults;
        };
        let Some(entry) = results.values().next() else {
            return Resolution::MissingResults;
        };

        let Some(allele_counts) = entry
            .counts
            .get(organism)
            .and_then(|study| study.allele_counts.get(population))
        else {
            return Resolution::MissingPopulation;
        };

        let total: u64 = allele_counts.values().sum();
        if total == 0 {
            return Resolution::ZeroTotal;
        }

        for (label, count) in allele_counts {
            if label.eq_ignore_ascii_case(allele) {
                return Resolution::Frequency(*count as f64 / total as f64);
            }
        }
        Resolution::NoAlleleMatch
    }
}
