//! alff - Allele Frequency Finder
//!
//! Annotates a delimited table of genetic variants with population allele
//! frequencies from the NCBI Variation Services API (ALFA project):
//!
//! - **Table I/O**: delimited read/write with configurable separators
//! - **Column resolution**: SNP and allele columns by name or auto-detected
//! - **Lookup**: one HTTP request per distinct SNP, bounded concurrency,
//!   retry on timeout
//! - **Merge**: one appended `freq` column, -1 where no frequency resolved
//!
//! For API details see <https://api.ncbi.nlm.nih.gov/variation/v0>.

pub mod api;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod logging;
pub mod merge;
pub mod run;
pub mod table;

// Re-export commonly used types
pub use error::{AlffError, Result};

use clap::Parser;

/// alff - append ALFA allele frequencies to a variant table
#[derive(Parser, Debug)]
#[command(name = "alff")]
#[command(author, version)]
#[command(
    about = "Calls the NCBI variation API to append allele frequencies from the ALFA project"
)]
pub struct Cli {
    /// Full or relative path to the input file
    #[arg(short, long)]
    pub input: String,

    /// Field separator for the input file
    #[arg(long, default_value = "\\t")]
    pub isep: String,

    /// Full or relative path to the output file (overwritten if it exists)
    #[arg(short, long, default_value = "alff_output.txt")]
    pub output: String,

    /// Field separator for the output file
    #[arg(long, default_value = "\\t")]
    pub osep: String,

    /// Column header for SNP accessions; defaults to the first column
    #[arg(long, default_value = "")]
    pub snp_col: String,

    /// Column header for the allele to look up; defaults to the second column
    #[arg(long, default_value = "")]
    pub allele_col: String,

    /// Bioproject code of the organism whose frequencies to search
    /// (see https://www.ncbi.nlm.nih.gov/bioproject/browse). Defaults to human.
    #[arg(long, default_value = "PRJNA507278")]
    pub organism: String,

    /// Population subtype sample code (see the ALFA documentation).
    /// Defaults to European.
    #[arg(long, default_value = "SAMN10492695")]
    pub population: String,

    /// How many requests to send at once. Be mindful not to overload the
    /// server by setting this too high.
    #[arg(short, long, default_value_t = 5)]
    pub workers: usize,

    /// Seconds to wait before a request counts as timed out
    #[arg(short, long, default_value_t = 5.0)]
    pub timeout: f64,

    /// How many attempts to make when a request hits a timeout or related
    /// transport error
    #[arg(short, long, default_value_t = 5)]
    pub attempts: u32,

    /// Base URL of the variation service
    #[arg(
        long,
        env = "ALFF_BASE_URL",
        default_value = api::endpoints::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["alff", "--input", "variants.tsv"]);
        assert_eq!(cli.input, "variants.tsv");
        assert_eq!(cli.isep, "\\t");
        assert_eq!(cli.output, "alff_output.txt");
        assert_eq!(cli.organism, "PRJNA507278");
        assert_eq!(cli.population, "SAMN10492695");
        assert_eq!(cli.workers, 5);
        assert_eq!(cli.timeout, 5.0);
        assert_eq!(cli.attempts, 5);
        assert_eq!(cli.base_url, api::endpoints::DEFAULT_BASE_URL);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["alff"]).is_err());
    }
}
