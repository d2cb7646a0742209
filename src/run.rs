//! End-to-end annotation pipeline
//!
//! read table → resolve columns → extract keys → dispatch lookups →
//! merge → write table. Configuration problems surface before the first
//! request; per-SNP failures never abort the run.

use crate::api::FrequencyClient;
use crate::error::{AlffError, Result};
use crate::table::{self, Table};
use crate::{dispatch, extract, merge, Cli};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Run one annotation pass with the given configuration
pub async fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let isep = table::parse_separator(&cli.isep)?;
    let osep = table::parse_separator(&cli.osep)?;

    let mut table = Table::read(Path::new(&cli.input), isep)?;

    let snp_col = table::resolve_column(&table, &cli.snp_col, 0, "SNP");
    let allele_col = table::resolve_column(&table, &cli.allele_col, 1, "allele");
    if table::column_is_numeric(&table, allele_col) {
        return Err(AlffError::AlleleColumnNotText {
            column: table.headers[allele_col].clone(),
        });
    }

    let keys = extract::extract_keys(&table, snp_col, allele_col);
    info!(
        "Looking up {} distinct SNP(s) for {} row(s)",
        keys.len(),
        table.rows.len()
    );

    let client = FrequencyClient::new(
        cli.base_url.clone(),
        cli.organism.clone(),
        cli.population.clone(),
        Duration::from_secs_f64(cli.timeout),
        cli.attempts,
    )?;
    let results = dispatch::dispatch_lookups(&client, keys, cli.workers).await;

    merge::merge_results(&mut table, snp_col, &results);
    table.write(Path::new(&cli.output), osep)?;

    info!(
        "Annotated {} row(s) in {:.2}s; output written to {}",
        table.rows.len(),
        start.elapsed().as_secs_f64(),
        cli.output
    );

    Ok(())
}
