//! Retrying lookup client for the frequency endpoint
//!
//! One `FrequencyClient` is shared across all workers so the underlying
//! reqwest connection pool is reused. Each lookup applies the per-request
//! timeout and retry policy and always produces an outcome; nothing here
//! can fail the run.

use crate::api::endpoints;
use crate::api::types::{FrequencyResponse, Resolution};
use crate::api::LookupOutcome;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for per-refSNP frequency lookups
pub struct FrequencyClient {
    client: Client,
    base_url: String,
    organism: String,
    population: String,
    attempts: u32,
}

impl FrequencyClient {
    /// Create a new client with the per-request timeout baked in
    pub fn new(
        base_url: String,
        organism: String,
        population: String,
        timeout: Duration,
        attempts: u32,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("alff/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            organism,
            population,
            attempts: attempts.max(1),
        })
    }

    /// Look up the target allele's frequency for one SNP.
    ///
    /// The two-character type prefix is stripped unconditionally; callers
    /// pass "rs"-style accessions. Transport failures (timeouts and related
    /// errors) are retried immediately up to the attempt budget; any other
    /// failure is terminal for this SNP on first occurrence.
    pub async fn lookup(&self, snp: &str, allele: &str) -> LookupOutcome {
        let numeric_id = snp.get(2..).unwrap_or("");
        let url = endpoints::refsnp_frequency_url(&self.base_url, numeric_id);

        let mut outcome = LookupOutcome::Unresolved;
        for attempt in 1..=self.attempts {
            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    // Tentative -1; a later attempt may still overwrite it.
                    outcome = LookupOutcome::NotFound;
                    info!("Timeout for {}, attempt: {} ({})", snp, attempt, e);
                    continue;
                }
            };

            if !response.status().is_success() {
                debug!("Non-success status {} for {}", response.status(), snp);
                return LookupOutcome::NotFound;
            }

            let body: FrequencyResponse = match response.json().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => {
                    outcome = LookupOutcome::NotFound;
                    info!("Timeout for {}, attempt: {} ({})", snp, attempt, e);
                    continue;
                }
                Err(e) => {
                    debug!("Unusable response body for {}: {}", snp, e);
                    return LookupOutcome::NotFound;
                }
            };

            return match body.resolve(&self.organism, &self.population, allele) {
                Resolution::Frequency(freq) => LookupOutcome::Found(freq),
                Resolution::MissingResults => LookupOutcome::NotFound,
                Resolution::MissingPopulation => {
                    info!(
                        "SNP {} could not be found. Likely due to organism ({})/population ({}) not found.",
                        snp, self.organism, self.population
                    );
                    LookupOutcome::NotFound
                }
                Resolution::ZeroTotal | Resolution::NoAlleleMatch => LookupOutcome::Unresolved,
            };
        }

        outcome
    }

    /// The base URL requests go to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
