//! NCBI Variation Services API client
//!
//! Modules for talking to the frequency endpoint: URL construction, typed
//! response decoding, and the retrying lookup client.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::FrequencyClient;

/// Final outcome of one identifier's lookup
///
/// Lookups never fail as far as the dispatcher is concerned; every failure
/// mode collapses into one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome {
    /// Frequency resolved, in [0, 1]
    Found(f64),
    /// Lookup failed (timeout budget spent, bad status, unusable body);
    /// recorded as the -1 sentinel
    NotFound,
    /// Response was well-formed but carried no usable counts (zero total or
    /// no matching allele); equivalent to -1 at merge time
    Unresolved,
}

impl LookupOutcome {
    /// The frequency value this outcome contributes to the result map
    pub fn frequency(self) -> f64 {
        match self {
            LookupOutcome::Found(freq) => freq,
            LookupOutcome::NotFound | LookupOutcome::Unresolved => -1.0,
        }
    }
}
