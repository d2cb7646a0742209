//! Concurrent lookup dispatch
//!
//! Fans the fetcher out over all lookup keys with a bounded number of
//! in-flight requests, then collects every (identifier, frequency) pair
//! into the result map from the single awaiting control flow. No shared
//! mutable state between workers, no cancellation, no early exit.

use crate::api::FrequencyClient;
use crate::extract::LookupKey;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;

/// Identifier → frequency (or -1 sentinel) for one run
pub type ResultMap = HashMap<String, f64>;

/// Run `lookup` over every key with at most `workers` in flight, waiting
/// for all of them.
///
/// Generic over the lookup function so the concurrency bound is testable
/// without a network. Completion order is not guaranteed; every key yields
/// exactly one entry (duplicate identifiers collapse to the last completed).
pub async fn dispatch_all<F, Fut>(keys: Vec<LookupKey>, workers: usize, lookup: F) -> ResultMap
where
    F: Fn(LookupKey) -> Fut,
    Fut: Future<Output = (String, f64)>,
{
    debug!("Dispatching {} lookups (workers={})", keys.len(), workers);

    stream::iter(keys)
        .map(|key| lookup(key))
        .buffer_unordered(workers.max(1))
        .collect::<Vec<(String, f64)>>()
        .await
        .into_iter()
        .collect()
}

/// Dispatch all keys against the frequency service
pub async fn dispatch_lookups(
    client: &FrequencyClient,
    keys: Vec<LookupKey>,
    workers: usize,
) -> ResultMap {
    dispatch_all(keys, workers, |key| async move {
        let outcome = client.lookup(&key.snp, &key.allele).await;
        (key.snp, outcome.frequency())
    })
    .await
}
