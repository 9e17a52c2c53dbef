//! DNS TXT record queries.
//!
//! Every check reads DNS through the [`TxtLookup`] trait so the classifiers
//! can run against the real resolver or an in-memory table.

use std::cell::Cell;

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};
use tokio_retry::Retry;

use crate::error_handling::{
    categorize_resolve_error, get_retry_strategy, LookupError, LookupOutcome, LookupStats,
};

/// Source of TXT records for a name.
#[allow(async_fn_in_trait)]
pub trait TxtLookup {
    /// Returns the TXT records at `name`.
    ///
    /// An empty vector means the name has no TXT records (including NXDOMAIN).
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

impl TxtLookup for TokioAsyncResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        query_txt_once(name, self).await
    }
}

/// Queries TXT (text) records for a name, retrying once on failure.
///
/// # Arguments
///
/// * `name` - The name to query (e.g. `_dmarc.example.com`)
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings, empty when the name has none.
///
/// # Errors
///
/// Returns [`LookupError`] if the query times out or the resolver fails,
/// after the retry from [`get_retry_strategy`] is exhausted.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    RetryingLookup::new(resolver).lookup_txt(name).await
}

async fn query_txt_once(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    debug!("Querying TXT records for {name}");
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // TXT records can contain multiple strings - join them
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            debug!("Found {} TXT record(s) for {name}", txt_records.len());
            Ok(txt_records)
        }
        Err(e) => match categorize_resolve_error(name, &e) {
            LookupOutcome::NoRecords => {
                debug!("No TXT records for {name}: {e}");
                Ok(Vec::new())
            }
            LookupOutcome::Failed(err) => {
                warn!("TXT record lookup failed for {name}: {e}");
                Err(err)
            }
        },
    }
}

/// Wraps a [`TxtLookup`] and records every attempt and failure.
pub struct CountingLookup<'a, R> {
    inner: &'a R,
    stats: &'a LookupStats,
}

impl<'a, R: TxtLookup> CountingLookup<'a, R> {
    pub fn new(inner: &'a R, stats: &'a LookupStats) -> Self {
        Self { inner, stats }
    }
}

impl<R: TxtLookup> TxtLookup for CountingLookup<'_, R> {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.stats.record_attempt();
        let result = self.inner.lookup_txt(name).await;
        if result.is_err() {
            self.stats.record_failure();
        }
        result
    }
}

/// Wraps a [`TxtLookup`] and retries failed lookups per [`get_retry_strategy`].
///
/// Empty answers are successes and are never retried.
pub struct RetryingLookup<'a, R> {
    inner: &'a R,
}

impl<'a, R: TxtLookup> RetryingLookup<'a, R> {
    pub fn new(inner: &'a R) -> Self {
        Self { inner }
    }
}

impl<R: TxtLookup> TxtLookup for RetryingLookup<'_, R> {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let attempt = Cell::new(0usize);
        Retry::spawn(get_retry_strategy(), || {
            let n = attempt.get() + 1;
            attempt.set(n);
            if n > 1 {
                debug!("Retrying TXT lookup for {name} (attempt {n})");
            }
            self.inner.lookup_txt(name)
        })
        .await
    }
}
