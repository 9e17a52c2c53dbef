//! Resolver error categorization and retry strategy.
//!
//! This module maps `hickory-resolver` errors onto [`LookupError`] and
//! configures the bounded retry used for failed lookups.

use std::time::Duration;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use tokio_retry::strategy::FixedInterval;

use super::types::LookupError;

/// How a failed resolver call should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// NXDOMAIN or an empty answer; the name simply has no TXT records.
    NoRecords,
    /// A real failure that should be reported.
    Failed(LookupError),
}

/// Creates the retry strategy for failed TXT lookups.
///
/// A fixed `DNS_RETRY_DELAY_MS` pause, limited to `DNS_RETRY_MAX_ATTEMPTS`
/// retries after the initial attempt.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    FixedInterval::from_millis(crate::config::DNS_RETRY_DELAY_MS)
        .take(crate::config::DNS_RETRY_MAX_ATTEMPTS)
}

/// Categorizes a `ResolveError` for the lookup of `name`.
///
/// # Arguments
///
/// * `name` - The name that was queried
/// * `error` - The error returned by the resolver
///
/// # Returns
///
/// [`LookupOutcome::NoRecords`] for NXDOMAIN / no-data answers, otherwise the
/// [`LookupError`] to report. Error response codes (SERVFAIL, REFUSED, ...)
/// are failures, not missing records.
pub fn categorize_resolve_error(name: &str, error: &ResolveError) -> LookupOutcome {
    match error.kind() {
        // SERVFAIL, REFUSED and other error rcodes also arrive as NoRecordsFound
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            return match response_code {
                ResponseCode::NXDomain | ResponseCode::NoError => LookupOutcome::NoRecords,
                code => LookupOutcome::Failed(LookupError::Network {
                    name: name.to_string(),
                    reason: format!("{code}"),
                }),
            }
        }
        ResolveErrorKind::Timeout => {
            return LookupOutcome::Failed(LookupError::Timeout {
                name: name.to_string(),
            })
        }
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            return LookupOutcome::Failed(LookupError::Timeout {
                name: name.to_string(),
            })
        }
        _ => {}
    }

    // Fall back to the message for errors wrapped in Msg/Message variants
    let error_msg = error.to_string();
    if error_msg.contains("no records found") || error_msg.contains("NXDomain") {
        LookupOutcome::NoRecords
    } else if error_msg.contains("timeout") || error_msg.contains("timed out") {
        LookupOutcome::Failed(LookupError::Timeout {
            name: name.to_string(),
        })
    } else {
        LookupOutcome::Failed(LookupError::Network {
            name: name.to_string(),
            reason: error_msg,
        })
    }
}
