//! DNS TXT lookups and record extraction.
//!
//! This module provides:
//! - The [`TxtLookup`] adapter trait and its `hickory-resolver` implementation
//! - A retrying wrapper that gives failed lookups a second attempt
//! - A counting wrapper that feeds [`LookupStats`](crate::error_handling::LookupStats)
//! - Extraction of SPF, DKIM and DMARC records from TXT record sets
//!
//! NXDOMAIN and empty answers resolve to an empty record set. Timeouts and
//! network failures are returned as [`LookupError`](crate::error_handling::LookupError),
//! after one retry when the lookup goes through [`RetryingLookup`].

mod extract;
mod records;

// Re-export public API
pub use extract::{
    dkim_query_name, dmarc_query_name, extract_dmarc_policy, extract_dmarc_record,
    extract_spf_record, find_dkim_record,
};
pub use records::{lookup_txt_records, CountingLookup, RetryingLookup, TxtLookup};
