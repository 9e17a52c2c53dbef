//! SPF check.

use log::debug;

use crate::dns::{extract_spf_record, TxtLookup};
use crate::error_handling::LookupError;
use crate::models::{CheckKind, Finding, Status};

pub const SPF_RECORD_LABEL: &str = "SPF Record";

/// Classifies the TXT records of a domain.
///
/// PASS with the record echoed when a `v=spf1` record exists, FAIL otherwise.
/// Mechanisms are not evaluated.
pub fn classify_spf(txt_records: &[String]) -> Finding {
    match extract_spf_record(txt_records) {
        Some(record) => Finding::new(
            CheckKind::Spf,
            SPF_RECORD_LABEL,
            Status::Pass,
            format!("Found: {record}"),
        ),
        None => Finding::new(
            CheckKind::Spf,
            SPF_RECORD_LABEL,
            Status::Fail,
            "No SPF record found.",
        ),
    }
}

fn lookup_failed(error: &LookupError) -> Finding {
    Finding::new(
        CheckKind::Spf,
        SPF_RECORD_LABEL,
        Status::Fail,
        format!("Could not check SPF: {error}"),
    )
}

/// Looks up and classifies the SPF record of `domain`.
pub async fn check_spf<R: TxtLookup>(domain: &str, resolver: &R) -> Finding {
    match resolver.lookup_txt(domain).await {
        Ok(txt_records) => {
            debug!("SPF: {} TXT record(s) at {domain}", txt_records.len());
            classify_spf(&txt_records)
        }
        Err(e) => lookup_failed(&e),
    }
}
