//! DKIM check.
//!
//! Only the listed selectors can be tried: DNS offers no way to enumerate
//! the selectors a domain publishes.

use log::debug;

use crate::dns::{dkim_query_name, find_dkim_record, TxtLookup};
use crate::models::{CheckKind, Finding, Status};

pub const DKIM_RECORD_LABEL: &str = "DKIM Record";

/// Classifies the TXT records found at one selector.
///
/// Returns a PASS finding naming the selector when any record contains
/// `v=DKIM1`, `None` otherwise.
pub fn classify_dkim(selector: &str, txt_records: &[String]) -> Option<Finding> {
    find_dkim_record(txt_records).map(|record| {
        Finding::new(
            CheckKind::Dkim,
            DKIM_RECORD_LABEL,
            Status::Pass,
            format!("Found a DKIM record with selector: '{selector}': {record}"),
        )
    })
}

fn not_found(selectors: &[String], failed: &[String]) -> Finding {
    let mut message = format!(
        "No DKIM records found for selectors: {}. A comprehensive DKIM check requires analyzing an email header.",
        selectors.join(", ")
    );
    if !failed.is_empty() {
        message.push_str(&format!(" Lookup failed for: {}.", failed.join("; ")));
    }
    Finding::new(CheckKind::Dkim, DKIM_RECORD_LABEL, Status::Fail, message)
}

/// Tries each selector in order and reports the first one with a DKIM key.
///
/// A selector whose lookup fails is noted and the next one is tried.
pub async fn check_dkim<R: TxtLookup>(domain: &str, selectors: &[String], resolver: &R) -> Finding {
    let mut failed = Vec::new();
    for selector in selectors {
        let name = dkim_query_name(selector, domain);
        match resolver.lookup_txt(&name).await {
            Ok(txt_records) => {
                if let Some(finding) = classify_dkim(selector, &txt_records) {
                    return finding;
                }
                debug!("DKIM: no key record at {name}");
            }
            Err(e) => failed.push(format!("'{selector}' ({e})")),
        }
    }
    not_found(selectors, &failed)
}
