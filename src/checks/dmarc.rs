//! DMARC check.

use log::debug;

use crate::dns::{dmarc_query_name, extract_dmarc_policy, extract_dmarc_record, TxtLookup};
use crate::models::{CheckKind, Finding, Status};

pub const DMARC_RECORD_LABEL: &str = "DMARC Record";
pub const DMARC_POLICY_LABEL: &str = "DMARC Policy";

/// Maps a `p=` token onto the policy finding.
///
/// The token, when present, is kept in [`Finding::extra`].
pub fn classify_dmarc_policy(policy: Option<&str>) -> Finding {
    let (status, message) = match policy {
        Some("none") => (
            Status::Warn,
            "Policy is 'none'. Monitor only, the domain is not protected against spoofing."
                .to_string(),
        ),
        Some("quarantine") => (
            Status::Pass,
            "Policy is 'quarantine'. Suspicious emails will be sent to spam.".to_string(),
        ),
        Some("reject") => (
            Status::Pass,
            "Policy is 'reject'. Suspicious emails will be blocked.".to_string(),
        ),
        Some(other) => (
            Status::Warn,
            format!("Unrecognized policy '{other}'."),
        ),
        None => (
            Status::Warn,
            "Unrecognized policy: the record has no 'p=' tag.".to_string(),
        ),
    };
    let finding = Finding::new(CheckKind::Dmarc, DMARC_POLICY_LABEL, status, message);
    match policy {
        Some(token) => finding.with_extra(token),
        None => finding,
    }
}

/// Classifies the TXT records at `_dmarc.<domain>`.
///
/// One FAIL finding when no `v=DMARC1` record exists; otherwise a PASS
/// presence finding followed by the policy finding.
pub fn classify_dmarc(txt_records: &[String]) -> Vec<Finding> {
    let Some(record) = extract_dmarc_record(txt_records) else {
        return vec![Finding::new(
            CheckKind::Dmarc,
            DMARC_RECORD_LABEL,
            Status::Fail,
            "No DMARC record found.",
        )];
    };
    let policy = extract_dmarc_policy(&record);
    vec![
        Finding::new(
            CheckKind::Dmarc,
            DMARC_RECORD_LABEL,
            Status::Pass,
            format!("Found: {record}"),
        ),
        classify_dmarc_policy(policy.as_deref()),
    ]
}

/// Looks up and classifies the DMARC record of `domain`.
pub async fn check_dmarc<R: TxtLookup>(domain: &str, resolver: &R) -> Vec<Finding> {
    let name = dmarc_query_name(domain);
    match resolver.lookup_txt(&name).await {
        Ok(txt_records) => {
            debug!("DMARC: {} TXT record(s) at {name}", txt_records.len());
            classify_dmarc(&txt_records)
        }
        Err(e) => vec![Finding::new(
            CheckKind::Dmarc,
            DMARC_RECORD_LABEL,
            Status::Fail,
            format!("Could not check DMARC: {e}"),
        )],
    }
}
