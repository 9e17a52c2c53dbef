//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF, DKIM and DMARC records out of
//! TXT record collections and to build the names those records live at.

use crate::config::{DKIM_LABEL, DMARC_LABEL};

const SPF_PREFIX: &str = "v=spf1";
const DMARC_PREFIX: &str = "v=DMARC1";
const DKIM_MARKER: &str = "v=DKIM1";

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1" (compared case-insensitively).
///
/// # Arguments
///
/// * `txt_records` - Vector of TXT record strings
///
/// # Returns
///
/// The first SPF record found, exactly as published, or `None` if no SPF
/// record exists. Leading whitespace is ignored when matching the prefix.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| starts_with_ignore_case(txt.trim_start(), SPF_PREFIX))
        .cloned()
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` and start with "v=DMARC1".
///
/// # Returns
///
/// The first DMARC record found, unmodified, or `None` if no DMARC record
/// exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| starts_with_ignore_case(txt.trim_start(), DMARC_PREFIX))
        .cloned()
}

/// Finds a DKIM key record among TXT records.
///
/// Any record containing "v=DKIM1" anywhere qualifies; the tag is not
/// required to come first.
pub fn find_dkim_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| contains_ignore_case(txt, DKIM_MARKER))
        .cloned()
}

/// Extracts the `p=` policy token from a DMARC record.
///
/// Tags are split on `;` and trimmed. The value is lowercased. `sp=` and
/// other tags ending in `p` do not match.
///
/// # Returns
///
/// The policy value, or `None` if the record has no non-empty `p` tag.
pub fn extract_dmarc_policy(record: &str) -> Option<String> {
    record
        .split(';')
        .filter_map(|tag| tag.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("p"))
        .map(|(_, value)| value.trim().to_ascii_lowercase())
        .filter(|value| !value.is_empty())
}

/// Name of the DMARC record for `domain`.
pub fn dmarc_query_name(domain: &str) -> String {
    format!("{DMARC_LABEL}.{domain}")
}

/// Name of the DKIM key record for `selector` at `domain`.
pub fn dkim_query_name(selector: &str, domain: &str) -> String {
    format!("{selector}.{DKIM_LABEL}.{domain}")
}
