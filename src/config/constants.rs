//! Configuration constants.
//!
//! Defaults for DNS behavior, selector lists and report layout.

use std::time::Duration;

// Network operation timeouts
/// DNS query timeout in seconds.
/// A handful of queries run per invocation, so 5s leaves room for slow
/// authoritative servers without making a dead resolver feel like a hang.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Delay before the single retry of a failed TXT lookup.
pub const DNS_RETRY_DELAY_MS: u64 = 250;
/// Number of retries after the first failed TXT lookup.
pub const DNS_RETRY_MAX_ATTEMPTS: usize = 1;

/// DKIM selectors tried when `--dkim` is absent or parses to nothing.
pub const DEFAULT_DKIM_SELECTORS: &[&str] = &["default", "google"];

/// Label prepended to the domain when querying DMARC.
pub const DMARC_LABEL: &str = "_dmarc";
/// Label placed between the selector and the domain for DKIM queries.
pub const DKIM_LABEL: &str = "_domainkey";

// Report layout
/// Width of the section header rules and centered titles.
pub const HEADER_WIDTH: usize = 50;
/// Character repeated to draw the section header rules.
pub const HEADER_RULE_CHAR: char = '=';
/// Column width of the left-justified status label.
pub const LABEL_WIDTH: usize = 15;

// Domain limits (RFC 1035)
pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Environment variable backing `--domain`.
pub const ENV_DOMAIN: &str = "MAIL_AUTH_CHECK_DOMAIN";
/// Environment variable backing `--dkim`.
pub const ENV_DKIM: &str = "MAIL_AUTH_CHECK_DKIM";

/// Per-query DNS timeout as a `Duration`.
pub const DNS_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS);
