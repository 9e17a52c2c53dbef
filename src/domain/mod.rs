//! Domain normalization and validation.
//!
//! The domain is used verbatim as a DNS name, so subdomains are kept: no
//! reduction to the registrable domain happens here.
//!
//! Key functions:
//! - `normalize_domain()` - Trims, lowercases and validates a hostname, accepting URLs

use url::Url;

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::InputError;

fn invalid(domain: &str, reason: impl Into<String>) -> InputError {
    InputError::Invalid {
        domain: domain.to_string(),
        reason: reason.into(),
    }
}

/// Extracts the host from URL-shaped input (`https://example.com/path`).
fn host_from_url(input: &str) -> Result<String, InputError> {
    let parsed = Url::parse(input).map_err(|e| invalid(input, e.to_string()))?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(input, "URL has no host"))
}

fn validate_label(domain: &str, label: &str) -> Result<(), InputError> {
    if label.is_empty() {
        return Err(invalid(domain, "empty label"));
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err(invalid(
            domain,
            format!("label '{label}' exceeds {MAX_LABEL_LENGTH} characters"),
        ));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(invalid(
            domain,
            format!("label '{label}' starts or ends with '-'"),
        ));
    }
    if let Some(c) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(domain, format!("invalid character '{c}'")));
    }
    Ok(())
}

/// Normalizes a domain name for DNS queries.
///
/// Trims whitespace, reduces URLs to their host, removes one trailing dot
/// and lowercases. The result must be a syntactically valid hostname.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank input and [`InputError::Invalid`]
/// when the name breaks hostname syntax.
pub fn normalize_domain(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let host = if trimmed.contains("://") {
        host_from_url(trimmed)?
    } else {
        trimmed.to_string()
    };

    let domain = host.strip_suffix('.').unwrap_or(&host).to_ascii_lowercase();
    if domain.is_empty() {
        return Err(InputError::Empty);
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid(
            &domain,
            format!("exceeds {MAX_DOMAIN_LENGTH} characters"),
        ));
    }
    for label in domain.split('.') {
        validate_label(&domain, label)?;
    }
    Ok(domain)
}

#[cfg(test)]
mod tests;
