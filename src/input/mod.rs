//! Obtaining the domain and DKIM selectors from the user.
//!
//! The domain comes from either the command line or an interactive prompt.
//! Both are [`DomainSource`] variants behind [`obtain_domain`].

use std::io::{BufRead, Write};

use log::debug;

use crate::config::DEFAULT_DKIM_SELECTORS;
use crate::domain::normalize_domain;
use crate::error_handling::InputError;

/// Prompt shown when no domain was given on the command line.
pub const DOMAIN_PROMPT: &str = "Enter the domain to check (e.g., google.com): ";

/// Where the domain to check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// Given with `-d/--domain` (or its environment variable).
    Flag(String),
    /// Read one line from stdin after printing [`DOMAIN_PROMPT`].
    Prompt,
}

impl DomainSource {
    /// Chooses the source from the optional command-line value.
    pub fn from_flag(domain: Option<String>) -> Self {
        match domain {
            Some(domain) => DomainSource::Flag(domain),
            None => DomainSource::Prompt,
        }
    }
}

/// Obtains and normalizes the domain from `source`.
///
/// For [`DomainSource::Prompt`] the prompt is written to `prompt_out` and a
/// single line is read from `input`.
///
/// # Errors
///
/// - [`InputError::Missing`] when `input` is at EOF
/// - [`InputError::Empty`] / [`InputError::Invalid`] from normalization
/// - [`InputError::Io`] when reading or writing the prompt fails
pub fn obtain_domain<R: BufRead, W: Write>(
    source: DomainSource,
    mut input: R,
    mut prompt_out: W,
) -> Result<String, InputError> {
    let raw = match source {
        DomainSource::Flag(domain) => domain,
        DomainSource::Prompt => {
            write!(prompt_out, "{DOMAIN_PROMPT}")?;
            prompt_out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(InputError::Missing);
            }
            line
        }
    };
    let domain = normalize_domain(&raw)?;
    debug!("Checking domain {domain}");
    Ok(domain)
}

/// Parses a comma-separated selector override.
///
/// Tokens are trimmed, empty tokens dropped and duplicates removed keeping
/// the first occurrence. An empty result falls back to
/// [`DEFAULT_DKIM_SELECTORS`].
pub fn parse_selectors(raw: &str) -> Vec<String> {
    let mut selectors: Vec<String> = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !selectors.iter().any(|s| s == token) {
            selectors.push(token.to_string());
        }
    }
    if selectors.is_empty() {
        default_selectors()
    } else {
        selectors
    }
}

/// The default selector list.
pub fn default_selectors() -> Vec<String> {
    DEFAULT_DKIM_SELECTORS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
