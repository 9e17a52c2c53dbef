//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors obtaining the domain to check.
///
/// These are fatal: the run aborts before any DNS query is made.
#[derive(Error, Debug)]
pub enum InputError {
    /// No domain on the command line and stdin closed before one was entered.
    #[error("No domain provided. Use -d/--domain or enter interactively.")]
    Missing,

    /// The domain was blank after trimming.
    #[error("No domain entered.")]
    Empty,

    /// The domain is not a syntactically valid hostname.
    #[error("Invalid domain '{domain}': {reason}")]
    Invalid {
        /// The rejected input
        domain: String,
        /// Why it was rejected
        reason: String,
    },

    /// Reading the interactive prompt failed.
    #[error("Failed to read domain from stdin: {0}")]
    Io(#[from] std::io::Error),
}

/// A TXT lookup that did not produce an answer.
///
/// NXDOMAIN and empty answers are not errors; they resolve to an empty
/// record set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The query timed out.
    #[error("DNS lookup for {name} timed out")]
    Timeout {
        /// The queried name
        name: String,
    },

    /// Network or protocol failure talking to the resolver.
    #[error("DNS lookup for {name} failed: {reason}")]
    Network {
        /// The queried name
        name: String,
        /// Resolver-provided description
        reason: String,
    },
}

impl LookupError {
    /// The name whose lookup failed.
    pub fn name(&self) -> &str {
        match self {
            LookupError::Timeout { name } | LookupError::Network { name, .. } => name,
        }
    }
}
