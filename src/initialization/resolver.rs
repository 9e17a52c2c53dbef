//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::error_handling::InitializationError;

/// Builds the resolver options for a run.
///
/// `attempts` is 1 because [`RetryingLookup`](crate::dns::RetryingLookup)
/// does its own retry. `ndots` is 0 so names are never expanded with search
/// domains.
pub fn resolver_opts(base: ResolverOpts, timeout_seconds: u64) -> ResolverOpts {
    let mut opts = base;
    opts.timeout = Duration::from_secs(timeout_seconds);
    opts.attempts = 1;
    opts.ndots = 0;
    opts
}

/// Initializes the DNS resolver for TXT lookups.
///
/// Uses the system configuration (`/etc/resolv.conf` on Unix) when it can be
/// read and falls back to hickory's default upstream servers otherwise.
///
/// # Arguments
///
/// * `timeout_seconds` - Per-query timeout
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout_seconds` is 0.
pub fn init_resolver(timeout_seconds: u64) -> Result<TokioAsyncResolver, InitializationError> {
    if timeout_seconds == 0 {
        return Err(InitializationError::DnsResolverError(
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let (config, base_opts) = match read_system_conf() {
        Ok((config, opts)) => {
            debug!(
                "Using system DNS configuration ({} name server(s))",
                config.name_servers().len()
            );
            (config, opts)
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    Ok(TokioAsyncResolver::tokio(
        config,
        resolver_opts(base_opts, timeout_seconds),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_opts_applies_timeout() {
        let opts = resolver_opts(ResolverOpts::default(), 7);
        assert_eq!(opts.timeout, Duration::from_secs(7));
        assert_eq!(opts.attempts, 1);
        assert_eq!(opts.ndots, 0);
    }

    #[test]
    fn test_init_resolver_rejects_zero_timeout() {
        assert!(matches!(
            init_resolver(0),
            Err(InitializationError::DnsResolverError(_))
        ));
    }
}
