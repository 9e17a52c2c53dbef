//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, input, DNS lookup)
//! - Categorization of resolver errors into [`LookupError`]
//! - Retry strategy for failed lookups
//! - Per-run lookup counters
//!
//! Only [`InputError`] aborts a run. Lookup errors are reported as failed
//! findings and the remaining checks still execute.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, get_retry_strategy, LookupOutcome};
pub use stats::{LookupStats, LookupSummary};
pub use types::{InitializationError, InputError, LookupError};
