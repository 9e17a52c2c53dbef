//! Lookup statistics tracking.
//!
//! Counts TXT lookups made during a run so the binary can tell a run where
//! some checks failed apart from one where the resolver never answered.

use std::cell::Cell;

use serde::Serialize;

/// Counters for the lookups of a single run.
///
/// Runs are sequential, so plain `Cell` counters suffice.
#[derive(Debug, Default)]
pub struct LookupStats {
    attempted: Cell<usize>,
    failed: Cell<usize>,
}

/// Snapshot of [`LookupStats`] attached to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LookupSummary {
    /// Lookups issued
    pub attempted: usize,
    /// Lookups that ended in a resolution error
    pub failed: usize,
}

impl LookupSummary {
    /// True when lookups were made and every one of them failed.
    pub fn resolver_unreachable(&self) -> bool {
        self.attempted > 0 && self.failed == self.attempted
    }
}

impl LookupStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_attempt(&self) {
        self.attempted.set(self.attempted.get() + 1);
    }

    pub fn record_failure(&self) {
        self.failed.set(self.failed.get() + 1);
    }

    pub fn summary(&self) -> LookupSummary {
        LookupSummary {
            attempted: self.attempted.get(),
            failed: self.failed.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = LookupStats::new();
        assert_eq!(stats.summary(), LookupSummary::default());
        assert!(!stats.summary().resolver_unreachable());
    }

    #[test]
    fn test_all_failed_is_unreachable() {
        let stats = LookupStats::new();
        for _ in 0..3 {
            stats.record_attempt();
            stats.record_failure();
        }
        assert!(stats.summary().resolver_unreachable());
    }

    #[test]
    fn test_partial_failure_is_not_unreachable() {
        let stats = LookupStats::new();
        stats.record_attempt();
        stats.record_attempt();
        stats.record_failure();
        let summary = stats.summary();
        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.resolver_unreachable());
    }
}
