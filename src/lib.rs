//! mail_auth_check library: SPF, DKIM and DMARC posture checks over DNS
//!
//! This library looks up the TXT records that carry a domain's email
//! authentication setup and classifies them into PASS / WARN / FAIL findings.
//!
//! # Example
//!
//! ```no_run
//! use mail_auth_check::initialization::init_resolver;
//! use mail_auth_check::{run_checks, render_report, OutputFormat};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(5)?;
//! let selectors = vec!["default".to_string(), "google".to_string()];
//! let report = run_checks("example.com", &selectors, &resolver).await;
//! render_report(&report, OutputFormat::Text, false, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The `hickory-resolver` backed lookups need a Tokio runtime. Checks run
//! sequentially, so a `current_thread` runtime is enough.

pub mod checks;
pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod models;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use domain::normalize_domain;
pub use models::{CheckKind, CheckReport, Finding, Status};
pub use report::render_report;
pub use run::{exit_code_for, run_checks, EXIT_INPUT_ERROR, EXIT_OK, EXIT_RESOLVER_ERROR};

// Internal run module (ties the lookups, checks and report together)
mod run {
    use log::{info, warn};

    use crate::checks::run_all_checks;
    use crate::dns::{CountingLookup, RetryingLookup, TxtLookup};
    use crate::error_handling::LookupStats;
    use crate::models::{CheckReport, Status};

    /// Normal completion, whatever the findings say.
    pub const EXIT_OK: i32 = 0;
    /// No usable domain was provided.
    pub const EXIT_INPUT_ERROR: i32 = 1;
    /// The resolver could not be set up or never answered.
    pub const EXIT_RESOLVER_ERROR: i32 = 2;

    /// Runs the SPF, DKIM and DMARC checks for `domain`.
    ///
    /// # Arguments
    ///
    /// * `domain` - A normalized domain (see [`normalize_domain`](crate::normalize_domain))
    /// * `selectors` - DKIM selectors, tried in order
    /// * `resolver` - Source of TXT records
    ///
    /// # Returns
    ///
    /// The report with findings in check order. Failed lookups are retried
    /// once, then appear as FAIL findings; this function itself does not fail.
    pub async fn run_checks<R: TxtLookup>(
        domain: &str,
        selectors: &[String],
        resolver: &R,
    ) -> CheckReport {
        let stats = LookupStats::new();
        // Counted once per logical lookup, retries included
        let retrying = RetryingLookup::new(resolver);
        let lookup = CountingLookup::new(&retrying, &stats);

        info!("Checking SPF, DKIM and DMARC for {domain}");
        let findings = run_all_checks(domain, selectors, &lookup).await;

        let lookups = stats.summary();
        let failing = findings.iter().filter(|f| f.status == Status::Fail).count();
        info!(
            "Finished {domain}: {} finding(s), {failing} failing, {} of {} lookup(s) failed",
            findings.len(),
            lookups.failed,
            lookups.attempted
        );
        if lookups.resolver_unreachable() {
            warn!("Every DNS lookup for {domain} failed; the resolver looks unreachable");
        }

        CheckReport {
            domain: domain.to_string(),
            selectors: selectors.to_vec(),
            findings,
            lookups,
        }
    }

    /// Exit code for a completed run.
    ///
    /// Check outcomes never change the exit code. Only a run in which every
    /// lookup failed maps to [`EXIT_RESOLVER_ERROR`].
    pub fn exit_code_for(report: &CheckReport) -> i32 {
        if report.lookups.resolver_unreachable() {
            EXIT_RESOLVER_ERROR
        } else {
            EXIT_OK
        }
    }

}
