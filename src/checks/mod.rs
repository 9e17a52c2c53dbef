//! Record classifiers.
//!
//! Each check reads TXT records through a [`TxtLookup`] and turns them into
//! [`Finding`]s. The pure `classify_*` functions hold the rule tables; the
//! async `check_*` functions add the DNS query and lookup-failure handling.

mod dkim;
mod dmarc;
mod spf;

pub use dkim::{check_dkim, classify_dkim, DKIM_RECORD_LABEL};
pub use dmarc::{
    check_dmarc, classify_dmarc, classify_dmarc_policy, DMARC_POLICY_LABEL, DMARC_RECORD_LABEL,
};
pub use spf::{check_spf, classify_spf, SPF_RECORD_LABEL};

use crate::dns::TxtLookup;
use crate::models::Finding;

/// Runs the SPF, DKIM and DMARC checks in that order.
pub async fn run_all_checks<R: TxtLookup>(
    domain: &str,
    selectors: &[String],
    resolver: &R,
) -> Vec<Finding> {
    let mut findings = vec![check_spf(domain, resolver).await];
    findings.push(check_dkim(domain, selectors, resolver).await);
    findings.extend(check_dmarc(domain, resolver).await);
    findings
}


#[cfg(test)]
mod tests {
    use super::fake::FakeResolver;
    use super::*;
    use crate::models::{CheckKind, Status};

    fn selectors(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_all_checks_order() {
        let resolver = FakeResolver::default()
            .with_txt("example.com", &["v=spf1 -all"])
            .with_txt("default._domainkey.example.com", &["v=DKIM1; p=abc"])
            .with_txt("_dmarc.example.com", &["v=DMARC1; p=quarantine"]);

        let findings =
            run_all_checks("example.com", &selectors(&["default", "google"]), &resolver).await;

        let kinds: Vec<CheckKind> = findings.iter().map(|f| f.check).collect();
        assert_eq!(
            kinds,
            vec![
                CheckKind::Spf,
                CheckKind::Dkim,
                CheckKind::Dmarc,
                CheckKind::Dmarc
            ]
        );
        assert!(findings.iter().all(|f| f.status == Status::Pass));
    }

    #[tokio::test]
    async fn test_spf_timeout_does_not_stop_later_checks() {
        let resolver = FakeResolver::default()
            .with_timeout("example.com")
            .with_txt("google._domainkey.example.com", &["v=DKIM1; p=abc"])
            .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject"]);

        let findings =
            run_all_checks("example.com", &selectors(&["default", "google"]), &resolver).await;

        assert_eq!(findings[0].check, CheckKind::Spf);
        assert_eq!(findings[0].status, Status::Fail);
        assert!(findings[0].message.contains("timed out"));
        assert_ne!(findings[0].message, "No SPF record found.");

        assert_eq!(findings[1].check, CheckKind::Dkim);
        assert_eq!(findings[1].status, Status::Pass);
        assert_eq!(findings[2].status, Status::Pass);
        assert_eq!(findings[3].status, Status::Pass);
    }
}
