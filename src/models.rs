use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::error_handling::LookupSummary;

/// The record family a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckKind {
    #[strum(serialize = "SPF")]
    Spf,
    #[strum(serialize = "DKIM")]
    Dkim,
    #[strum(serialize = "DMARC")]
    Dmarc,
}

impl CheckKind {
    /// Section title used by the text report.
    pub fn title(&self) -> &'static str {
        match self {
            CheckKind::Spf => "SPF (Sender Policy Framework) Check",
            CheckKind::Dkim => "DKIM (DomainKeys Identified Mail) Check",
            CheckKind::Dmarc => {
                "DMARC (Domain-based Message Authentication, Reporting & Conformance) Check"
            }
        }
    }
}

/// Outcome of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

/// One line of the report, produced by a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check: CheckKind,
    pub label: String,
    pub status: Status,
    pub message: String,
    /// DMARC policy token, when the finding is about the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Finding {
    pub fn new(
        check: CheckKind,
        label: impl Into<String>,
        status: Status,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check,
            label: label.into(),
            status,
            message: message.into(),
            extra: None,
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}

/// Everything a run produced, in check order.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub domain: String,
    pub selectors: Vec<String>,
    pub findings: Vec<Finding>,
    pub lookups: LookupSummary,
}

impl CheckReport {
    /// Findings for one check, in the order they were produced.
    pub fn findings_for(&self, check: CheckKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.check == check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Pass.to_string(), "PASS");
        assert_eq!(Status::Warn.to_string(), "WARN");
        assert_eq!(Status::Fail.to_string(), "FAIL");
    }

    #[test]
    fn test_check_kind_display() {
        assert_eq!(CheckKind::Spf.to_string(), "SPF");
        assert_eq!(CheckKind::Dkim.to_string(), "DKIM");
        assert_eq!(CheckKind::Dmarc.to_string(), "DMARC");
    }

    #[test]
    fn test_finding_serializes_without_empty_extra() {
        let finding = Finding::new(CheckKind::Spf, "SPF Record", Status::Fail, "missing");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["check"], "SPF");
        assert_eq!(json["status"], "FAIL");
        assert!(json.get("extra").is_none());

        let with_policy = Finding::new(CheckKind::Dmarc, "DMARC Policy", Status::Pass, "ok")
            .with_extra("reject");
        let json = serde_json::to_value(&with_policy).unwrap();
        assert_eq!(json["extra"], "reject");
    }
}
