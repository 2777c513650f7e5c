pub mod content_blocker;
pub mod latency;
pub mod notices;
pub mod protocol;
pub mod quota;
pub mod resources;
pub mod roundtrip;
pub mod timing;
pub mod version;

use crate::domain::entities::finding::{Evaluation, Finding};
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// A deterministic issue rule: record + thresholds in, at most one finding
/// out. Rules are pure functions with no I/O; the live functional-probe
/// results they consume are already part of the record.
pub trait Rule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a diagnostic record
    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding>;
}

/// Returns the full ruleset in evaluation order.
///
/// The order is fixed and groups findings by display category; it has no
/// bearing on correctness.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(version::OutdatedBrowserRule),
        Box::new(notices::OldSafariRule),
        Box::new(notices::ExtensionInterferenceRule),
        Box::new(protocol::InsecureProtocolRule),
        Box::new(content_blocker::ContentBlockerRule),
        Box::new(roundtrip::CookieRoundtripRule),
        Box::new(roundtrip::StorageRoundtripRule),
        Box::new(quota::QuotaNearlyFullRule),
        Box::new(notices::LimitedQuotaRule),
        Box::new(notices::ServiceWorkerNoticeRule),
        Box::new(latency::HighLatencyRule),
        Box::new(resources::BlockedResourceRule),
        Box::new(notices::DataSaverRule),
        Box::new(timing::SlowTtfbRule),
        Box::new(timing::SlowLoadRule),
    ]
}

/// Runs a ruleset against a diagnostic record.
///
/// Findings keep the evaluation order and are never sorted or
/// deduplicated. `issues_found` is set iff any error-severity finding
/// was produced.
pub struct Evaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl Evaluator {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Evaluation {
        let findings: Vec<Finding> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(record, thresholds))
            .collect();
        let issues_found = findings.iter().any(|f| f.severity.is_issue());
        Evaluation {
            findings,
            issues_found,
        }
    }
}
