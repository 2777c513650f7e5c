use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::outcome::RoundTrip;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when the cookie write/read round-trip did not pass.
pub struct CookieRoundtripRule;

impl Rule for CookieRoundtripRule {
    fn name(&self) -> &'static str {
        "cookie_roundtrip"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        match &record.checks.cookie_roundtrip {
            RoundTrip::Passed => None,
            RoundTrip::Blocked => Some(Finding::error(
                Category::Storage,
                "Cookies appear to be blocked. This will cause login issues.",
            )),
            RoundTrip::Error(message) => Some(Finding::error(
                Category::Storage,
                format!("Cookie access error: {message}"),
            )),
        }
    }
}

/// Fires when the key-value store write/read round-trip did not pass.
pub struct StorageRoundtripRule;

impl Rule for StorageRoundtripRule {
    fn name(&self) -> &'static str {
        "storage_roundtrip"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        match &record.checks.storage_roundtrip {
            RoundTrip::Passed => None,
            RoundTrip::Blocked => Some(Finding::error(
                Category::Storage,
                "Local storage appears to be blocked.",
            )),
            RoundTrip::Error(message) => Some(Finding::error(
                Category::Storage,
                format!("Local storage access error: {message}"),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::rules::test_support::healthy_record;
    use crate::domain::value_objects::severity::Severity;

    #[test]
    fn both_quiet_when_passed() {
        let record = healthy_record();
        assert!(CookieRoundtripRule
            .evaluate(&record, &ThresholdSet::default())
            .is_none());
        assert!(StorageRoundtripRule
            .evaluate(&record, &ThresholdSet::default())
            .is_none());
    }

    #[test]
    fn cookie_blocked_fires() {
        let mut record = healthy_record();
        record.checks.cookie_roundtrip = RoundTrip::Blocked;
        let finding = CookieRoundtripRule
            .evaluate(&record, &ThresholdSet::default())
            .expect("blocked should fire");
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.contains("blocked"));
    }

    #[test]
    fn cookie_error_carries_fault_message() {
        let mut record = healthy_record();
        record.checks.cookie_roundtrip = RoundTrip::Error("cookies disabled".into());
        let finding = CookieRoundtripRule
            .evaluate(&record, &ThresholdSet::default())
            .expect("error should fire");
        assert!(finding.message.contains("cookies disabled"));
    }

    #[test]
    fn storage_blocked_fires() {
        let mut record = healthy_record();
        record.checks.storage_roundtrip = RoundTrip::Blocked;
        let finding = StorageRoundtripRule
            .evaluate(&record, &ThresholdSet::default())
            .expect("blocked should fire");
        assert!(finding.message.contains("blocked"));
    }

    #[test]
    fn storage_error_carries_fault_message() {
        let mut record = healthy_record();
        record.checks.storage_roundtrip = RoundTrip::Error("quota exceeded".into());
        let finding = StorageRoundtripRule
            .evaluate(&record, &ThresholdSet::default())
            .expect("error should fire");
        assert!(finding.message.contains("quota exceeded"));
    }
}
