use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::outcome::RoundTrip;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when the DOM insertion round-trip could not retrieve its marker
/// immediately after inserting it, meaning the element was intercepted by
/// a content-filtering agent.
pub struct ContentBlockerRule;

impl Rule for ContentBlockerRule {
    fn name(&self) -> &'static str {
        "content_blocker"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        match &record.checks.dom_roundtrip {
            RoundTrip::Blocked => Some(Finding::error(
                Category::Site,
                "Content or ad blocker detected that might interfere with site functionality.",
            )),
            // A faulted DOM probe is inconclusive; the fault is already
            // visible in the record itself.
            RoundTrip::Passed | RoundTrip::Error(_) => None,
        }
    }
}
