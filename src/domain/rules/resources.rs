use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when any same-origin resource-timing entry measured a duration of
/// exactly zero, the only observable signature of a blocked timing-opaque
/// response.
pub struct BlockedResourceRule;

impl Rule for BlockedResourceRule {
    fn name(&self) -> &'static str {
        "blocked_resources"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        if record.performance.zero_duration_same_origin > 0 {
            Some(Finding::error(
                Category::Network,
                format!(
                    "Potential cross-origin blockage detected for {} resource(s) on this site.",
                    record.performance.zero_duration_same_origin
                ),
            ))
        } else {
            None
        }
    }
}
