use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when the page was served over an unencrypted scheme.
pub struct InsecureProtocolRule;

impl Rule for InsecureProtocolRule {
    fn name(&self) -> &'static str {
        "insecure_protocol"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        if record.site.scheme == "https" {
            None
        } else {
            Some(Finding::error(
                Category::Site,
                "Site is using an insecure protocol. This can cause issues with modern browsers.",
            ))
        }
    }
}
