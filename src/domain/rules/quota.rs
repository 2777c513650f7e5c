use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when storage usage is strictly above the warning percentage.
/// A usage of exactly the threshold does not fire.
pub struct QuotaNearlyFullRule;

impl Rule for QuotaNearlyFullRule {
    fn name(&self) -> &'static str {
        "storage_quota"
    }

    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding> {
        let estimate = record.storage.quota.value()?;
        if estimate.percent_used() > thresholds.quota_warn_percent {
            Some(Finding::error(
                Category::Storage,
                format!(
                    "Browser storage is nearly full ({:.0}% of {} MB used). This can cause errors.",
                    estimate.percent_used(),
                    estimate.quota_mb()
                ),
            ))
        } else {
            None
        }
    }
}
