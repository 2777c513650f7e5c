use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires for evergreen browser families below the supported version floor.
///
/// A version that cannot be extracted at all counts as below the floor:
/// failing toward a warning beats staying silent on an unparseable agent.
pub struct OutdatedBrowserRule;

impl Rule for OutdatedBrowserRule {
    fn name(&self) -> &'static str {
        "outdated_browser"
    }

    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding> {
        if !record.browser.family.has_version_floor() {
            return None;
        }
        let outdated = record
            .browser
            .major_version
            .is_none_or(|v| v < thresholds.version_floor);
        if outdated {
            Some(Finding::error(
                Category::Browser,
                format!(
                    "Using an outdated {} version which may cause compatibility issues.",
                    record.browser.family
                ),
            ))
        } else {
            None
        }
    }
}
