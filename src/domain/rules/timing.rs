use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when time-to-first-byte exceeds the limit.
pub struct SlowTtfbRule;

impl Rule for SlowTtfbRule {
    fn name(&self) -> &'static str {
        "slow_ttfb"
    }

    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding> {
        let nav = record.performance.navigation.value()?;
        if nav.ttfb_ms > thresholds.ttfb_slow_ms {
            Some(Finding::error(
                Category::Performance,
                format!(
                    "Slow server response detected ({} ms to first byte).",
                    nav.ttfb_ms
                ),
            ))
        } else {
            None
        }
    }
}

/// Fires when the total page load time exceeds the limit.
pub struct SlowLoadRule;

impl Rule for SlowLoadRule {
    fn name(&self) -> &'static str {
        "slow_load"
    }

    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding> {
        let nav = record.performance.navigation.value()?;
        if nav.load_ms > thresholds.load_slow_ms {
            Some(Finding::error(
                Category::Performance,
                format!("Slow page load detected ({} ms total).", nav.load_ms),
            ))
        } else {
            None
        }
    }
}
