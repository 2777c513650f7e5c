use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when the reported connection round-trip time exceeds the limit.
pub struct HighLatencyRule;

impl Rule for HighLatencyRule {
    fn name(&self) -> &'static str {
        "high_latency"
    }

    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding> {
        let hints = record.network.connection.value()?;
        let rtt = hints.rtt_ms?;
        if rtt > thresholds.rtt_high_ms {
            Some(Finding::error(
                Category::Network,
                format!("High latency detected ({rtt} ms round-trip). This might cause timeouts."),
            ))
        } else {
            None
        }
    }
}
