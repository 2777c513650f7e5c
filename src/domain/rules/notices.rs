//! Informational rules. None of these set the run-level issues flag.

use crate::domain::entities::finding::Finding;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Suggests ruling out extension interference on Chromium-family browsers
/// outside private mode.
pub struct ExtensionInterferenceRule;

impl Rule for ExtensionInterferenceRule {
    fn name(&self) -> &'static str {
        "extension_interference"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        let private = record.browser.private_mode.value().copied().unwrap_or(false);
        if record.browser.family.is_chromium() && !private {
            Some(Finding::info(
                Category::Browser,
                "Browser extensions might be interfering with this site. \
                 Try a private window to verify.",
            ))
        } else {
            None
        }
    }
}

/// Notes a data-saver mode that may limit functionality.
pub struct DataSaverRule;

impl Rule for DataSaverRule {
    fn name(&self) -> &'static str {
        "data_saver"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        let hints = record.network.connection.value()?;
        if hints.save_data {
            Some(Finding::info(
                Category::Network,
                "Data saver is enabled. This might limit functionality.",
            ))
        } else {
            None
        }
    }
}

/// Notes active background workers, a common source of stale-cache issues.
pub struct ServiceWorkerNoticeRule;

impl Rule for ServiceWorkerNoticeRule {
    fn name(&self) -> &'static str {
        "service_worker_notice"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        let count = record.storage.worker_count.value().copied().unwrap_or(0);
        if count > 0 {
            Some(Finding::info(
                Category::Storage,
                "Active service workers detected. These can sometimes cause caching issues.",
            ))
        } else {
            None
        }
    }
}

/// Notes a limited storage quota, typically a sign of private browsing.
pub struct LimitedQuotaRule;

impl Rule for LimitedQuotaRule {
    fn name(&self) -> &'static str {
        "limited_quota"
    }

    fn evaluate(&self, record: &DiagnosticRecord, thresholds: &ThresholdSet) -> Option<Finding> {
        let private = record.browser.private_mode.value().copied().unwrap_or(false);
        let small_quota = record
            .storage
            .quota
            .value()
            .is_some_and(|q| q.quota_bytes < thresholds.private_quota_bytes);
        if private || small_quota {
            Some(Finding::info(
                Category::Storage,
                "Detected limited storage quota, possibly due to private browsing.",
            ))
        } else {
            None
        }
    }
}

const SAFARI_MODERN_FLOOR: u32 = 16;

/// Notes older Safari releases, which lag evergreen browsers on web
/// platform features.
pub struct OldSafariRule;

impl Rule for OldSafariRule {
    fn name(&self) -> &'static str {
        "old_safari"
    }

    fn evaluate(&self, record: &DiagnosticRecord, _: &ThresholdSet) -> Option<Finding> {
        use crate::domain::value_objects::browser::BrowserFamily;
        if record.browser.family != BrowserFamily::Safari {
            return None;
        }
        let old = record
            .browser
            .major_version
            .is_none_or(|v| v < SAFARI_MODERN_FLOOR);
        if old {
            Some(Finding::info(
                Category::Browser,
                "Using an older Safari version which may have compatibility issues \
                 with modern websites.",
            ))
        } else {
            None
        }
    }
}
