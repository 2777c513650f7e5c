use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::browser::BrowserFamily;
use crate::domain::value_objects::outcome::{ProbeOutcome, RoundTrip};

/// Unified snapshot of one diagnostic run.
///
/// Built incrementally while probing, immutable once probing completes.
/// Every field is either a concrete value or an explicit
/// `Unavailable`/`Error` marker, never absent without explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub timestamp: DateTime<Utc>,
    pub browser: BrowserReport,
    pub site: SiteReport,
    pub storage: StorageReport,
    pub network: NetworkReport,
    pub performance: PerformanceReport,
    pub system: SystemReport,
    pub checks: FunctionalChecks,
}

/// Browser identity and mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserReport {
    pub user_agent: String,
    pub family: BrowserFamily,
    pub major_version: Option<u32>,
    pub private_mode: ProbeOutcome<bool>,
    pub do_not_track: bool,
    pub language: String,
    pub timezone: String,
}

/// The page under inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReport {
    pub url: String,
    pub hostname: String,
    pub scheme: String,
}

/// Per-backend storage availability and counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageReport {
    pub local_items: ProbeOutcome<u64>,
    pub session_items: ProbeOutcome<u64>,
    pub cookie_count: ProbeOutcome<u64>,
    pub database_count: ProbeOutcome<u64>,
    pub worker_count: ProbeOutcome<u64>,
    pub quota: ProbeOutcome<QuotaEstimate>,
}

/// Storage usage/quota estimate as reported by the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaEstimate {
    pub usage_bytes: u64,
    pub quota_bytes: u64,
}

impl QuotaEstimate {
    /// Usage as a percentage of quota, `0.0` when the quota is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_used(&self) -> f64 {
        if self.quota_bytes > 0 {
            (self.usage_bytes as f64 / self.quota_bytes as f64) * 100.0
        } else {
            0.0
        }
    }

    #[must_use]
    pub const fn usage_mb(&self) -> u64 {
        self.usage_bytes / 1_048_576
    }

    #[must_use]
    pub const fn quota_mb(&self) -> u64 {
        self.quota_bytes / 1_048_576
    }
}

/// Connection-quality hints, when the platform exposes them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionHints {
    pub effective_type: String,
    pub downlink_mbps: Option<f64>,
    pub rtt_ms: Option<u64>,
    pub save_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub connection: ProbeOutcome<ConnectionHints>,
}

/// Durations derived from the navigation timing of the current page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStats {
    pub load_ms: u64,
    pub dom_ready_ms: u64,
    pub ttfb_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub navigation: ProbeOutcome<NavigationStats>,
    /// Same-origin resource-timing entries with a measured duration of
    /// exactly zero, the only observable signature of a blocked
    /// timing-opaque response.
    pub zero_duration_same_origin: u64,
}

/// Platform facts; this probe never fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    pub platform: String,
    pub screen: Dimensions,
    pub viewport: Dimensions,
    pub pixel_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// Live write-then-verify checks plus the on-page error scan.
///
/// Scanned error text is threaded through the record explicitly so the
/// export report never reads from ambient page state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalChecks {
    pub cookie_roundtrip: RoundTrip,
    pub storage_roundtrip: RoundTrip,
    pub dom_roundtrip: RoundTrip,
    pub page_errors: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn make_record() -> DiagnosticRecord {
        DiagnosticRecord {
            timestamp: Utc::now(),
            browser: BrowserReport {
                user_agent: "Mozilla/5.0 Chrome/120.0.0.0 Safari/537.36".into(),
                family: BrowserFamily::Chrome,
                major_version: Some(120),
                private_mode: ProbeOutcome::Value(false),
                do_not_track: false,
                language: "en-US".into(),
                timezone: "Europe/Paris".into(),
            },
            site: SiteReport {
                url: "https://app.example.com/login".into(),
                hostname: "app.example.com".into(),
                scheme: "https".into(),
            },
            storage: StorageReport {
                local_items: ProbeOutcome::Value(3),
                session_items: ProbeOutcome::Value(0),
                cookie_count: ProbeOutcome::Value(5),
                database_count: ProbeOutcome::Value(1),
                worker_count: ProbeOutcome::Value(0),
                quota: ProbeOutcome::Value(QuotaEstimate {
                    usage_bytes: 52_428_800,
                    quota_bytes: 1_073_741_824,
                }),
            },
            network: NetworkReport {
                connection: ProbeOutcome::Unavailable("connection hints not exposed".into()),
            },
            performance: PerformanceReport {
                navigation: ProbeOutcome::Value(NavigationStats {
                    load_ms: 1800,
                    dom_ready_ms: 900,
                    ttfb_ms: 120,
                }),
                zero_duration_same_origin: 0,
            },
            system: SystemReport {
                platform: "Linux x86_64".into(),
                screen: Dimensions {
                    width: 1920,
                    height: 1080,
                },
                viewport: Dimensions {
                    width: 1280,
                    height: 720,
                },
                pixel_ratio: 1.0,
            },
            checks: FunctionalChecks {
                cookie_roundtrip: RoundTrip::Passed,
                storage_roundtrip: RoundTrip::Passed,
                dom_roundtrip: RoundTrip::Passed,
                page_errors: vec![],
            },
        }
    }

    #[test]
    fn quota_percent_used() {
        let estimate = QuotaEstimate {
            usage_bytes: 95,
            quota_bytes: 100,
        };
        assert!((estimate.percent_used() - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quota_percent_zero_quota_is_zero() {
        let estimate = QuotaEstimate {
            usage_bytes: 10,
            quota_bytes: 0,
        };
        assert!((estimate.percent_used() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quota_mb_conversion() {
        let estimate = QuotaEstimate {
            usage_bytes: 52_428_800,
            quota_bytes: 1_073_741_824,
        };
        assert_eq!(estimate.usage_mb(), 50);
        assert_eq!(estimate.quota_mb(), 1024);
    }

    #[test]
    fn dimensions_display() {
        let dims = Dimensions {
            width: 1920,
            height: 1080,
        };
        assert_eq!(dims.to_string(), "1920 × 1080");
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = make_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let deserialized: DiagnosticRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, deserialized);
    }
}
