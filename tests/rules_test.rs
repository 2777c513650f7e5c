#![allow(clippy::expect_used)]

use chrono::Utc;
use sitecheck::domain::entities::record::{
    BrowserReport, ConnectionHints, DiagnosticRecord, Dimensions, FunctionalChecks,
    NavigationStats, NetworkReport, PerformanceReport, QuotaEstimate, SiteReport, StorageReport,
    SystemReport,
};
use sitecheck::domain::rules::{default_rules, Evaluator};
use sitecheck::domain::value_objects::browser::BrowserFamily;
use sitecheck::domain::value_objects::category::Category;
use sitecheck::domain::value_objects::outcome::{ProbeOutcome, RoundTrip};
use sitecheck::domain::value_objects::severity::Severity;
use sitecheck::domain::value_objects::thresholds::ThresholdSet;

fn make_base_record() -> DiagnosticRecord {
    DiagnosticRecord {
        timestamp: Utc::now(),
        browser: BrowserReport {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0"
                .into(),
            family: BrowserFamily::Firefox,
            major_version: Some(121),
            private_mode: ProbeOutcome::Value(false),
            do_not_track: false,
            language: "en-US".into(),
            timezone: "UTC".into(),
        },
        site: SiteReport {
            url: "https://app.example.com/".into(),
            hostname: "app.example.com".into(),
            scheme: "https".into(),
        },
        storage: StorageReport {
            local_items: ProbeOutcome::Value(1),
            session_items: ProbeOutcome::Value(0),
            cookie_count: ProbeOutcome::Value(2),
            database_count: ProbeOutcome::Value(0),
            worker_count: ProbeOutcome::Value(0),
            quota: ProbeOutcome::Value(QuotaEstimate {
                usage_bytes: 100_000_000,
                quota_bytes: 1_000_000_000,
            }),
        },
        network: NetworkReport {
            connection: ProbeOutcome::Value(ConnectionHints {
                effective_type: "4g".into(),
                downlink_mbps: Some(10.0),
                rtt_ms: Some(50),
                save_data: false,
            }),
        },
        performance: PerformanceReport {
            navigation: ProbeOutcome::Value(NavigationStats {
                load_ms: 1500,
                dom_ready_ms: 700,
                ttfb_ms: 90,
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

fn with_quota(mut record: DiagnosticRecord, usage: u64, quota: u64) -> DiagnosticRecord {
    record.storage.quota = ProbeOutcome::Value(QuotaEstimate {
        usage_bytes: usage,
        quota_bytes: quota,
    });
    record
}

fn error_messages(record: &DiagnosticRecord) -> Vec<String> {
    let evaluator = Evaluator::new(default_rules());
    evaluator
        .evaluate(record, &ThresholdSet::default())
        .findings
        .into_iter()
        .filter(|f| f.severity == Severity::Error)
        .map(|f| f.message)
        .collect()
}

#[test]
fn healthy_record_produces_no_findings() {
    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(&make_base_record(), &ThresholdSet::default());
    assert!(evaluation.findings.is_empty());
    assert!(!evaluation.issues_found);
}

#[test]
fn quota_rule_boundary() {
    // 95% fires, 89% does not, exactly 90% does not (strict comparison).
    assert_eq!(error_messages(&with_quota(make_base_record(), 95, 100)).len(), 1);
    assert!(error_messages(&with_quota(make_base_record(), 89, 100)).is_empty());
    assert!(error_messages(&with_quota(make_base_record(), 90, 100)).is_empty());
}

#[test]
fn ua_precedence_edge_over_chrome() {
    let edge_ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";
    assert_eq!(BrowserFamily::classify(edge_ua), BrowserFamily::Edge);
    assert_eq!(
        BrowserFamily::Edge.extract_major_version(edge_ua),
        Some(120)
    );
}

#[test]
fn outdated_version_is_an_error() {
    let mut record = make_base_record();
    record.browser.major_version = Some(98);
    let messages = error_messages(&record);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("outdated"));
}

#[test]
fn unparseable_version_fails_toward_warning() {
    let mut record = make_base_record();
    record.browser.major_version = None;
    assert_eq!(error_messages(&record).len(), 1);
}

#[test]
fn blocked_roundtrips_escalate() {
    let mut record = make_base_record();
    record.checks.cookie_roundtrip = RoundTrip::Blocked;
    record.checks.storage_roundtrip = RoundTrip::Error("storage disabled".into());
    record.checks.dom_roundtrip = RoundTrip::Blocked;
    let messages = error_messages(&record);
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().any(|m| m.contains("Cookies")));
    assert!(messages.iter().any(|m| m.contains("storage disabled")));
    assert!(messages.iter().any(|m| m.contains("blocker")));
}

#[test]
fn informational_findings_do_not_set_issues_flag() {
    let mut record = make_base_record();
    // Chromium family outside private mode plus data saver plus workers:
    // three informational findings, zero issues.
    record.browser.family = BrowserFamily::Chrome;
    record.storage.worker_count = ProbeOutcome::Value(1);
    if let ProbeOutcome::Value(hints) = &mut record.network.connection {
        hints.save_data = true;
    }

    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(&record, &ThresholdSet::default());
    assert_eq!(evaluation.findings.len(), 3);
    assert!(evaluation
        .findings
        .iter()
        .all(|f| f.severity == Severity::Info));
    assert!(!evaluation.issues_found);
}

#[test]
fn end_to_end_scenario_three_errors() {
    // Unencrypted protocol + RTT 600 ms + quota at 95%: exactly three
    // error findings, plus whatever informational notices apply.
    let mut record = with_quota(make_base_record(), 950, 1000);
    record.site.scheme = "http".into();
    if let ProbeOutcome::Value(hints) = &mut record.network.connection {
        hints.rtt_ms = Some(600);
    }

    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(&record, &ThresholdSet::default());

    let errors: Vec<_> = evaluation
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|f| f.category == Category::Site));
    assert!(errors.iter().any(|f| f.category == Category::Network));
    assert!(errors.iter().any(|f| f.category == Category::Storage));
    assert!(evaluation.issues_found);
}

#[test]
fn findings_keep_evaluation_order() {
    let mut record = make_base_record();
    record.site.scheme = "http".into();
    record.browser.major_version = Some(50);

    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(&record, &ThresholdSet::default());

    // The browser rule is declared before the site rule, so its finding
    // must come first regardless of severity.
    let categories: Vec<Category> = evaluation.findings.iter().map(|f| f.category).collect();
    let browser_pos = categories
        .iter()
        .position(|c| *c == Category::Browser)
        .expect("browser finding");
    let site_pos = categories
        .iter()
        .position(|c| *c == Category::Site)
        .expect("site finding");
    assert!(browser_pos < site_pos);
}

#[test]
fn unavailable_subsystems_produce_no_spurious_errors() {
    let mut record = make_base_record();
    record.storage.quota = ProbeOutcome::Unavailable("not exposed".into());
    record.network.connection = ProbeOutcome::Unavailable("not exposed".into());
    record.performance.navigation = ProbeOutcome::Unavailable("no entry".into());

    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(&record, &ThresholdSet::default());
    assert!(!evaluation.issues_found);
}
