#![allow(clippy::expect_used)]

use sitecheck::application::services::diagnose::{
    DiagnosticService, COOKIE_PROBE_NAME, DOM_PROBE_MARKER, STORAGE_PROBE_KEY,
};
use sitecheck::domain::ports::storage::{CookieJar, KeyValueStore};
use sitecheck::domain::ports::PageEnvironment;
use sitecheck::domain::rules::{default_rules, Evaluator};
use sitecheck::domain::value_objects::browser::BrowserFamily;
use sitecheck::domain::value_objects::outcome::{ProbeOutcome, RoundTrip};
use sitecheck::domain::value_objects::severity::Severity;
use sitecheck::domain::value_objects::thresholds::ThresholdSet;
use sitecheck::infrastructure::session::{CapturedSession, CapturedStore, SessionCapture};

fn load_fixture(name: &str) -> CapturedSession {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    CapturedSession::load(&path).expect("Failed to load fixture")
}

fn session_from_json(json: &str) -> CapturedSession {
    let capture: SessionCapture = serde_json::from_str(json).expect("Failed to parse capture");
    CapturedSession::new(capture)
}

fn wire<'a>(
    session: &'a CapturedSession,
    local: &'a CapturedStore,
    session_store: &'a CapturedStore,
) -> PageEnvironment<'a> {
    PageEnvironment {
        session,
        local,
        session_store,
        cookies: session,
        databases: session,
        workers: session,
        caches: session,
        quota: session,
        connection: session,
        timeline: session,
        dom: session,
    }
}

#[test]
fn healthy_fixture_gathers_clean_record() {
    let session = load_fixture("healthy.json");
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();

    assert_eq!(record.browser.family, BrowserFamily::Firefox);
    assert_eq!(record.browser.major_version, Some(121));
    assert_eq!(record.browser.private_mode, ProbeOutcome::Value(false));
    assert_eq!(record.site.hostname, "app.example.com");
    assert_eq!(record.site.scheme, "https");
    assert_eq!(record.storage.local_items, ProbeOutcome::Value(2));
    assert_eq!(record.storage.cookie_count, ProbeOutcome::Value(2));
    assert_eq!(record.checks.cookie_roundtrip, RoundTrip::Passed);
    assert_eq!(record.checks.storage_roundtrip, RoundTrip::Passed);
    assert_eq!(record.checks.dom_roundtrip, RoundTrip::Passed);

    let nav = record
        .performance
        .navigation
        .value()
        .expect("navigation stats");
    assert_eq!(nav.ttfb_ms, 80);
    assert_eq!(nav.dom_ready_ms, 610);
    assert_eq!(nav.load_ms, 1230);

    let evaluation = Evaluator::new(default_rules()).evaluate(&record, &thresholds);
    assert!(!evaluation.issues_found);
}

#[test]
fn degraded_fixture_yields_exactly_three_errors() {
    let session = load_fixture("degraded.json");
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    let evaluation = Evaluator::new(default_rules()).evaluate(&record, &thresholds);

    let errors: Vec<_> = evaluation
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 3, "expected exactly three error findings");
    assert!(errors.iter().any(|f| f.message.contains("insecure")));
    assert!(errors.iter().any(|f| f.message.contains("latency")));
    assert!(errors.iter().any(|f| f.message.contains("nearly full")));
    assert!(evaluation.issues_found);

    // The on-page error scan is threaded through the record.
    assert_eq!(
        record.checks.page_errors,
        vec!["Order lookup failed: please retry".to_string()]
    );
}

#[test]
fn roundtrip_probes_leave_no_residue() {
    let session = load_fixture("healthy.json");
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let before_local = local.item_count().expect("count");
    let before_cookies = CookieJar::names(&session).expect("names").len();

    DiagnosticService::new(&env, &thresholds).gather();

    assert_eq!(local.item_count().expect("count"), before_local);
    assert_eq!(CookieJar::names(&session).expect("names").len(), before_cookies);
    assert_eq!(local.get(STORAGE_PROBE_KEY).expect("get"), None);
    assert!(!session.contains(COOKIE_PROBE_NAME).expect("contains"));
    assert!(!sitecheck::domain::ports::dom::DomAccess::marker_present(&session, DOM_PROBE_MARKER)
        .expect("marker query"));
}

#[test]
fn blocked_backends_surface_as_blocked_roundtrips() {
    let session = session_from_json(
        r#"{
            "page": { "url": "https://x.test/", "user_agent": "Mozilla/5.0 Firefox/121.0" },
            "restrictions": { "cookies": "blocked", "local": "blocked", "dom": "blocked" }
        }"#,
    );
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    assert_eq!(record.checks.cookie_roundtrip, RoundTrip::Blocked);
    assert_eq!(record.checks.storage_roundtrip, RoundTrip::Blocked);
    assert_eq!(record.checks.dom_roundtrip, RoundTrip::Blocked);

    let evaluation = Evaluator::new(default_rules()).evaluate(&record, &thresholds);
    assert!(evaluation.issues_found);
}

#[test]
fn denied_backend_is_an_error_outcome_not_a_crash() {
    let session = session_from_json(
        r#"{
            "page": { "url": "https://x.test/", "user_agent": "Mozilla/5.0 Firefox/121.0" },
            "restrictions": { "local": "denied" }
        }"#,
    );
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    assert!(record.storage.local_items.is_error());
    assert!(matches!(
        record.checks.storage_roundtrip,
        RoundTrip::Error(_)
    ));
    // Sibling backends are unaffected.
    assert_eq!(record.storage.session_items, ProbeOutcome::Value(0));
    assert_eq!(record.checks.cookie_roundtrip, RoundTrip::Passed);
}

#[test]
fn privacy_fallback_without_quota_estimate() {
    // No quota estimate: the fallback transient write decides, and a
    // writable local store means not private.
    let session = session_from_json(
        r#"{ "page": { "url": "https://x.test/", "user_agent": "Mozilla/5.0 Firefox/121.0" } }"#,
    );
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    assert_eq!(record.browser.private_mode, ProbeOutcome::Value(false));
    assert!(record.storage.quota.is_unavailable());
    // The fallback key was removed.
    assert_eq!(local.get("sitecheck_probe_private").expect("get"), None);
}

#[test]
fn privacy_fallback_detects_denied_store_as_private() {
    let session = session_from_json(
        r#"{
            "page": { "url": "https://x.test/", "user_agent": "Mozilla/5.0 Firefox/121.0" },
            "restrictions": { "local": "denied" }
        }"#,
    );
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    assert_eq!(record.browser.private_mode, ProbeOutcome::Value(true));
}

#[test]
fn small_quota_flags_private_mode() {
    let session = session_from_json(
        r#"{
            "page": { "url": "https://x.test/", "user_agent": "Mozilla/5.0 Firefox/121.0" },
            "storage": { "quota": { "usage_bytes": 0, "quota_bytes": 50000000 } }
        }"#,
    );
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    assert_eq!(record.browser.private_mode, ProbeOutcome::Value(true));
}

#[test]
fn zero_duration_same_origin_resources_are_counted() {
    let session = session_from_json(
        r#"{
            "page": { "url": "https://x.test/", "user_agent": "Mozilla/5.0 Firefox/121.0" },
            "timing": {
                "resources": [
                    { "url": "https://x.test/app.js", "duration_ms": 0.0 },
                    { "url": "https://x.test/style.css", "duration_ms": 12.0 },
                    { "url": "https://other.test/lib.js", "duration_ms": 0.0 }
                ]
            }
        }"#,
    );
    let local = session.local_store();
    let session_store = session.session_store();
    let env = wire(&session, &local, &session_store);
    let thresholds = ThresholdSet::default();

    let record = DiagnosticService::new(&env, &thresholds).gather();
    // Only the same-origin zero-duration entry counts.
    assert_eq!(record.performance.zero_duration_same_origin, 1);

    let evaluation = Evaluator::new(default_rules()).evaluate(&record, &thresholds);
    assert!(evaluation
        .findings
        .iter()
        .any(|f| f.message.contains("cross-origin")));
}
