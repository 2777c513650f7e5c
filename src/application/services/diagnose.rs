use chrono::Utc;

use crate::domain::entities::record::{
    BrowserReport, DiagnosticRecord, FunctionalChecks, NavigationStats, NetworkReport,
    PerformanceReport, SiteReport, StorageReport, SystemReport,
};
use crate::domain::ports::dom::DomAccess;
use crate::domain::ports::network::ConnectionMonitor;
use crate::domain::ports::session::PageSession;
use crate::domain::ports::storage::{
    CookieJar, DatabaseRegistry, KeyValueStore, QuotaEstimator, StorageError, WorkerRegistry,
};
use crate::domain::ports::timeline::PerformanceTimeline;
use crate::domain::ports::PageEnvironment;
use crate::domain::value_objects::browser::BrowserFamily;
use crate::domain::value_objects::outcome::{ProbeOutcome, RoundTrip};
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Identifier used by the transient privacy-mode fallback write.
pub const PRIVACY_PROBE_KEY: &str = "sitecheck_probe_private";
/// Identifier used by the cookie round-trip check.
pub const COOKIE_PROBE_NAME: &str = "sitecheck_probe_cookie";
/// Identifier used by the key-value round-trip check.
pub const STORAGE_PROBE_KEY: &str = "sitecheck_probe_storage";
/// Identifier used by the DOM insertion round-trip check.
pub const DOM_PROBE_MARKER: &str = "sitecheck_probe_marker";

/// Converts a port result into a probe outcome: `Unavailable` stays an
/// expected absence, everything else that failed becomes an `Error`.
fn outcome_from<T>(result: Result<T, StorageError>) -> ProbeOutcome<T> {
    match result {
        Ok(value) => ProbeOutcome::Value(value),
        Err(StorageError::Unavailable(reason)) => ProbeOutcome::Unavailable(reason),
        Err(err) => ProbeOutcome::Error(err.to_string()),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn delta_ms(later: f64, earlier: f64) -> u64 {
    (later - earlier).max(0.0).round() as u64
}

/// Runs the probe set against a page environment and aggregates the
/// outcomes into one diagnostic record.
///
/// Gathering never fails: every probe is individually isolated, and a
/// fault in one subsystem lands in the record as an `Error` outcome
/// without aborting the run.
pub struct DiagnosticService<'a> {
    env: &'a PageEnvironment<'a>,
    thresholds: &'a ThresholdSet,
}

impl<'a> DiagnosticService<'a> {
    #[must_use]
    pub const fn new(env: &'a PageEnvironment<'a>, thresholds: &'a ThresholdSet) -> Self {
        Self { env, thresholds }
    }

    /// Collects one complete snapshot. Probes run strictly sequentially;
    /// the privacy probe runs before anything that consumes its outcome,
    /// and the functional round-trips run last.
    #[must_use]
    pub fn gather(&self) -> DiagnosticRecord {
        let browser = self.probe_browser();
        let site = self.probe_site();
        let storage = self.probe_storage();
        let network = self.probe_network();
        let performance = self.probe_performance(&site.hostname);
        let system = self.probe_system();
        let checks = self.run_functional_checks();

        DiagnosticRecord {
            timestamp: Utc::now(),
            browser,
            site,
            storage,
            network,
            performance,
            system,
            checks,
        }
    }

    fn probe_browser(&self) -> BrowserReport {
        let user_agent = self.env.session.user_agent();
        let family = BrowserFamily::classify(&user_agent);
        let major_version = family.extract_major_version(&user_agent);
        let private_mode = self.detect_private_mode();

        BrowserReport {
            user_agent,
            family,
            major_version,
            private_mode,
            do_not_track: self.env.session.do_not_track(),
            language: self.env.session.language(),
            timezone: self.env.session.timezone(),
        }
    }

    /// Two-tier privacy-mode detection: the quota estimate is the primary
    /// signal; the transient-write fallback runs only when no estimate is
    /// exposed. The fallback key is removed on every exit path.
    fn detect_private_mode(&self) -> ProbeOutcome<bool> {
        match self.env.quota.estimate() {
            Ok(estimate) => {
                ProbeOutcome::Value(estimate.quota_bytes < self.thresholds.private_quota_bytes)
            }
            Err(StorageError::Unavailable(_)) => {
                let outcome = match self.env.local.set(PRIVACY_PROBE_KEY, "probe") {
                    Ok(()) => ProbeOutcome::Value(false),
                    Err(_) => ProbeOutcome::Value(true),
                };
                if let Err(err) = self.env.local.remove(PRIVACY_PROBE_KEY) {
                    tracing::debug!("privacy probe key removal failed: {err}");
                }
                outcome
            }
            Err(err) => ProbeOutcome::Error(err.to_string()),
        }
    }

    fn probe_site(&self) -> SiteReport {
        SiteReport {
            url: self.env.session.url(),
            hostname: self.env.session.hostname(),
            scheme: self.env.session.scheme(),
        }
    }

    fn probe_storage(&self) -> StorageReport {
        StorageReport {
            local_items: outcome_from(self.env.local.item_count()),
            session_items: outcome_from(self.env.session_store.item_count()),
            cookie_count: outcome_from(
                self.env
                    .cookies
                    .names()
                    .map(|names| names.len() as u64),
            ),
            database_count: outcome_from(
                self.env
                    .databases
                    .names()
                    .map(|names| names.len() as u64),
            ),
            worker_count: outcome_from(
                self.env
                    .workers
                    .registrations()
                    .map(|scopes| scopes.len() as u64),
            ),
            quota: outcome_from(self.env.quota.estimate()),
        }
    }

    fn probe_network(&self) -> NetworkReport {
        let connection = match self.env.connection.hints() {
            Ok(Some(hints)) => ProbeOutcome::Value(hints),
            Ok(None) => ProbeOutcome::Unavailable("connection hints not exposed".into()),
            Err(err) => ProbeOutcome::Error(err.to_string()),
        };
        NetworkReport { connection }
    }

    fn probe_performance(&self, hostname: &str) -> PerformanceReport {
        let navigation = self.env.timeline.navigation().map_or_else(
            || ProbeOutcome::Unavailable("no navigation timing entry".into()),
            |nav| {
                ProbeOutcome::Value(NavigationStats {
                    load_ms: delta_ms(nav.load_event_end_ms, nav.start_ms),
                    dom_ready_ms: delta_ms(nav.dom_content_loaded_ms, nav.start_ms),
                    ttfb_ms: delta_ms(nav.response_start_ms, nav.request_start_ms),
                })
            },
        );

        let zero_duration_same_origin = self
            .env
            .timeline
            .resources()
            .iter()
            .filter(|entry| entry.url.contains(hostname) && entry.duration_ms == 0.0)
            .count() as u64;

        PerformanceReport {
            navigation,
            zero_duration_same_origin,
        }
    }

    fn probe_system(&self) -> SystemReport {
        SystemReport {
            platform: self.env.session.platform(),
            screen: self.env.session.screen(),
            viewport: self.env.session.viewport(),
            pixel_ratio: self.env.session.pixel_ratio(),
        }
    }

    fn run_functional_checks(&self) -> FunctionalChecks {
        FunctionalChecks {
            cookie_roundtrip: cookie_roundtrip(self.env.cookies),
            storage_roundtrip: storage_roundtrip(self.env.local),
            dom_roundtrip: dom_roundtrip(self.env.dom),
            page_errors: self.env.dom.visible_error_text(),
        }
    }
}

/// Write-then-verify against the cookie jar. The probe cookie is expired
/// on every exit path, so re-querying the jar afterwards shows no residue.
fn cookie_roundtrip(jar: &dyn CookieJar) -> RoundTrip {
    let verdict = match jar.set(COOKIE_PROBE_NAME, "1") {
        Err(err) => RoundTrip::Error(err.to_string()),
        Ok(()) => match jar.contains(COOKIE_PROBE_NAME) {
            Ok(true) => RoundTrip::Passed,
            Ok(false) => RoundTrip::Blocked,
            Err(err) => RoundTrip::Error(err.to_string()),
        },
    };
    if let Err(err) = jar.expire(COOKIE_PROBE_NAME, None) {
        tracing::debug!("probe cookie expiry failed: {err}");
    }
    verdict
}

/// Write-then-verify against the local key-value store; the probe key is
/// removed on every exit path.
fn storage_roundtrip(store: &dyn KeyValueStore) -> RoundTrip {
    let verdict = match store.set(STORAGE_PROBE_KEY, "1") {
        Err(err) => RoundTrip::Error(err.to_string()),
        Ok(()) => match store.get(STORAGE_PROBE_KEY) {
            Ok(Some(value)) if value == "1" => RoundTrip::Passed,
            Ok(_) => RoundTrip::Blocked,
            Err(err) => RoundTrip::Error(err.to_string()),
        },
    };
    if let Err(err) = store.remove(STORAGE_PROBE_KEY) {
        tracing::debug!("probe storage key removal failed: {err}");
    }
    verdict
}

/// Insert-then-query against the DOM. A marker that is not retrievable
/// immediately after insertion was intercepted by a content filter.
fn dom_roundtrip(dom: &dyn DomAccess) -> RoundTrip {
    let verdict = match dom.insert_marker(DOM_PROBE_MARKER) {
        Err(err) => RoundTrip::Error(err.to_string()),
        Ok(()) => match dom.marker_present(DOM_PROBE_MARKER) {
            Ok(true) => RoundTrip::Passed,
            Ok(false) => RoundTrip::Blocked,
            Err(err) => RoundTrip::Error(err.to_string()),
        },
    };
    if let Err(err) = dom.remove_marker(DOM_PROBE_MARKER) {
        tracing::debug!("probe marker removal failed: {err}");
    }
    verdict
}
