use serde::{Deserialize, Serialize};

/// Exact threshold contracts for the issue ruleset.
///
/// The privacy-quota floor and the version floor are empirically chosen
/// values with no derivation; they are kept configurable because the
/// "right" values drift with browser releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Storage usage percentage above which (strictly) the quota rule fires
    pub quota_warn_percent: f64,
    /// Round-trip time in milliseconds above which latency is flagged
    pub rtt_high_ms: u64,
    /// Time-to-first-byte in milliseconds above which the server is flagged slow
    pub ttfb_slow_ms: u64,
    /// Total page load time in milliseconds above which the load is flagged slow
    pub load_slow_ms: u64,
    /// Minimum supported major version for evergreen browser families
    pub version_floor: u32,
    /// Quota estimates below this many bytes suggest a private/incognito session
    pub private_quota_bytes: u64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            quota_warn_percent: 90.0,
            rtt_high_ms: 500,
            ttfb_slow_ms: 500,
            load_slow_ms: 5000,
            version_floor: 100,
            private_quota_bytes: 120_000_000,
        }
    }
}
