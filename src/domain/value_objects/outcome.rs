use serde::{Deserialize, Serialize};

/// Tagged result of a single probe.
///
/// Every probe terminates in exactly one of these; a fault raised by the
/// underlying subsystem is caught and converted, never propagated. An
/// `Unavailable` outcome means the capability is not exposed by the
/// environment (expected, non-alarming), while `Error` means the capability
/// exists but the call faulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ProbeOutcome<T> {
    Value(T),
    Unavailable(String),
    Error(String),
}

impl<T> ProbeOutcome<T> {
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Result of a write-then-verify functional probe.
///
/// `Blocked` is the strongest signal: the write was accepted but the
/// immediate read-back found nothing, which only happens when something
/// between the caller and the backend silently intercepts writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RoundTrip {
    Passed,
    Blocked,
    Error(String),
}

impl RoundTrip {
    #[must_use]
    pub const fn failed(&self) -> bool {
        !matches!(self, Self::Passed)
    }
}

/// Outcome of one endpoint reachability check.
///
/// A check that exceeds its budget is cancelled and reported as `TimedOut`,
/// distinct from a transport-level `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PingOutcome {
    Reachable { elapsed_ms: u64 },
    TimedOut { after_ms: u64 },
    Failed { message: String },
}

impl PingOutcome {
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn value_accessor() {
        let outcome: ProbeOutcome<u64> = ProbeOutcome::Value(42);
        assert_eq!(outcome.value(), Some(&42));
        assert!(!outcome.is_error());
        assert!(!outcome.is_unavailable());
    }

    #[test]
    fn unavailable_has_no_value() {
        let outcome: ProbeOutcome<u64> = ProbeOutcome::Unavailable("not exposed".into());
        assert_eq!(outcome.value(), None);
        assert!(outcome.is_unavailable());
    }

    #[test]
    fn error_is_flagged() {
        let outcome: ProbeOutcome<u64> = ProbeOutcome::Error("quota query faulted".into());
        assert!(outcome.is_error());
        assert_eq!(outcome.value(), None);
    }

    #[test]
    fn probe_outcome_serde_roundtrip() {
        let outcome: ProbeOutcome<u64> = ProbeOutcome::Value(7);
        let json = serde_json::to_string(&outcome).expect("serialize");
        let deserialized: ProbeOutcome<u64> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(outcome, deserialized);
    }

    #[test]
    fn roundtrip_failed_covers_blocked_and_error() {
        assert!(!RoundTrip::Passed.failed());
        assert!(RoundTrip::Blocked.failed());
        assert!(RoundTrip::Error("fault".into()).failed());
    }

    #[test]
    fn ping_outcome_reachable() {
        assert!(PingOutcome::Reachable { elapsed_ms: 12 }.is_reachable());
        assert!(!PingOutcome::TimedOut { after_ms: 5000 }.is_reachable());
        assert!(!PingOutcome::Failed {
            message: "dns".into()
        }
        .is_reachable());
    }

    #[test]
    fn ping_outcome_serde_roundtrip() {
        let outcome = PingOutcome::TimedOut { after_ms: 5000 };
        let json = serde_json::to_string(&outcome).expect("serialize");
        let deserialized: PingOutcome = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(outcome, deserialized);
    }
}
