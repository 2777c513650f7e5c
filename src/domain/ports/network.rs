use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::record::ConnectionHints;
use crate::domain::value_objects::outcome::PingOutcome;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("network subsystem fault: {0}")]
    Fault(String),
}

/// Connection-quality hints exposed by the platform
pub trait ConnectionMonitor: Send + Sync {
    /// Current hints, `None` when the platform does not expose them.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the hint query itself faults.
    fn hints(&self) -> Result<Option<ConnectionHints>, NetworkError>;
}

/// Lightweight reachability check against a single endpoint.
///
/// Implementations own the timeout: a check that exceeds `timeout` must be
/// cancelled and reported as `PingOutcome::TimedOut`, so one hung endpoint
/// can never stall the checks that follow past its own budget.
#[async_trait]
pub trait EndpointPinger: Send + Sync {
    async fn check(&self, url: &str, timeout: Duration) -> PingOutcome;
}
