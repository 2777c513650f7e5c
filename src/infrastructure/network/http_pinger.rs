use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::ports::network::{EndpointPinger, NetworkError};
use crate::domain::value_objects::outcome::PingOutcome;

/// Reachability checks over HTTP HEAD requests.
///
/// Each check owns an independent timeout via `tokio::time::timeout`; an
/// in-flight request past its budget is dropped and reported as a timeout,
/// never as a generic failure. Any HTTP response counts as reachable: the
/// check measures whether the endpoint answers, not what it says.
pub struct HttpPinger {
    client: reqwest::Client,
}

impl HttpPinger {
    /// Creates a pinger with a plain HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the HTTP client cannot be initialized
    /// (e.g. TLS backend failure).
    pub fn new() -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| NetworkError::Fault(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EndpointPinger for HttpPinger {
    async fn check(&self, url: &str, timeout: Duration) -> PingOutcome {
        let started = Instant::now();
        let request = self.client.head(url).send();

        match tokio::time::timeout(timeout, request).await {
            Err(_) => PingOutcome::TimedOut {
                after_ms: millis(timeout),
            },
            Ok(Ok(_response)) => PingOutcome::Reachable {
                elapsed_ms: millis(started.elapsed()),
            },
            Ok(Err(err)) => PingOutcome::Failed {
                message: err.to_string(),
            },
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
