use std::time::Duration;

use crate::domain::entities::receipt::{EndpointReport, NetworkTestSummary};
use crate::domain::ports::network::EndpointPinger;
use crate::domain::value_objects::run_state::RunState;

/// One named endpoint in the reachability sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCheck {
    pub name: String,
    pub url: String,
}

/// Runs a fixed, ordered sequence of reachability checks.
///
/// Checks are strictly sequential; each one runs under its own timeout
/// (enforced by the pinger), so a hung endpoint is cancelled at its budget
/// and the remaining endpoints still execute. A short pause separates
/// checks to avoid burst load.
pub struct NetworkTestService<'a> {
    pinger: &'a dyn EndpointPinger,
    endpoints: Vec<EndpointCheck>,
    timeout: Duration,
    pause: Duration,
}

impl<'a> NetworkTestService<'a> {
    #[must_use]
    pub const fn new(
        pinger: &'a dyn EndpointPinger,
        endpoints: Vec<EndpointCheck>,
        timeout: Duration,
        pause: Duration,
    ) -> Self {
        Self {
            pinger,
            endpoints,
            timeout,
            pause,
        }
    }

    /// Runs every check in order, reporting each outcome through
    /// `progress` with a running counter as it completes.
    pub async fn run(
        &self,
        progress: &mut dyn FnMut(usize, usize, &EndpointReport),
    ) -> NetworkTestSummary {
        let total = self.endpoints.len();
        let mut reports = Vec::with_capacity(total);

        for (index, endpoint) in self.endpoints.iter().enumerate() {
            let outcome = self.pinger.check(&endpoint.url, self.timeout).await;
            let report = EndpointReport {
                name: endpoint.name.clone(),
                url: endpoint.url.clone(),
                outcome,
            };
            progress(index + 1, total, &report);
            reports.push(report);

            if index + 1 < total && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        let all_reachable = reports.iter().all(|r| r.outcome.is_reachable());
        let state = if all_reachable {
            RunState::Completed
        } else {
            RunState::CompletedWithErrors
        };
        NetworkTestSummary {
            reports,
            all_reachable,
            state,
        }
    }
}
