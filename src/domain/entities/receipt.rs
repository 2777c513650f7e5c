use serde::{Deserialize, Serialize};

use crate::domain::value_objects::outcome::PingOutcome;
use crate::domain::value_objects::run_state::RunState;

/// One distinct persistence mechanism touched by the storage wipe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    LocalStore,
    SessionStore,
    Cookies,
    Databases,
    Workers,
    Caches,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalStore => write!(f, "local storage"),
            Self::SessionStore => write!(f, "session storage"),
            Self::Cookies => write!(f, "cookies"),
            Self::Databases => write!(f, "databases"),
            Self::Workers => write!(f, "worker registrations"),
            Self::Caches => write!(f, "response caches"),
        }
    }
}

/// Per-backend outcome of the storage wipe.
///
/// Emitted as the action executes, so partial completion stays visible
/// even when a later backend fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReceipt {
    pub backend: StorageBackend,
    pub items_cleared: Option<u64>,
    pub error: Option<String>,
}

impl CleanupReceipt {
    #[must_use]
    pub const fn cleared(backend: StorageBackend, items: u64) -> Self {
        Self {
            backend,
            items_cleared: Some(items),
            error: None,
        }
    }

    #[must_use]
    pub fn faulted(backend: StorageBackend, error: impl Into<String>) -> Self {
        Self {
            backend,
            items_cleared: None,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub const fn is_faulted(&self) -> bool {
        self.error.is_some()
    }
}

/// Final result of a storage wipe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupSummary {
    pub receipts: Vec<CleanupReceipt>,
    pub state: RunState,
}

impl CleanupSummary {
    #[must_use]
    pub fn total_cleared(&self) -> u64 {
        self.receipts.iter().filter_map(|r| r.items_cleared).sum()
    }
}

/// Outcome of one endpoint in the network reachability test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointReport {
    pub name: String,
    pub url: String,
    pub outcome: PingOutcome,
}

/// Final result of a network reachability run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkTestSummary {
    pub reports: Vec<EndpointReport>,
    pub all_reachable: bool,
    pub state: RunState,
}
