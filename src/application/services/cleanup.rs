use crate::domain::entities::receipt::{CleanupReceipt, CleanupSummary, StorageBackend};
use crate::domain::ports::storage::{
    CookieJar, DatabaseRegistry, KeyValueStore, ResponseCache, StorageError, WorkerRegistry,
};
use crate::domain::value_objects::run_state::RunState;

/// Wipes every storage backend of the page, one after another.
///
/// The backends are independent: a fault in one is caught and reported as
/// that backend's receipt, and the remaining backends still run. Receipts
/// are pushed through the sink as they are produced, so partial completion
/// stays visible even when a later backend fails.
pub struct CleanupService<'a> {
    local: &'a dyn KeyValueStore,
    session_store: &'a dyn KeyValueStore,
    cookies: &'a dyn CookieJar,
    databases: &'a dyn DatabaseRegistry,
    workers: &'a dyn WorkerRegistry,
    caches: &'a dyn ResponseCache,
    hostname: String,
}

impl<'a> CleanupService<'a> {
    #[must_use]
    pub fn new(
        local: &'a dyn KeyValueStore,
        session_store: &'a dyn KeyValueStore,
        cookies: &'a dyn CookieJar,
        databases: &'a dyn DatabaseRegistry,
        workers: &'a dyn WorkerRegistry,
        caches: &'a dyn ResponseCache,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            local,
            session_store,
            cookies,
            databases,
            workers,
            caches,
            hostname: hostname.into(),
        }
    }

    /// Runs the full wipe sequence. Clearing an already-empty backend
    /// reports zero items, so a second run right after a first yields all
    /// zeroes and no faults.
    pub fn clean(&self, sink: &mut dyn FnMut(&CleanupReceipt)) -> CleanupSummary {
        let steps: [fn(&Self) -> CleanupReceipt; 6] = [
            Self::clear_local,
            Self::clear_session,
            Self::clear_cookies,
            Self::clear_databases,
            Self::clear_workers,
            Self::clear_caches,
        ];

        let mut receipts = Vec::with_capacity(steps.len());
        for step in steps {
            let receipt = step(self);
            if let Some(err) = &receipt.error {
                tracing::warn!(backend = %receipt.backend, "cleanup step failed: {err}");
            }
            sink(&receipt);
            receipts.push(receipt);
        }

        let state = if receipts.iter().any(CleanupReceipt::is_faulted) {
            RunState::CompletedWithErrors
        } else {
            RunState::Completed
        };
        CleanupSummary { receipts, state }
    }

    fn clear_local(&self) -> CleanupReceipt {
        kv_receipt(StorageBackend::LocalStore, self.local.clear())
    }

    fn clear_session(&self) -> CleanupReceipt {
        kv_receipt(StorageBackend::SessionStore, self.session_store.clear())
    }

    /// Expires each cookie under both the bare path and the current domain,
    /// covering path-scoped and domain-scoped variants.
    fn clear_cookies(&self) -> CleanupReceipt {
        let names = match self.cookies.names() {
            Ok(names) => names,
            Err(err) => return CleanupReceipt::faulted(StorageBackend::Cookies, err.to_string()),
        };
        let mut cleared = 0u64;
        for name in &names {
            let result = self
                .cookies
                .expire(name, None)
                .and_then(|()| self.cookies.expire(name, Some(&self.hostname)));
            if let Err(err) = result {
                return CleanupReceipt::faulted(StorageBackend::Cookies, err.to_string());
            }
            cleared += 1;
        }
        CleanupReceipt::cleared(StorageBackend::Cookies, cleared)
    }

    fn clear_databases(&self) -> CleanupReceipt {
        enumerated_receipt(StorageBackend::Databases, self.databases.names(), |name| {
            self.databases.delete(name)
        })
    }

    fn clear_workers(&self) -> CleanupReceipt {
        enumerated_receipt(
            StorageBackend::Workers,
            self.workers.registrations(),
            |scope| self.workers.unregister(scope),
        )
    }

    fn clear_caches(&self) -> CleanupReceipt {
        enumerated_receipt(StorageBackend::Caches, self.caches.keys(), |key| {
            self.caches.delete(key)
        })
    }
}

fn kv_receipt(backend: StorageBackend, result: Result<u64, StorageError>) -> CleanupReceipt {
    match result {
        Ok(cleared) => CleanupReceipt::cleared(backend, cleared),
        Err(err) => CleanupReceipt::faulted(backend, err.to_string()),
    }
}

/// Enumerate-then-delete pattern shared by databases, workers and caches.
fn enumerated_receipt(
    backend: StorageBackend,
    names: Result<Vec<String>, StorageError>,
    mut delete: impl FnMut(&str) -> Result<(), StorageError>,
) -> CleanupReceipt {
    let names = match names {
        Ok(names) => names,
        Err(err) => return CleanupReceipt::faulted(backend, err.to_string()),
    };
    let mut cleared = 0u64;
    for name in &names {
        if let Err(err) = delete(name) {
            return CleanupReceipt::faulted(backend, err.to_string());
        }
        cleared += 1;
    }
    CleanupReceipt::cleared(backend, cleared)
}
