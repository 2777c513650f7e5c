use thiserror::Error;

use crate::domain::entities::record::QuotaEstimate;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("backend not exposed by the environment: {0}")]
    Unavailable(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("backend fault: {0}")]
    Backend(String),
}

/// A key-value storage area (local or session scoped).
///
/// Writes may be silently dropped by a restricted environment; callers that
/// need to distinguish a dropped write from a stored one must read back.
pub trait KeyValueStore: Send + Sync {
    /// Number of entries currently stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable or faults.
    fn item_count(&self) -> Result<u64, StorageError>;

    /// Reads a single entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable or faults.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a single entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if access is denied or the backend faults.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a single entry; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if access is denied or the backend faults.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Removes every entry, returning how many were cleared.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if access is denied or the backend faults.
    fn clear(&self) -> Result<u64, StorageError>;
}

/// The cookie jar of the page under inspection
pub trait CookieJar: Send + Sync {
    /// Names of all cookies visible to the page.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if cookie access is denied or faults.
    fn names(&self) -> Result<Vec<String>, StorageError>;

    /// Sets a cookie on the bare path.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if cookie access is denied or faults.
    fn set(&self, name: &str, value: &str) -> Result<(), StorageError>;

    /// Whether a cookie with this name is currently visible.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if cookie access is denied or faults.
    fn contains(&self, name: &str) -> Result<bool, StorageError>;

    /// Expires a cookie. A `domain` of `None` targets the bare path; a
    /// concrete domain targets domain-scoped cookies. Both are needed to
    /// cover path-scoped and domain-scoped variants.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if cookie access is denied or faults.
    fn expire(&self, name: &str, domain: Option<&str>) -> Result<(), StorageError>;
}

/// The structured on-disk database registry (e.g. IndexedDB)
pub trait DatabaseRegistry: Send + Sync {
    /// Names of all databases for this origin.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if enumeration is unavailable or faults.
    fn names(&self) -> Result<Vec<String>, StorageError>;

    /// Deletes a database by name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if deletion faults.
    fn delete(&self, name: &str) -> Result<(), StorageError>;
}

/// Background-worker registrations for this origin
pub trait WorkerRegistry: Send + Sync {
    /// Scopes of all registered workers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if enumeration is unavailable or faults.
    fn registrations(&self) -> Result<Vec<String>, StorageError>;

    /// Unregisters a worker by scope.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if unregistration faults.
    fn unregister(&self, scope: &str) -> Result<(), StorageError>;
}

/// Named response caches for this origin
pub trait ResponseCache: Send + Sync {
    /// Keys of all caches.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if enumeration is unavailable or faults.
    fn keys(&self) -> Result<Vec<String>, StorageError>;

    /// Deletes a cache by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if deletion faults.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage usage/quota estimation
pub trait QuotaEstimator: Send + Sync {
    /// Current usage and quota for the origin.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the environment does not
    /// expose an estimate, other variants when the query faults.
    fn estimate(&self) -> Result<QuotaEstimate, StorageError>;
}
