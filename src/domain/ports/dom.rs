use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("dom access fault: {0}")]
    Fault(String),
}

/// Minimal DOM access needed by the diagnostic run: an insert-then-query
/// round-trip (content-blocker detection) and the visible-error scan.
pub trait DomAccess: Send + Sync {
    /// Inserts a hidden marker element with the given id.
    ///
    /// # Errors
    ///
    /// Returns `DomError` if the document rejects the insertion.
    fn insert_marker(&self, id: &str) -> Result<(), DomError>;

    /// Whether a marker with the given id is currently retrievable.
    ///
    /// # Errors
    ///
    /// Returns `DomError` if the query faults.
    fn marker_present(&self, id: &str) -> Result<bool, DomError>;

    /// Removes a marker; removing an absent marker is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DomError` if the removal faults.
    fn remove_marker(&self, id: &str) -> Result<(), DomError>;

    /// Error-like text visible on the page (alert/notification containers,
    /// error query parameters). Best-effort; never fails.
    fn visible_error_text(&self) -> Vec<String>;
}
