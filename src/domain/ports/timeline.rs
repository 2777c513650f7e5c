use serde::{Deserialize, Serialize};

/// Raw navigation-timing marks for the current page load, in milliseconds
/// relative to the timeline origin. The probe derives durations from these
/// as timestamp deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationTiming {
    pub start_ms: f64,
    pub request_start_ms: f64,
    pub response_start_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub load_event_end_ms: f64,
}

/// One resource-timing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub url: String,
    pub duration_ms: f64,
}

/// Read access to the performance timeline of the page load
pub trait PerformanceTimeline: Send + Sync {
    /// The navigation-timing entry, when one exists.
    fn navigation(&self) -> Option<NavigationTiming>;

    /// All resource-timing entries recorded for the page.
    fn resources(&self) -> Vec<ResourceEntry>;
}
