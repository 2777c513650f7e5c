pub mod dom;
pub mod network;
pub mod renderer;
pub mod session;
pub mod storage;
pub mod timeline;

pub use dom::{DomAccess, DomError};
pub use network::{ConnectionMonitor, EndpointPinger, NetworkError};
pub use renderer::{CaptureError, ScreenCapture};
pub use session::PageSession;
pub use storage::{
    CookieJar, DatabaseRegistry, KeyValueStore, QuotaEstimator, ResponseCache, StorageError,
    WorkerRegistry,
};
pub use timeline::{NavigationTiming, PerformanceTimeline, ResourceEntry};

/// Bundle of every port a diagnostic run needs, wired once at composition
/// time so services take a single borrow instead of a dozen.
pub struct PageEnvironment<'a> {
    pub session: &'a dyn PageSession,
    pub local: &'a dyn KeyValueStore,
    pub session_store: &'a dyn KeyValueStore,
    pub cookies: &'a dyn CookieJar,
    pub databases: &'a dyn DatabaseRegistry,
    pub workers: &'a dyn WorkerRegistry,
    pub caches: &'a dyn ResponseCache,
    pub quota: &'a dyn QuotaEstimator,
    pub connection: &'a dyn ConnectionMonitor,
    pub timeline: &'a dyn PerformanceTimeline,
    pub dom: &'a dyn DomAccess,
}
