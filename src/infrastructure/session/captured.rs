use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;

use crate::domain::entities::record::{ConnectionHints, Dimensions, QuotaEstimate};
use crate::domain::ports::dom::{DomAccess, DomError};
use crate::domain::ports::network::{ConnectionMonitor, NetworkError};
use crate::domain::ports::session::PageSession;
use crate::domain::ports::storage::{
    CookieJar, DatabaseRegistry, KeyValueStore, QuotaEstimator, ResponseCache, StorageError,
    WorkerRegistry,
};
use crate::domain::ports::timeline::{NavigationTiming, PerformanceTimeline, ResourceEntry};

use super::capture::{AccessPolicy, SessionCapture};

/// A page environment backed by a session capture.
///
/// Implements every port of the diagnostic run over the captured state,
/// honoring the capture's access policies: `Blocked` subsystems accept
/// writes and drop them, `Denied` subsystems fault on access. Uses a
/// `Mutex` for interior mutability since the ports take `&self` but
/// cleanup and the round-trip probes mutate state.
pub struct CapturedSession {
    state: Arc<Mutex<SessionCapture>>,
    markers: Arc<Mutex<HashSet<String>>>,
}

impl CapturedSession {
    #[must_use]
    pub fn new(capture: SessionCapture) -> Self {
        Self {
            state: Arc::new(Mutex::new(capture)),
            markers: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Load a captured session from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(SessionCapture::load(path)?))
    }

    /// Write the (possibly mutated) capture back to disk
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.lock().save_to(path)
    }

    /// View over the local key-value storage area
    #[must_use]
    pub fn local_store(&self) -> CapturedStore {
        CapturedStore {
            state: Arc::clone(&self.state),
            area: StoreArea::Local,
        }
    }

    /// View over the session key-value storage area
    #[must_use]
    pub fn session_store(&self) -> CapturedStore {
        CapturedStore {
            state: Arc::clone(&self.state),
            area: StoreArea::Session,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionCapture> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Which key-value area a store view addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreArea {
    Local,
    Session,
}

/// Key-value store view over one area of a captured session
pub struct CapturedStore {
    state: Arc<Mutex<SessionCapture>>,
    area: StoreArea,
}

impl CapturedStore {
    fn lock(&self) -> MutexGuard<'_, SessionCapture> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn policy(&self, capture: &SessionCapture) -> AccessPolicy {
        match self.area {
            StoreArea::Local => capture.restrictions.local,
            StoreArea::Session => capture.restrictions.session,
        }
    }

    fn deny_check(&self, capture: &SessionCapture) -> Result<(), StorageError> {
        if self.policy(capture) == AccessPolicy::Denied {
            let area = match self.area {
                StoreArea::Local => "local storage",
                StoreArea::Session => "session storage",
            };
            Err(StorageError::AccessDenied(format!("{area} is disabled")))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for CapturedStore {
    fn item_count(&self) -> Result<u64, StorageError> {
        let capture = self.lock();
        self.deny_check(&capture)?;
        let map = match self.area {
            StoreArea::Local => &capture.storage.local,
            StoreArea::Session => &capture.storage.session,
        };
        Ok(map.len() as u64)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let capture = self.lock();
        self.deny_check(&capture)?;
        let map = match self.area {
            StoreArea::Local => &capture.storage.local,
            StoreArea::Session => &capture.storage.session,
        };
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut capture = self.lock();
        self.deny_check(&capture)?;
        if self.policy(&capture) == AccessPolicy::Blocked {
            // Write accepted, silently dropped.
            return Ok(());
        }
        let map = match self.area {
            StoreArea::Local => &mut capture.storage.local,
            StoreArea::Session => &mut capture.storage.session,
        };
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut capture = self.lock();
        self.deny_check(&capture)?;
        let map = match self.area {
            StoreArea::Local => &mut capture.storage.local,
            StoreArea::Session => &mut capture.storage.session,
        };
        map.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<u64, StorageError> {
        let mut capture = self.lock();
        self.deny_check(&capture)?;
        let map = match self.area {
            StoreArea::Local => &mut capture.storage.local,
            StoreArea::Session => &mut capture.storage.session,
        };
        let cleared = map.len() as u64;
        map.clear();
        Ok(cleared)
    }
}

impl PageSession for CapturedSession {
    fn user_agent(&self) -> String {
        self.lock().page.user_agent.clone()
    }

    fn url(&self) -> String {
        self.lock().page.url.clone()
    }

    fn hostname(&self) -> String {
        self.lock().page.hostname()
    }

    fn scheme(&self) -> String {
        self.lock().page.scheme()
    }

    fn platform(&self) -> String {
        self.lock().page.platform.clone()
    }

    fn screen(&self) -> Dimensions {
        self.lock().page.screen
    }

    fn viewport(&self) -> Dimensions {
        self.lock().page.viewport
    }

    fn pixel_ratio(&self) -> f64 {
        self.lock().page.pixel_ratio
    }

    fn language(&self) -> String {
        self.lock().page.language.clone()
    }

    fn timezone(&self) -> String {
        self.lock().page.timezone.clone()
    }

    fn do_not_track(&self) -> bool {
        self.lock().page.do_not_track
    }
}

impl CookieJar for CapturedSession {
    fn names(&self) -> Result<Vec<String>, StorageError> {
        let capture = self.lock();
        cookie_deny_check(&capture)?;
        Ok(capture.storage.cookies.keys().cloned().collect())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), StorageError> {
        let mut capture = self.lock();
        cookie_deny_check(&capture)?;
        if capture.restrictions.cookies == AccessPolicy::Blocked {
            return Ok(());
        }
        capture
            .storage
            .cookies
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn contains(&self, name: &str) -> Result<bool, StorageError> {
        let capture = self.lock();
        cookie_deny_check(&capture)?;
        Ok(capture.storage.cookies.contains_key(name))
    }

    fn expire(&self, name: &str, _domain: Option<&str>) -> Result<(), StorageError> {
        let mut capture = self.lock();
        cookie_deny_check(&capture)?;
        capture.storage.cookies.remove(name);
        Ok(())
    }
}

fn cookie_deny_check(capture: &SessionCapture) -> Result<(), StorageError> {
    if capture.restrictions.cookies == AccessPolicy::Denied {
        Err(StorageError::AccessDenied("cookies are disabled".into()))
    } else {
        Ok(())
    }
}

impl DatabaseRegistry for CapturedSession {
    fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().storage.databases.clone())
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        self.lock().storage.databases.retain(|db| db != name);
        Ok(())
    }
}

impl WorkerRegistry for CapturedSession {
    fn registrations(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().storage.workers.clone())
    }

    fn unregister(&self, scope: &str) -> Result<(), StorageError> {
        self.lock().storage.workers.retain(|w| w != scope);
        Ok(())
    }
}

impl ResponseCache for CapturedSession {
    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().storage.caches.clone())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.lock().storage.caches.retain(|c| c != key);
        Ok(())
    }
}

impl QuotaEstimator for CapturedSession {
    fn estimate(&self) -> Result<QuotaEstimate, StorageError> {
        self.lock().storage.quota.ok_or_else(|| {
            StorageError::Unavailable("storage estimate not exposed".into())
        })
    }
}

impl ConnectionMonitor for CapturedSession {
    fn hints(&self) -> Result<Option<ConnectionHints>, NetworkError> {
        Ok(self.lock().timing.connection.clone())
    }
}

impl PerformanceTimeline for CapturedSession {
    fn navigation(&self) -> Option<NavigationTiming> {
        self.lock().timing.navigation
    }

    fn resources(&self) -> Vec<ResourceEntry> {
        self.lock().timing.resources.clone()
    }
}

impl DomAccess for CapturedSession {
    fn insert_marker(&self, id: &str) -> Result<(), DomError> {
        let capture = self.lock();
        match capture.restrictions.dom {
            AccessPolicy::Denied => Err(DomError::Fault("document access denied".into())),
            // Insertion accepted but the element never lands.
            AccessPolicy::Blocked => Ok(()),
            AccessPolicy::Allowed => {
                drop(capture);
                self.markers
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(id.to_string());
                Ok(())
            }
        }
    }

    fn marker_present(&self, id: &str) -> Result<bool, DomError> {
        if self.lock().restrictions.dom == AccessPolicy::Denied {
            return Err(DomError::Fault("document access denied".into()));
        }
        Ok(self
            .markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id))
    }

    fn remove_marker(&self, id: &str) -> Result<(), DomError> {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        Ok(())
    }

    fn visible_error_text(&self) -> Vec<String> {
        self.lock().visible_errors.clone()
    }
}
