use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{ConnectionHints, Dimensions, QuotaEstimate};
use crate::domain::ports::timeline::{NavigationTiming, ResourceEntry};

/// A session capture: the JSON document exported from the browser under
/// inspection, carrying everything the probe set reads and the cleanup
/// action mutates.
///
/// Captures produced in restricted environments declare the restriction
/// instead of dropping the field, so the probes can distinguish a blocked
/// backend from an absent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCapture {
    pub page: PageInfo,
    #[serde(default)]
    pub storage: StorageState,
    #[serde(default)]
    pub timing: TimingState,
    #[serde(default)]
    pub restrictions: Restrictions,
    #[serde(default)]
    pub visible_errors: Vec<String>,
}

/// Identity and platform facts of the captured page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub url: String,
    pub user_agent: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub do_not_track: bool,
    #[serde(default = "default_screen")]
    pub screen: Dimensions,
    #[serde(default = "default_viewport")]
    pub viewport: Dimensions,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
}

impl PageInfo {
    /// The scheme portion of the captured URL, empty when malformed.
    #[must_use]
    pub fn scheme(&self) -> String {
        self.url
            .find("://")
            .map(|idx| self.url[..idx].to_string())
            .unwrap_or_default()
    }

    /// The host portion of the captured URL (port stripped), empty when
    /// malformed.
    #[must_use]
    pub fn hostname(&self) -> String {
        self.url
            .split("//")
            .nth(1)
            .and_then(|rest| rest.split('/').next())
            .and_then(|host| host.split(':').next())
            .unwrap_or("")
            .to_string()
    }
}

/// Contents of every storage backend at capture time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageState {
    #[serde(default)]
    pub local: BTreeMap<String, String>,
    #[serde(default)]
    pub session: BTreeMap<String, String>,
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub workers: Vec<String>,
    #[serde(default)]
    pub caches: Vec<String>,
    /// Absent when the environment does not expose an estimate.
    #[serde(default)]
    pub quota: Option<QuotaEstimate>,
}

/// Performance timeline and connection hints at capture time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingState {
    #[serde(default)]
    pub navigation: Option<NavigationTiming>,
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
    #[serde(default)]
    pub connection: Option<ConnectionHints>,
}

/// Access policy a restricted environment enforces on one subsystem.
///
/// `Blocked` accepts writes and silently drops them; `Denied` faults on
/// any access. The distinction drives the round-trip verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPolicy {
    #[default]
    Allowed,
    Blocked,
    Denied,
}

/// Per-subsystem access policies in effect at capture time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrictions {
    #[serde(default)]
    pub local: AccessPolicy,
    #[serde(default)]
    pub session: AccessPolicy,
    #[serde(default)]
    pub cookies: AccessPolicy,
    #[serde(default)]
    pub dom: AccessPolicy,
}

// --- Defaults ---

fn default_language() -> String {
    "en-US".into()
}

fn default_timezone() -> String {
    "UTC".into()
}

const fn default_screen() -> Dimensions {
    Dimensions {
        width: 1920,
        height: 1080,
    }
}

const fn default_viewport() -> Dimensions {
    Dimensions {
        width: 1280,
        height: 720,
    }
}

const fn default_pixel_ratio() -> f64 {
    1.0
}

impl SessionCapture {
    /// Load a capture from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session capture {}", path.display()))?;
        serde_json::from_str(&content).context("Failed to parse session capture")
    }

    /// Save a capture back to a JSON file (used after cleanup mutations)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize session capture")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write session capture {}", path.display()))?;
        Ok(())
    }
}
