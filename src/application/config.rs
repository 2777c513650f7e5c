use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub network: NetworkTestConfig,
    #[serde(default)]
    pub renderer: RendererConfig,
}

/// Rule thresholds. These are exact contracts, not tuning knobs; they are
/// configurable because the empirically chosen values drift over time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_quota_warn")]
    pub quota_warn_percent: f64,
    #[serde(default = "default_rtt_high")]
    pub rtt_high_ms: u64,
    #[serde(default = "default_ttfb_slow")]
    pub ttfb_slow_ms: u64,
    #[serde(default = "default_load_slow")]
    pub load_slow_ms: u64,
    #[serde(default = "default_version_floor")]
    pub version_floor: u32,
    #[serde(default = "default_private_quota")]
    pub private_quota_bytes: u64,
}

/// Reachability test endpoints and pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkTestConfig {
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<EndpointEntry>,
    #[serde(default = "default_net_timeout")]
    pub timeout_ms: u64,
    #[serde(default = "default_net_pause")]
    pub pause_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointEntry {
    pub name: String,
    pub url: String,
}

/// Optional external page renderer used by the screenshot action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Command invoked as `<command> <url>`; expected to write the encoded
    /// image to stdout. Screenshots are unsupported when unset.
    #[serde(default)]
    pub command: Option<String>,
}

// --- Defaults ---

const fn default_quota_warn() -> f64 {
    90.0
}

const fn default_rtt_high() -> u64 {
    500
}

const fn default_ttfb_slow() -> u64 {
    500
}

const fn default_load_slow() -> u64 {
    5000
}

const fn default_version_floor() -> u32 {
    100
}

const fn default_private_quota() -> u64 {
    120_000_000
}

fn default_endpoints() -> Vec<EndpointEntry> {
    vec![
        EndpointEntry {
            name: "Google DNS".into(),
            url: "https://dns.google".into(),
        },
        EndpointEntry {
            name: "Cloudflare".into(),
            url: "https://1.1.1.1".into(),
        },
    ]
}

const fn default_net_timeout() -> u64 {
    5000
}

const fn default_net_pause() -> u64 {
    500
}

// --- Default impls ---

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            quota_warn_percent: default_quota_warn(),
            rtt_high_ms: default_rtt_high(),
            ttfb_slow_ms: default_ttfb_slow(),
            load_slow_ms: default_load_slow(),
            version_floor: default_version_floor(),
            private_quota_bytes: default_private_quota(),
        }
    }
}

impl Default for NetworkTestConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            timeout_ms: default_net_timeout(),
            pause_ms: default_net_pause(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create a default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// invalid, or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, serialization
    /// fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("sitecheck").join("config.toml"))
    }
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        Self {
            quota_warn_percent: config.quota_warn_percent.clamp(0.0, 100.0),
            rtt_high_ms: config.rtt_high_ms,
            ttfb_slow_ms: config.ttfb_slow_ms,
            load_slow_ms: config.load_slow_ms,
            version_floor: config.version_floor,
            private_quota_bytes: config.private_quota_bytes,
        }
    }
}
