use serde::{Deserialize, Serialize};

/// Diagnostic category a probe or finding belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Browser,
    Site,
    Storage,
    Network,
    Performance,
    System,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browser => write!(f, "browser"),
            Self::Site => write!(f, "site"),
            Self::Storage => write!(f, "storage"),
            Self::Network => write!(f, "network"),
            Self::Performance => write!(f, "performance"),
            Self::System => write!(f, "system"),
        }
    }
}

impl Category {
    /// Section title used by the human-readable report.
    #[must_use]
    pub const fn title(&self) -> &str {
        match self {
            Self::Browser => "Browser Information",
            Self::Site => "Site Information",
            Self::Storage => "Storage Information",
            Self::Network => "Network Information",
            Self::Performance => "Performance Information",
            Self::System => "System Information",
        }
    }
}
