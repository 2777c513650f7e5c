use serde::{Deserialize, Serialize};

/// Severity level for evaluated findings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Success => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl Severity {
    #[must_use]
    pub const fn symbol(&self) -> &str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✅",
            Self::Error => "❌",
        }
    }

    /// Whether this severity counts toward the run-level `issues_found` flag.
    #[must_use]
    pub const fn is_issue(&self) -> bool {
        matches!(self, Self::Error)
    }
}
