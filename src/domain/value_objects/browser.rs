use serde::{Deserialize, Serialize};

/// Browser family classified from the user-agent string.
///
/// Classification is by ordered substring precedence: engines embed each
/// other's tokens (Edge and Chrome both carry "Safari", Edge carries
/// "Chrome"), so the first match in precedence order wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BrowserFamily {
    Firefox,
    Edge,
    Chrome,
    Safari,
    Unknown,
}

impl std::fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Firefox => write!(f, "Firefox"),
            Self::Edge => write!(f, "Microsoft Edge"),
            Self::Chrome => write!(f, "Chrome"),
            Self::Safari => write!(f, "Safari"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl BrowserFamily {
    /// Classifies a user-agent string. Order matters: Firefox, then the
    /// Edge token ("Edg"), then Chrome, then Safari.
    #[must_use]
    pub fn classify(user_agent: &str) -> Self {
        if user_agent.contains("Firefox") {
            Self::Firefox
        } else if user_agent.contains("Edg") {
            Self::Edge
        } else if user_agent.contains("Chrome") {
            Self::Chrome
        } else if user_agent.contains("Safari") {
            Self::Safari
        } else {
            Self::Unknown
        }
    }

    /// The user-agent token that prefixes this family's version number.
    #[must_use]
    pub const fn version_token(&self) -> Option<&'static str> {
        match self {
            Self::Firefox => Some("Firefox/"),
            Self::Edge => Some("Edg/"),
            Self::Chrome => Some("Chrome/"),
            Self::Safari => Some("Version/"),
            Self::Unknown => None,
        }
    }

    /// Extracts the major version for this family from a user-agent string.
    ///
    /// Returns `None` when the family has no version token or the token is
    /// absent or not followed by digits.
    #[must_use]
    pub fn extract_major_version(&self, user_agent: &str) -> Option<u32> {
        let token = self.version_token()?;
        let rest = &user_agent[user_agent.find(token)? + token.len()..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    /// Whether this family is subject to the major-version floor check.
    ///
    /// Safari's versioning scheme is unrelated to the Chromium/Gecko
    /// release numbers the floor is calibrated against.
    #[must_use]
    pub const fn has_version_floor(&self) -> bool {
        matches!(self, Self::Firefox | Self::Edge | Self::Chrome)
    }

    /// Whether this family runs on a Chromium engine with an extension
    /// ecosystem worth ruling out during troubleshooting.
    #[must_use]
    pub const fn is_chromium(&self) -> bool {
        matches!(self, Self::Edge | Self::Chrome)
    }
}
