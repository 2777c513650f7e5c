use serde::{Deserialize, Serialize};

/// Lifecycle of a remediation action.
///
/// There is no cancelled state: once started, an action runs its fixed step
/// sequence to the end; only individual steps may fail, leaving the run in
/// `CompletedWithErrors` with the partial results preserved.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    CompletedWithErrors,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::CompletedWithErrors => write!(f, "completed with errors"),
        }
    }
}

impl RunState {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::CompletedWithErrors)
    }
}
