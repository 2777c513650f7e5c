use serde::{Deserialize, Serialize};

use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::severity::Severity;

/// One evaluated rule outcome.
///
/// Findings are append-only and ordered by evaluation sequence; they carry
/// no identity beyond their position and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            category,
            message: message.into(),
        }
    }
}

/// Full evaluator output for one diagnostic run.
///
/// `issues_found` is true iff at least one error-severity finding was
/// produced; it gates the closing summary message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub findings: Vec<Finding>,
    pub issues_found: bool,
}

impl Evaluation {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity.is_issue())
            .count()
    }
}
