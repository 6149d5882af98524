//! Verification findings and the aggregate result of one run.
//!
//! A [`Finding`] is one atomic verification observation. Findings are
//! append-only within a run; the ordered sequence per phase is significant for
//! report output, while scoring uses severity counts only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a single finding.
///
/// Ordering follows the reporter's filter semantics: `Error` sorts first so
/// that `severity <= min_severity` selects "at least this severe".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

/// One atomic verification observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

/// Per-phase integer scores, each 0-100.
///
/// `completeness` is always recomputed from the current findings via
/// [`crate::verifier::score`], never carried over between runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Scores {
    pub structure: u8,
    pub content: u8,
    pub references: u8,
    pub completeness: u8,
}

/// Names of the documentation files discovered per category.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileInventory {
    pub domains: Vec<String>,
    pub architectures: Vec<String>,
    pub patterns: Vec<String>,
    pub workflows: Vec<String>,
}

impl FileInventory {
    pub fn total(&self) -> usize {
        self.domains.len() + self.architectures.len() + self.patterns.len() + self.workflows.len()
    }
}

/// Aggregate result for one verification run.
///
/// Info-level items (orphan listings) live inside `cross_references`; there
/// is no separate info bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub generated_at: DateTime<Utc>,
    pub structure: Vec<Finding>,
    pub content: Vec<Finding>,
    pub cross_references: Vec<Finding>,
    pub scores: Scores,
    pub files: FileInventory,
}

impl VerificationResult {
    /// Result for a documentation root that does not exist: everything zero,
    /// no phase findings.
    pub fn absent() -> Self {
        Self {
            generated_at: Utc::now(),
            structure: Vec::new(),
            content: Vec::new(),
            cross_references: Vec::new(),
            scores: Scores::default(),
            files: FileInventory::default(),
        }
    }

    fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.structure
            .iter()
            .chain(self.content.iter())
            .chain(self.cross_references.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.all_findings().any(|f| f.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.all_findings()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.all_findings()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}
