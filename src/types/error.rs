//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! Two classes only:
//!
//! - **Fatal**: the manifest is missing or unparseable, or a directory the
//!   scanner needs to enumerate cannot be read. These abort the run; no
//!   partial result is meaningful.
//! - **Advisory**: every finding of severity warning/error/info. Advisory
//!   conditions are recorded as [`crate::types::Finding`] values and never
//!   surface through this error type.
//!
//! There is no retry policy: every filesystem probe is a one-shot
//! existence/read check, and absence of an expected path is a normal branch
//! outcome, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Fatal Domain Errors
    // -------------------------------------------------------------------------
    #[error("Manifest not found: {path}")]
    ManifestMissing { path: String },

    #[error("Manifest at {path} is not parseable: {message}")]
    ManifestInvalid { path: String, message: String },

    #[error("Cannot read directory {path}: {source}")]
    DirUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read file {path}: {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Verification failed: {0}")]
    Verification(String),
}

impl ScopeError {
    /// Wrap an IO error from enumerating `path`.
    pub fn dir_unreadable(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::DirUnreadable {
            path: path.display().to_string(),
            source,
        }
    }

    /// Wrap an IO error from reading `path`.
    pub fn file_unreadable(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
