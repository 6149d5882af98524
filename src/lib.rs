//! contextscope - Repository Profiler and Context-Graph Verifier
//!
//! Inspects a project's dependency manifest and source tree, infers its
//! technology profile, and scores the completeness and internal consistency
//! of a structured documentation tree ("context graph") describing that
//! project. Used by tooling that feeds project knowledge to AI coding
//! assistants.
//!
//! ## Pipelines
//!
//! - **Profiler** ([`profiler`]): manifest stack detection, convention-based
//!   source scanning, backend/schema scanning. Feeds skeleton generation.
//! - **Verifier** ([`verifier`]): structural checks, content-completeness
//!   scoring, cross-reference/orphan analysis, and a weighted completeness
//!   score. Invoked independently against an existing documentation tree.
//!
//! Both pipelines are single-threaded, synchronous batch passes over one
//! filesystem snapshot; nothing persists between runs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use contextscope::{Verifier, profiler};
//!
//! let profile = profiler::profile(&project_root, None)?;
//! let result = Verifier::new(&project_root, ".context").run()?;
//! println!("completeness: {}", result.scores.completeness);
//! ```

pub mod cli;
pub mod constants;
pub mod profiler;
pub mod types;
pub mod verifier;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use types::{
    BackendStructure, BackendType, FileInventory, Finding, Platform, Result, ScopeError, Scores,
    Severity, SourceStructure, StackProfile, VerificationResult,
};

pub use profiler::{BackendScanner, Manifest, RepositoryProfile, SourceScanner, detect, profile};

pub use verifier::{Reporter, Verifier};
