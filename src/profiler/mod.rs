//! Repository profiling pipeline: manifest stack detection, convention-based
//! source scanning, and backend/schema scanning. The three stages feed the
//! (external) skeleton generator; the verifier does not depend on them.

pub mod backend;
pub mod manifest;
pub mod source;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::scanning::DEFAULT_SOURCE_ROOT;
use crate::types::{BackendStructure, Result, SourceStructure, StackProfile};

pub use backend::BackendScanner;
pub use manifest::{Manifest, detect};
pub use source::SourceScanner;

/// Combined output of one profiling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryProfile {
    pub stack: StackProfile,
    pub source: SourceStructure,
    pub backend: BackendStructure,
}

/// Run the full profiling pipeline against a project root.
///
/// The stack detector runs first so the source scanner can use its platform
/// signal to pick convention priorities.
pub fn profile(project_root: &Path, source_root: Option<&str>) -> Result<RepositoryProfile> {
    let manifest = Manifest::load(project_root)?;
    let stack = detect(&manifest);

    let source_root = source_root.unwrap_or(DEFAULT_SOURCE_ROOT);
    let source = SourceScanner::new(project_root, source_root, stack.platform).scan()?;
    let backend = BackendScanner::new(project_root).scan()?;

    Ok(RepositoryProfile {
        stack,
        source,
        backend,
    })
}
