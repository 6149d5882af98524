//! Structural Verifier
//!
//! Checks the documentation root against a fixed manifest of expected files
//! and subdirectories, one finding per expectation. Missing root files are
//! errors; missing subdirectories are warnings. Two reference-integrity spot
//! checks confirm that each AI-tool entry file mentions the master
//! instruction file — a soft convention, so absence is a warning, not an
//! error.

use std::path::Path;

use crate::constants::context::{ENTRY_FILES, MASTER_FILE, REQUIRED_DIRS, REQUIRED_ROOT_FILES};
use crate::types::{Finding, Result, ScopeError};

pub fn check(context_root: &Path) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for file in REQUIRED_ROOT_FILES {
        if context_root.join(file).is_file() {
            findings.push(Finding::success(format!("Found {file}")));
        } else {
            findings.push(Finding::error(format!("Missing required file: {file}")));
        }
    }

    for dir in REQUIRED_DIRS {
        if context_root.join(dir).is_dir() {
            findings.push(Finding::success(format!("Found {dir}/ directory")));
        } else {
            findings.push(Finding::warning(format!("Missing directory: {dir}/")));
        }
    }

    for entry in ENTRY_FILES {
        let path = context_root.join(entry);
        if !path.is_file() {
            continue;
        }
        let text =
            std::fs::read_to_string(&path).map_err(|e| ScopeError::file_unreadable(&path, e))?;
        if text.contains(MASTER_FILE) {
            findings.push(Finding::success(format!("{entry} references {MASTER_FILE}")));
        } else {
            findings.push(Finding::warning(format!(
                "{entry} does not reference {MASTER_FILE}"
            )));
        }
    }

    Ok(findings)
}
