//! Verify Command
//!
//! Runs the documentation-graph verifier and renders the findings report.
//! Exits non-zero when completeness falls below the threshold.

use std::path::PathBuf;

use crate::types::{Result, ScopeError, Severity};
use crate::verifier::{Reporter, Verifier};

pub struct VerifyOptions {
    pub path: Option<PathBuf>,
    pub context_dir: String,
    pub report: Option<PathBuf>,
    pub threshold: u8,
    pub severity: Option<String>,
}

pub fn run(options: VerifyOptions) -> Result<()> {
    let root = match options.path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    let verifier = Verifier::new(root, &options.context_dir);
    println!("Verifying context graph...");
    println!("  Root: {}", verifier.context_root().display());
    println!();

    let result = verifier.run()?;

    match options.severity.as_deref() {
        Some(level) => Reporter::print_filtered(&result, parse_severity(level)),
        None => Reporter::print_summary(&result),
    }

    if let Some(report_path) = options.report {
        if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Reporter::generate_json(&result, &report_path)?;
        println!();
        println!("Report saved to: {}", report_path.display());
    }

    if result.scores.completeness < options.threshold {
        return Err(ScopeError::Verification(format!(
            "completeness {} is below threshold {}",
            result.scores.completeness, options.threshold
        )));
    }

    Ok(())
}

fn parse_severity(level: &str) -> Severity {
    match level.to_lowercase().as_str() {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn options(root: &Path, threshold: u8) -> VerifyOptions {
        VerifyOptions {
            path: Some(root.to_path_buf()),
            context_dir: ".context".to_string(),
            report: None,
            threshold,
            severity: None,
        }
    }

    #[test]
    fn test_missing_context_fails_threshold() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = run(options(temp.path(), 60)).unwrap_err();
        assert!(matches!(err, ScopeError::Verification(_)));
    }

    #[test]
    fn test_zero_threshold_always_passes() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(run(options(temp.path(), 0)).is_ok());
    }

    #[test]
    fn test_report_written_when_requested() {
        let temp = tempfile::TempDir::new().unwrap();
        let report = temp.path().join("out/report.json");
        let mut opts = options(temp.path(), 0);
        opts.report = Some(report.clone());

        run(opts).unwrap();
        assert!(report.is_file());
    }
}
