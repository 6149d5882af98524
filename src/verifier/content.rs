//! Content Completeness Scorer
//!
//! For every documentation file under the four fixed categories, checks
//! presence of that category's required section headers and produces a
//! coverage finding per file plus a summary finding per category. A heading
//! satisfies a section when 1-4 leading `#` characters are followed by text
//! starting with the section name, case-insensitive, anchored to line start.
//!
//! A category directory that does not exist produces no findings at all —
//! not even the summary. Whether that should instead score as an error is an
//! open design question; current behavior treats absent categories as
//! neutral.

use std::path::Path;

use regex::Regex;

use crate::constants::context::DOMAIN_FILE;
use crate::constants::scoring::SECTION_WARNING_PCT;
use crate::constants::sections;
use crate::types::{FileInventory, Finding, Result, ScopeError};

/// Findings plus the per-category file inventory, produced in one pass.
#[derive(Debug, Default)]
pub struct ContentReport {
    pub findings: Vec<Finding>,
    pub files: FileInventory,
}

struct Category {
    dir: &'static str,
    label: &'static str,
    required: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        dir: "domains",
        label: "domain",
        required: sections::DOMAIN,
    },
    Category {
        dir: "architecture",
        label: "architecture",
        required: sections::ARCHITECTURE,
    },
    Category {
        dir: "patterns",
        label: "pattern",
        required: sections::PATTERN,
    },
    Category {
        dir: "workflows",
        label: "workflow",
        required: sections::WORKFLOW,
    },
];

pub fn check(context_root: &Path) -> Result<ContentReport> {
    let mut report = ContentReport::default();

    for category in CATEGORIES {
        let dir = context_root.join(category.dir);
        if !dir.is_dir() {
            tracing::debug!(category = category.label, "category directory absent, skipped");
            continue;
        }

        let files = collect_category_files(&dir, category.dir == "domains")?;

        for (display, path) in &files {
            let text =
                std::fs::read_to_string(path).map_err(|e| ScopeError::file_unreadable(path, e))?;
            report
                .findings
                .push(score_file(category, display, &text));
        }

        let names: Vec<String> = files.iter().map(|(display, _)| display.clone()).collect();
        if names.is_empty() {
            report.findings.push(Finding::warning(format!(
                "{}: no {} files found",
                category.dir, category.label
            )));
        } else {
            report.findings.push(Finding::success(format!(
                "{}: {} {} file(s)",
                category.dir,
                names.len(),
                category.label
            )));
        }

        match category.dir {
            "domains" => report.files.domains = names,
            "architecture" => report.files.architectures = names,
            "patterns" => report.files.patterns = names,
            _ => report.files.workflows = names,
        }
    }

    Ok(report)
}

/// Coverage finding for one file: `foundCount / requiredCount` as a rounded
/// percentage. Full coverage is a success, at least half is a warning,
/// anything below is an error.
fn score_file(category: &Category, display: &str, text: &str) -> Finding {
    let found = category
        .required
        .iter()
        .filter(|section| has_section(text, section))
        .count();
    let required = category.required.len();
    let pct = (found as f64 * 100.0 / required as f64).round() as u32;

    let message = format!(
        "{}/{}: {}/{} required sections ({}%)",
        category.dir, display, found, required, pct
    );

    if pct == 100 {
        Finding::success(message)
    } else if pct >= SECTION_WARNING_PCT {
        Finding::warning(message)
    } else {
        Finding::error(message)
    }
}

fn has_section(text: &str, section: &str) -> bool {
    let pattern = format!(r"(?mi)^#{{1,4}}\s*{}", regex::escape(section));
    // Escaped literal plus fixed prefix, cannot fail to compile.
    Regex::new(&pattern).map(|re| re.is_match(text)).unwrap_or(false)
}

/// Markdown files directly under the category directory; for domains, also
/// the nested `<name>/context.md` layout, normalized to `<name>/context.md`
/// for reporting.
fn collect_category_files(dir: &Path, nested_layout: bool) -> Result<Vec<(String, std::path::PathBuf)>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(|e| ScopeError::dir_unreadable(dir, e))? {
        let entry = entry.map_err(|e| ScopeError::dir_unreadable(dir, e))?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };

        if path.is_file() && name.ends_with(".md") {
            files.push((name, path));
        } else if nested_layout && path.is_dir() {
            let nested = path.join(DOMAIN_FILE);
            if nested.is_file() {
                files.push((format!("{name}/{DOMAIN_FILE}"), nested));
            }
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn domain_doc(sections: &[&str]) -> String {
        sections
            .iter()
            .map(|s| format!("## {s}\n\ntext\n\n"))
            .collect()
    }

    #[test]
    fn test_full_coverage_is_success() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "domains/auth.md",
            &domain_doc(sections::DOMAIN),
        );

        let report = check(temp.path()).unwrap();
        let file_finding = &report.findings[0];
        assert_eq!(file_finding.severity, Severity::Success);
        assert!(file_finding.message.contains("6/6"));
        assert!(file_finding.message.contains("100%"));
    }

    #[test]
    fn test_missing_two_of_six_is_warning_with_percentages() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "domains/auth.md",
            &domain_doc(&sections::DOMAIN[..4]),
        );

        let report = check(temp.path()).unwrap();
        let file_finding = &report.findings[0];
        assert_eq!(file_finding.severity, Severity::Warning);
        assert!(file_finding.message.contains("4/6"));
        assert!(file_finding.message.contains("67%"));
    }

    #[test]
    fn test_sparse_file_is_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "patterns/repo.md", "## Intent\n\nonly one\n");

        let report = check(temp.path()).unwrap();
        let file_finding = &report.findings[0];
        assert_eq!(file_finding.severity, Severity::Error);
        assert!(file_finding.message.contains("1/5"));
    }

    #[test]
    fn test_heading_match_is_case_insensitive_and_anchored() {
        let temp = TempDir::new().unwrap();
        let text = "# purpose\n\nSee also: Key Files mentioned inline, not a heading.\n\
                    #### KEY FILES\n\n##### Data Flow too deep\n";
        write(temp.path(), "domains/auth.md", text);

        let report = check(temp.path()).unwrap();
        // "purpose" and "KEY FILES" count; inline mention and level-5 heading don't.
        assert!(report.findings[0].message.contains("2/6"));
    }

    #[test]
    fn test_nested_domain_layout_normalized() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "domains/billing/context.md",
            &domain_doc(sections::DOMAIN),
        );

        let report = check(temp.path()).unwrap();
        assert_eq!(report.files.domains, vec!["billing/context.md"]);
        assert!(report.findings[0].message.contains("billing/context.md"));
    }

    #[test]
    fn test_empty_category_directory_is_warning_summary() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("workflows")).unwrap();

        let report = check(temp.path()).unwrap();
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, Severity::Warning);
        assert!(report.findings[0].message.contains("workflows"));
    }

    #[test]
    fn test_absent_category_produces_no_findings() {
        let temp = TempDir::new().unwrap();
        let report = check(temp.path()).unwrap();
        assert!(report.findings.is_empty());
        assert_eq!(report.files.total(), 0);
    }

    #[test]
    fn test_category_summary_counts_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "workflows/release.md", &domain_doc(sections::WORKFLOW));
        write(temp.path(), "workflows/hotfix.md", &domain_doc(sections::WORKFLOW));

        let report = check(temp.path()).unwrap();
        let summary = report.findings.last().unwrap();
        assert_eq!(summary.severity, Severity::Success);
        assert!(summary.message.contains("2 workflow file(s)"));
        assert_eq!(report.files.workflows.len(), 2);
    }
}
