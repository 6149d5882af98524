//! Cross-Reference & Orphan Analyzer
//!
//! Scans every live documentation file (the `templates/` subtree is never
//! live content) for path-shaped source references and validates them against
//! the real filesystem. Then determines which documentation files are
//! unreachable: a file is an orphan unless its bare name or basename appears
//! inside the text of any other documentation file or a root entry file.
//!
//! Name-mention is a deliberately lossy proxy for "discoverable by following
//! the graph by hand" — the corpus is free-form markdown with no mandated
//! link syntax. Two mutually-referencing but otherwise-unreferenced files
//! both count as non-orphan; the heuristic checks "mentioned somewhere", not
//! true reachability from a root. The whole-corpus pairwise pass is O(n²)
//! over tens of files, which needs no indexing.

use std::path::Path;
use std::sync::OnceLock;

use ignore::WalkBuilder;
use regex::Regex;

use crate::constants::context::{ENTRY_FILES, TEMPLATES_DIR};
use crate::constants::scanning::REFERENCE_ROOTS;
use crate::types::{Finding, Result, ScopeError};

static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();

/// Tokens shaped like `<root>/<path>.<ext>` where `<root>` is a known
/// source-directory name.
fn reference_re() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| {
        let roots = REFERENCE_ROOTS.join("|");
        let pattern = format!(r"\b(?:{roots})/[A-Za-z0-9_\-.\[\]/]+\.[A-Za-z0-9]+");
        Regex::new(&pattern).expect("valid reference regex")
    })
}

struct DocFile {
    /// Path relative to the context root, forward slashes.
    rel: String,
    basename: String,
    /// Basename minus extension.
    stem: String,
    content: String,
}

pub struct ReferenceAnalyzer<'a> {
    project_root: &'a Path,
    context_root: &'a Path,
}

impl<'a> ReferenceAnalyzer<'a> {
    pub fn new(project_root: &'a Path, context_root: &'a Path) -> Self {
        Self {
            project_root,
            context_root,
        }
    }

    /// Run both passes. Returns the finding sequence plus the count of live
    /// documentation files (the volume signal for the completeness mix).
    pub fn analyze(&self) -> Result<(Vec<Finding>, usize)> {
        let docs = self.collect_docs()?;
        let mut findings = Vec::new();

        self.check_references(&docs, &mut findings);
        self.check_orphans(&docs, &mut findings);

        Ok((findings, docs.len()))
    }

    fn check_references(&self, docs: &[DocFile], findings: &mut Vec<Finding>) {
        let mut valid = 0usize;
        let mut broken = 0usize;

        for doc in docs {
            for reference in reference_re().find_iter(&doc.content) {
                let target = reference.as_str();
                if self.project_root.join(target).exists() {
                    valid += 1;
                } else {
                    broken += 1;
                    findings.push(Finding::warning(format!(
                        "{} references {} which does not exist",
                        doc.rel, target
                    )));
                }
            }
        }

        findings.push(Finding::success(format!(
            "{valid} valid source reference(s)"
        )));
        if broken > 0 {
            findings.push(Finding::warning(format!(
                "{broken} broken source reference(s)"
            )));
        }
    }

    fn check_orphans(&self, docs: &[DocFile], findings: &mut Vec<Finding>) {
        let orphans: Vec<&DocFile> = docs
            .iter()
            .filter(|doc| !is_entry_file(&doc.rel))
            .filter(|doc| !self.is_mentioned(doc, docs))
            .collect();

        if orphans.is_empty() {
            findings.push(Finding::success("No orphaned context files"));
            return;
        }

        findings.push(Finding::warning(format!(
            "{} orphaned context file(s) not referenced anywhere",
            orphans.len()
        )));
        for orphan in orphans {
            findings.push(Finding::info(format!("orphan: {}", orphan.rel)));
        }
    }

    /// Whole-corpus mention check: the file's stem or basename as a
    /// substring of any *other* documentation file.
    fn is_mentioned(&self, doc: &DocFile, docs: &[DocFile]) -> bool {
        docs.iter()
            .filter(|other| other.rel != doc.rel)
            .any(|other| other.content.contains(&doc.stem) || other.content.contains(&doc.basename))
    }

    fn collect_docs(&self) -> Result<Vec<DocFile>> {
        let mut docs = Vec::new();

        let walker = WalkBuilder::new(self.context_root)
            .hidden(false)
            .git_ignore(true)
            .follow_links(false)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                ScopeError::DirUnreadable {
                    path: self.context_root.display().to_string(),
                    source: std::io::Error::other(e),
                }
            })?;
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            let Ok(rel_path) = path.strip_prefix(self.context_root) else {
                continue;
            };
            let rel = rel_path.to_string_lossy().replace('\\', "/");
            if rel.starts_with(&format!("{TEMPLATES_DIR}/")) {
                continue;
            }

            let content = std::fs::read_to_string(path)
                .map_err(|e| ScopeError::file_unreadable(path, e))?;
            let basename = rel_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let stem = rel_path
                .file_stem()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            docs.push(DocFile {
                rel,
                basename,
                stem,
                content,
            });
        }

        docs.sort_by(|a, b| a.rel.cmp(&b.rel));
        Ok(docs)
    }
}

fn is_entry_file(rel: &str) -> bool {
    ENTRY_FILES.contains(&rel)
}
