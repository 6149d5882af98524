//! Verification engine: runs the three phases in sequence against one
//! filesystem snapshot and assembles the [`VerificationResult`]. Each phase
//! is a pure function of its inputs returning its own finding sequence; the
//! engine threads those into the aggregate — no ambient state survives
//! between runs.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::types::{Result, VerificationResult};

use super::references::ReferenceAnalyzer;
use super::{content, score, structure};

pub struct Verifier {
    project_root: PathBuf,
    context_root: PathBuf,
}

impl Verifier {
    pub fn new(project_root: impl Into<PathBuf>, context_dir: impl AsRef<Path>) -> Self {
        let project_root = project_root.into();
        let context_root = project_root.join(context_dir);
        Self {
            project_root,
            context_root,
        }
    }

    pub fn context_root(&self) -> &Path {
        &self.context_root
    }

    pub fn run(&self) -> Result<VerificationResult> {
        // A missing documentation root short-circuits the whole run: every
        // score is zero and no phase executes.
        if !self.context_root.is_dir() {
            tracing::warn!(
                path = %self.context_root.display(),
                "context root does not exist"
            );
            return Ok(VerificationResult::absent());
        }

        let structure_findings = structure::check(&self.context_root)?;
        let content_report = content::check(&self.context_root)?;
        let (reference_findings, doc_count) =
            ReferenceAnalyzer::new(&self.project_root, &self.context_root).analyze()?;

        let structure_score = score::phase_score(&structure_findings);
        let content_score = score::phase_score(&content_report.findings);
        let reference_score = score::phase_score(&reference_findings);
        let volume = score::volume_score(doc_count);

        let mut result = VerificationResult {
            generated_at: Utc::now(),
            structure: structure_findings,
            content: content_report.findings,
            cross_references: reference_findings,
            scores: Default::default(),
            files: content_report.files,
        };
        result.scores.structure = structure_score;
        result.scores.content = content_score;
        result.scores.references = reference_score;
        result.scores.completeness =
            score::completeness(structure_score, content_score, reference_score, volume);

        Ok(result)
    }
}
