use std::fs;
use std::path::Path;

use crate::cli::output::Output;
use crate::types::{Finding, Result, Severity, VerificationResult};

pub struct Reporter;

impl Reporter {
    pub fn generate_json<P: AsRef<Path>>(result: &VerificationResult, output_path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        fs::write(output_path, json)?;
        Ok(())
    }

    pub fn print_summary(result: &VerificationResult) {
        let out = Output::new();
        out.header("Context Verification Report");
        println!("══════════════════════════════════════");

        Self::print_phase(&out, "Structure", &result.structure, result.scores.structure);
        Self::print_phase(&out, "Content", &result.content, result.scores.content);
        Self::print_phase(
            &out,
            "Cross-references",
            &result.cross_references,
            result.scores.references,
        );

        println!();
        println!("══════════════════════════════════════");
        println!("Scores");
        println!("  Structure:    {:>3}/100", result.scores.structure);
        println!("  Content:      {:>3}/100", result.scores.content);
        println!("  References:   {:>3}/100", result.scores.references);
        println!("  Completeness: {:>3}/100", result.scores.completeness);
        println!();

        if result.has_errors() {
            println!("Result: FAILED ({} errors)", result.error_count());
        } else if result.warning_count() > 0 {
            println!(
                "Result: PASSED with warnings ({})",
                result.warning_count()
            );
        } else {
            println!("Result: PASSED ✓");
        }
    }

    fn print_phase(out: &Output, name: &str, findings: &[Finding], score: u8) {
        println!();
        println!("{} ({}/100)", name, score);

        if findings.is_empty() {
            println!("  (not checked)");
            return;
        }

        for finding in findings {
            out.finding(finding.severity, &finding.message);
        }
    }

    /// Print only findings at or above a minimum severity, across all phases.
    pub fn print_filtered(result: &VerificationResult, min_severity: Severity) {
        let filtered: Vec<&Finding> = result
            .structure
            .iter()
            .chain(result.content.iter())
            .chain(result.cross_references.iter())
            .filter(|f| f.severity <= min_severity)
            .collect();

        if filtered.is_empty() {
            println!("No findings at severity {:?} or higher.", min_severity);
            return;
        }

        println!("Findings ({}):", filtered.len());
        for finding in filtered {
            println!(
                "[{}] {}",
                format!("{:?}", finding.severity).to_uppercase(),
                finding.message
            );
        }
    }
}
