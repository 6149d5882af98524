//! Score aggregation shared by every verification phase.
//!
//! The phase formula is deterministic and order-independent:
//! `round(100 * (10·success + 5·warning) / (10·total))`. Success carries full
//! weight, warning half weight, error and info zero — all four severities
//! count toward the total.

use crate::constants::scoring::{
    CONTENT_PCT, REFERENCE_PCT, STRUCTURE_PCT, SUCCESS_WEIGHT, VOLUME_PCT, VOLUME_TARGET_FILES,
    WARNING_WEIGHT,
};
use crate::types::{Finding, Severity};

/// Score one phase's finding sequence. An empty sequence scores zero (guards
/// the division, and an unverified phase has earned nothing).
pub fn phase_score(findings: &[Finding]) -> u8 {
    let total = findings.len() as u32;
    if total == 0 {
        return 0;
    }

    let success = count(findings, Severity::Success);
    let warning = count(findings, Severity::Warning);

    let earned = SUCCESS_WEIGHT * success + WARNING_WEIGHT * warning;
    let possible = SUCCESS_WEIGHT * total;

    ((earned as f64 / possible as f64) * 100.0).round() as u8
}

/// Soft floor rewarding documentation breadth: 10 points per file, capped at
/// [`VOLUME_TARGET_FILES`].
pub fn volume_score(file_count: usize) -> u8 {
    (100 * file_count / VOLUME_TARGET_FILES).min(100) as u8
}

/// Weighted completeness mix over the three phase scores plus the volume
/// signal.
pub fn completeness(structure: u8, content: u8, references: u8, volume: u8) -> u8 {
    let weighted = STRUCTURE_PCT * structure as u32
        + CONTENT_PCT * content as u32
        + REFERENCE_PCT * references as u32
        + VOLUME_PCT * volume as u32;
    ((weighted as f64) / 100.0).round() as u8
}

fn count(findings: &[Finding], severity: Severity) -> u32 {
    findings.iter().filter(|f| f.severity == severity).count() as u32
}
