//! Styled terminal output shared by the profile and verify renderers.

use console::style;

use crate::types::Severity;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn header(&self, message: &str) {
        println!("{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// One finding line, indented under its phase heading, with a colored
    /// severity icon.
    pub fn finding(&self, severity: Severity, message: &str) {
        println!("  {} {}", Self::badge(severity), message);
    }

    fn badge(severity: Severity) -> console::StyledObject<&'static str> {
        match severity {
            Severity::Success => style("✓").green(),
            Severity::Warning => style("⚠").yellow(),
            Severity::Error => style("✗").red(),
            Severity::Info => style("ℹ").blue(),
        }
    }
}
