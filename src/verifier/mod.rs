//! Documentation-graph verification: structural checks, content-completeness
//! scoring, cross-reference/orphan analysis, and score aggregation.

pub mod content;
pub mod engine;
pub mod references;
pub mod reporter;
pub mod score;
pub mod structure;

pub use engine::Verifier;
pub use references::ReferenceAnalyzer;
pub use reporter::Reporter;
