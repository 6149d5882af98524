pub mod error;
pub mod finding;
pub mod profile;

pub use error::{Result, ScopeError};
pub use finding::{FileInventory, Finding, Scores, Severity, VerificationResult};
pub use profile::{BackendStructure, BackendType, Platform, SourceStructure, StackProfile};
