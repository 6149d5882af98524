//! Derived repository profile types.
//!
//! All three structures are derived, immutable per run, and rebuilt from the
//! current filesystem snapshot on every invocation. They are inventories of
//! names and relative paths only; nothing here owns the underlying files.

use serde::{Deserialize, Serialize};

/// Target platform implied by the detected framework.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
    #[default]
    Universal,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Web => write!(f, "web"),
            Self::Mobile => write!(f, "mobile"),
            Self::Universal => write!(f, "universal"),
        }
    }
}

/// Technology profile derived from the dependency manifest.
///
/// Set-valued fields keep insertion order (= detection order); each member
/// corresponds to exactly one matched dependency key, so duplicates are
/// impossible by construction. Detection is monotonic: adding unrelated
/// dependencies never removes an existing match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StackProfile {
    pub framework: Option<String>,
    pub platform: Platform,
    pub build_tool: Option<String>,
    pub typescript_enabled: bool,
    pub state_management: Vec<String>,
    pub api_layer: Vec<String>,
    pub ui_library: Vec<String>,
    pub testing: Vec<String>,
    pub css: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub navigation: Vec<String>,
}

/// Inventory produced by the convention-based source scanner.
///
/// `features` never merges across conventions: the first convention root
/// that yields entries wins for the whole category. `components` is capped
/// to a preview size; callers must not assume it is complete.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceStructure {
    pub features: Vec<String>,
    pub components: Vec<String>,
    pub hooks: Vec<String>,
    pub stores: Vec<String>,
    pub screens: Vec<String>,
    pub services: Vec<String>,
    pub navigation_files: Vec<String>,
    pub api_routes: Vec<String>,
    pub graphql_files: Vec<String>,
    pub type_files: Vec<String>,
}

/// Backend technology classification, first-detected-wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    Supabase,
    Prisma,
    Drizzle,
    #[default]
    Unknown,
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Supabase => write!(f, "Supabase"),
            Self::Prisma => write!(f, "Prisma"),
            Self::Drizzle => write!(f, "Drizzle"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Inventory produced by the backend/schema scanner.
///
/// `backend_type` is fixed by the first detector that fires, but later
/// detectors may still contribute to the inventory (a project can have both
/// Supabase edge functions and framework-level API routes).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendStructure {
    pub backend_type: BackendType,
    pub schemas: Vec<String>,
    pub edge_functions: Vec<String>,
    pub migrations: Vec<String>,
    pub orm_models: Vec<String>,
    pub api_routes: Vec<String>,
}
