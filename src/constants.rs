//! Global Constants
//!
//! Centralized constants for conventions and tuning.
//! All fixed manifests and magic numbers live here with documentation.

/// Context-graph layout expectations
pub mod context {
    /// Default documentation root, relative to the project root
    pub const DEFAULT_CONTEXT_DIR: &str = ".context";

    /// Master instruction file every AI-tool entry file must mention
    pub const MASTER_FILE: &str = "README.md";

    /// Root entry files external AI tools read first
    pub const ENTRY_FILES: &[&str] = &["CLAUDE.md", "AGENTS.md"];

    /// Required root-level files (missing ⇒ error)
    pub const REQUIRED_ROOT_FILES: &[&str] = &["README.md", "CLAUDE.md", "AGENTS.md"];

    /// Required category subdirectories (missing ⇒ warning)
    pub const REQUIRED_DIRS: &[&str] =
        &["domains", "architecture", "patterns", "workflows", "templates"];

    /// Subtree that holds boilerplate skeletons, never live content
    pub const TEMPLATES_DIR: &str = "templates";

    /// Fixed filename for the nested per-domain layout (`domains/<name>/context.md`)
    pub const DOMAIN_FILE: &str = "context.md";
}

/// Required section headers per documentation category.
///
/// A file satisfies a section when a markdown heading (1-4 leading `#`)
/// starts with the section name, case-insensitive, anchored to line start.
pub mod sections {
    pub const DOMAIN: &[&str] = &[
        "Purpose",
        "Key Files",
        "Data Flow",
        "Dependencies",
        "Business Rules",
        "Common Tasks",
    ];

    pub const ARCHITECTURE: &[&str] = &[
        "Overview",
        "Layers",
        "Data Flow",
        "Key Decisions",
        "Conventions",
    ];

    pub const PATTERN: &[&str] = &[
        "Intent",
        "When To Use",
        "Implementation",
        "Examples",
        "Pitfalls",
    ];

    pub const WORKFLOW: &[&str] = &[
        "Goal",
        "Prerequisites",
        "Steps",
        "Verification",
        "Troubleshooting",
    ];
}

/// Score formula weights (see `verifier::score`)
pub mod scoring {
    /// Weight of a success finding
    pub const SUCCESS_WEIGHT: u32 = 10;

    /// Weight of a warning finding (error and info contribute zero)
    pub const WARNING_WEIGHT: u32 = 5;

    /// Completeness mix, must sum to 100
    pub const STRUCTURE_PCT: u32 = 25;
    pub const CONTENT_PCT: u32 = 35;
    pub const REFERENCE_PCT: u32 = 20;
    pub const VOLUME_PCT: u32 = 20;

    /// File count at which the volume signal saturates
    pub const VOLUME_TARGET_FILES: usize = 10;

    /// Section coverage at or above this percentage is a warning, below is
    /// an error (100% is a success)
    pub const SECTION_WARNING_PCT: u32 = 50;

    /// Default completeness below which `verify` exits non-zero
    pub const DEFAULT_THRESHOLD: u8 = 60;
}

/// Source-scanner conventions
pub mod scanning {
    /// Dependency manifest filename
    pub const MANIFEST_FILE: &str = "package.json";

    /// Default primary source root, relative to the project root
    pub const DEFAULT_SOURCE_ROOT: &str = "src";

    /// Component file listings are truncated to this preview size
    pub const COMPONENT_PREVIEW_CAP: usize = 12;

    /// Hook files must start with this prefix to be inventoried
    pub const HOOK_PREFIX: &str = "use";

    /// App-router segments that are framework plumbing, not domains
    pub const RESERVED_APP_SEGMENTS: &[&str] =
        &["api", "components", "lib", "hooks", "utils", "styles"];

    /// Pages-router entries that are framework plumbing, not domains
    pub const RESERVED_PAGE_ENTRIES: &[&str] = &["_app", "_document", "api"];

    /// Root words a path-shaped documentation reference may start with
    pub const REFERENCE_ROOTS: &[&str] = &[
        "src",
        "app",
        "pages",
        "components",
        "lib",
        "server",
        "api",
        "supabase",
        "prisma",
    ];
}
