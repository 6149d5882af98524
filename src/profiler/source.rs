//! Convention-Based Source Scanner
//!
//! Walks known directory conventions (feature folders, page router, app
//! router, screens, navigation, services) to build a [`SourceStructure`]
//! inventory. Every category holds an ordered candidate chain; each candidate
//! either yields a populated listing or is not applicable, and the scanner
//! commits to the first populated candidate only. Results are never merged
//! across conventions, which keeps frameworks that support several routing
//! styles at once from producing duplicate inventories.
//!
//! A missing candidate directory is a normal branch outcome. A directory
//! that exists but cannot be enumerated is fatal: the scan cannot silently
//! lie about what it saw.

use std::path::{Path, PathBuf};

use crate::constants::scanning::{
    COMPONENT_PREVIEW_CAP, HOOK_PREFIX, RESERVED_APP_SEGMENTS, RESERVED_PAGE_ENTRIES,
};
use crate::types::{Platform, Result, ScopeError, SourceStructure};

pub struct SourceScanner<'a> {
    project_root: &'a Path,
    source_root: PathBuf,
    platform: Platform,
}

impl<'a> SourceScanner<'a> {
    pub fn new(project_root: &'a Path, source_root: impl AsRef<Path>, platform: Platform) -> Self {
        Self {
            project_root,
            source_root: project_root.join(source_root),
            platform,
        }
    }

    pub fn scan(&self) -> Result<SourceStructure> {
        Ok(SourceStructure {
            features: self.scan_features()?,
            components: self.scan_components()?,
            hooks: self.scan_hooks()?,
            stores: self.first_file_listing(&["store", "stores", "state"])?,
            screens: self.scan_screens()?,
            services: self.scan_services()?,
            navigation_files: self.entry_names_if_dir(&self.source_root.join("navigation"))?,
            api_routes: self.scan_api_routes()?,
            graphql_files: self.scan_graphql()?,
            type_files: self.scan_type_files()?,
        })
    }

    /// Domain folders. Chain: feature-folder conventions under the source
    /// root, then app-router segments, then pages-router entries. The pages
    /// router is a web-only convention and is skipped on mobile platforms.
    fn scan_features(&self) -> Result<Vec<String>> {
        for name in ["features", "modules", "domains"] {
            let dir = self.source_root.join(name);
            if dir.is_dir() {
                let found = self.subdir_names(&dir)?;
                if !found.is_empty() {
                    tracing::debug!(convention = name, count = found.len(), "features found");
                    return Ok(found);
                }
            }
        }

        for app in [self.project_root.join("app"), self.source_root.join("app")] {
            if app.is_dir() {
                let found: Vec<String> = self
                    .subdir_names(&app)?
                    .into_iter()
                    .filter(|n| !is_reserved_app_segment(n))
                    .collect();
                if !found.is_empty() {
                    return Ok(dedupe(found));
                }
            }
        }

        if self.platform != Platform::Mobile {
            for pages in [
                self.project_root.join("pages"),
                self.source_root.join("pages"),
            ] {
                if pages.is_dir() {
                    // Reserved-entry filtering runs on the raw names first: a
                    // dotfile like `.eslintrc` would otherwise strip down to an
                    // empty stem and slip through as a phantom domain.
                    let found: Vec<String> = self
                        .entry_names_if_dir(&pages)?
                        .into_iter()
                        .filter(|n| !is_reserved_page_entry(n))
                        .map(strip_extension)
                        .filter(|n| !n.is_empty() && !is_reserved_page_entry(n))
                        .collect();
                    if !found.is_empty() {
                        return Ok(dedupe(found));
                    }
                }
            }
        }

        Ok(Vec::new())
    }

    /// Component listing, truncated to a bounded preview. This is a
    /// reporting convenience, not an exhaustive inventory.
    fn scan_components(&self) -> Result<Vec<String>> {
        let dir = self.source_root.join("components");
        let mut names = self.entry_names_if_dir(&dir)?;
        names.truncate(COMPONENT_PREVIEW_CAP);
        Ok(names)
    }

    /// Hook files must follow the `useX` naming convention; anything else in
    /// the hooks directory is ignored.
    fn scan_hooks(&self) -> Result<Vec<String>> {
        let dir = self.source_root.join("hooks");
        Ok(self
            .entry_names_if_dir(&dir)?
            .into_iter()
            .filter(|n| is_hook_file(n))
            .collect())
    }

    fn scan_screens(&self) -> Result<Vec<String>> {
        for dir in [
            self.source_root.join("screens"),
            self.project_root.join("app/screens"),
        ] {
            let found = self.entry_names_if_dir(&dir)?;
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    fn scan_services(&self) -> Result<Vec<String>> {
        for dir in [
            self.source_root.join("services"),
            self.source_root.join("api"),
            self.source_root.join("lib/api"),
        ] {
            let found = self.entry_names_if_dir(&dir)?;
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    fn scan_api_routes(&self) -> Result<Vec<String>> {
        for dir in [
            self.project_root.join("app/api"),
            self.project_root.join("pages/api"),
            self.source_root.join("app/api"),
            self.source_root.join("pages/api"),
        ] {
            if dir.is_dir() {
                let found = self.relative_files_recursive(&dir)?;
                if !found.is_empty() {
                    return Ok(found);
                }
            }
        }
        Ok(Vec::new())
    }

    fn scan_graphql(&self) -> Result<Vec<String>> {
        let dir = self.source_root.join("graphql");
        let found = self.entry_names_if_dir(&dir)?;
        if !found.is_empty() {
            return Ok(found);
        }

        // Fall back to loose .graphql/.gql files directly under the source root.
        if self.source_root.is_dir() {
            let patterns: Vec<glob::Pattern> = ["*.graphql", "*.gql"]
                .iter()
                .filter_map(|p| glob::Pattern::new(p).ok())
                .collect();
            return Ok(self
                .file_names(&self.source_root)?
                .into_iter()
                .filter(|n| patterns.iter().any(|p| p.matches(n)))
                .collect());
        }
        Ok(Vec::new())
    }

    fn scan_type_files(&self) -> Result<Vec<String>> {
        for dir in [
            self.source_root.join("types"),
            self.project_root.join("types"),
        ] {
            let found = self.entry_names_if_dir(&dir)?;
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    fn first_file_listing(&self, candidates: &[&str]) -> Result<Vec<String>> {
        for name in candidates {
            let dir = self.source_root.join(name);
            let found = self.entry_names_if_dir(&dir)?;
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    /// Immediate subdirectory names, sorted for deterministic output.
    fn subdir_names(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in read_dir(dir)? {
            let entry = entry.map_err(|e| ScopeError::dir_unreadable(dir, e))?;
            let name = entry.file_name();
            if entry.path().is_dir()
                && let Some(name) = name.to_str()
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Immediate file names, sorted.
    fn file_names(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in read_dir(dir)? {
            let entry = entry.map_err(|e| ScopeError::dir_unreadable(dir, e))?;
            let name = entry.file_name();
            if entry.path().is_file()
                && let Some(name) = name.to_str()
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// All immediate entry names (files and subdirectories), or empty when
    /// the directory does not exist.
    fn entry_names_if_dir(&self, dir: &Path) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in read_dir(dir)? {
            let entry = entry.map_err(|e| ScopeError::dir_unreadable(dir, e))?;
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// File paths under `dir`, relative to it, depth-first and sorted.
    fn relative_files_recursive(&self, dir: &Path) -> Result<Vec<String>> {
        fn visit(base: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
            for entry in read_dir(dir)? {
                let entry = entry.map_err(|e| ScopeError::dir_unreadable(dir, e))?;
                let path = entry.path();
                if path.is_dir() {
                    visit(base, &path, out)?;
                } else if let Ok(rel) = path.strip_prefix(base) {
                    out.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
            Ok(())
        }

        let mut out = Vec::new();
        visit(dir, dir, &mut out)?;
        out.sort();
        Ok(out)
    }
}

fn read_dir(dir: &Path) -> Result<std::fs::ReadDir> {
    std::fs::read_dir(dir).map_err(|e| ScopeError::dir_unreadable(dir, e))
}

/// App-router segments that never name a domain: framework reserved names,
/// leading underscore/dot entries, and `(group)` route-grouping segments.
fn is_reserved_app_segment(name: &str) -> bool {
    name.starts_with('_')
        || name.starts_with('.')
        || name.starts_with('(')
        || name.starts_with('[')
        || RESERVED_APP_SEGMENTS.contains(&name)
}

/// `use` followed by an uppercase letter, per the React hook naming
/// convention. A bare prefix match would also admit names like
/// `user-profile.ts`.
fn is_hook_file(name: &str) -> bool {
    name.strip_prefix(HOOK_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn is_reserved_page_entry(name: &str) -> bool {
    name.starts_with('.') || RESERVED_PAGE_ENTRIES.contains(&name) || name.starts_with('_')
}

/// Pages-router style: `settings.tsx` and `settings/` name the same route.
fn strip_extension(name: String) -> String {
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

/// Order-preserving dedup: a name already committed by one convention source
/// is not re-added by a later entry.
fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names.into_iter().filter(|n| seen.insert(n.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for d in dirs {
            std::fs::create_dir_all(root.join(d)).unwrap();
        }
    }

    fn touch(root: &Path, files: &[&str]) {
        for f in files {
            let path = root.join(f);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, "").unwrap();
        }
    }

    #[test]
    fn test_feature_folders_win_over_app_router() {
        let temp = TempDir::new().unwrap();
        mkdirs(
            temp.path(),
            &["src/features/auth", "src/features/billing", "app/checkout"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.features, vec!["auth", "billing"]);
    }

    #[test]
    fn test_app_router_segments_filtered() {
        let temp = TempDir::new().unwrap();
        mkdirs(
            temp.path(),
            &[
                "app/dashboard",
                "app/settings",
                "app/api",
                "app/components",
                "app/(marketing)",
                "app/_private",
            ],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.features, vec!["dashboard", "settings"]);
    }

    #[test]
    fn test_pages_router_fallback() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["pages/api"]);
        touch(
            temp.path(),
            &["pages/index.tsx", "pages/settings.tsx", "pages/_app.tsx"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.features, vec!["index", "settings"]);
    }

    #[test]
    fn test_pages_router_dotfiles_excluded() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["pages/.eslintrc", "pages/settings.tsx", "pages/_app.tsx"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.features, vec!["settings"]);
        assert!(!structure.features.iter().any(String::is_empty));
    }

    #[test]
    fn test_pages_router_skipped_on_mobile() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["pages/home.tsx"]);

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Mobile);
        let structure = scanner.scan().unwrap();
        assert!(structure.features.is_empty());
    }

    #[test]
    fn test_empty_convention_root_falls_through() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["src/features", "src/modules/payments"]);

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.features, vec!["payments"]);
    }

    #[test]
    fn test_hook_prefix_filter() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["src/hooks/useAuth.ts", "src/hooks/useCart.ts", "src/hooks/helpers.ts"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.hooks, vec!["useAuth.ts", "useCart.ts"]);
    }

    #[test]
    fn test_hook_filter_requires_uppercase_after_prefix() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["src/hooks/useSession.ts", "src/hooks/user-profile.ts", "src/hooks/useful.ts"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.hooks, vec!["useSession.ts"]);
    }

    #[test]
    fn test_component_preview_is_capped() {
        let temp = TempDir::new().unwrap();
        let files: Vec<String> = (0..20)
            .map(|i| format!("src/components/Component{:02}.tsx", i))
            .collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        touch(temp.path(), &refs);

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.components.len(), COMPONENT_PREVIEW_CAP);
    }

    #[test]
    fn test_api_routes_recursive() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["app/api/users/route.ts", "app/api/orders/[id]/route.ts"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(
            structure.api_routes,
            vec!["orders/[id]/route.ts", "users/route.ts"]
        );
    }

    #[test]
    fn test_missing_everything_yields_empty_inventory() {
        let temp = TempDir::new().unwrap();
        let scanner = SourceScanner::new(temp.path(), "src", Platform::Universal);
        let structure = scanner.scan().unwrap();

        assert!(structure.features.is_empty());
        assert!(structure.components.is_empty());
        assert!(structure.api_routes.is_empty());
        assert!(structure.stores.is_empty());
    }

    #[test]
    fn test_loose_graphql_files_matched_by_pattern() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["src/schema.graphql", "src/fragments.gql", "src/index.ts"],
        );

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.graphql_files, vec!["fragments.gql", "schema.graphql"]);
    }

    #[test]
    fn test_store_convention_chain() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["src/stores/cart.ts", "src/stores/user.ts"]);

        let scanner = SourceScanner::new(temp.path(), "src", Platform::Web);
        let structure = scanner.scan().unwrap();
        assert_eq!(structure.stores, vec!["cart.ts", "user.ts"]);
    }
}
