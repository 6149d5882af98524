//! Manifest Stack Detector
//!
//! Reads the project's `package.json` and derives a [`StackProfile`] from an
//! ordered rule list. Single-valued fields use first-match-wins precedence
//! (a framework that bundles a lower-level tool is tested before the tool
//! alone); set-valued fields collect every matching rule independently.
//! No network or filesystem access beyond the manifest read.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::constants::scanning::MANIFEST_FILE;
use crate::types::{Platform, Result, ScopeError, StackProfile};

/// Parsed dependency manifest with production and development dependencies
/// merged. Values are kept loose (`serde_json::Value`) so nested or
/// non-string version entries do not fail the parse.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, serde_json::Value>,
}

impl Manifest {
    /// Load `package.json` from the project root.
    ///
    /// A missing or unparseable manifest is fatal: nothing downstream can run
    /// without a technology profile.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);

        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScopeError::ManifestMissing {
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(ScopeError::file_unreadable(&path, e)),
        };

        serde_json::from_str(&text).map_err(|e| ScopeError::ManifestInvalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Build a manifest from bare dependency keys (production side).
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dependencies: keys
                .into_iter()
                .map(|k| (k.into(), serde_json::Value::Null))
                .collect(),
            dev_dependencies: HashMap::new(),
        }
    }

    /// True when either dependency group declares `key`. Development-only
    /// entries are not distinguished from production ones.
    pub fn has(&self, key: &str) -> bool {
        self.dependencies.contains_key(key) || self.dev_dependencies.contains_key(key)
    }
}

// Set-valued rule tables: (dependency key, canonical library name).
// Each key appears in exactly one table, so a profile set can never hold
// duplicates.

const STATE_MANAGEMENT: &[(&str, &str)] = &[
    ("@reduxjs/toolkit", "Redux Toolkit"),
    ("redux", "Redux"),
    ("zustand", "Zustand"),
    ("mobx", "MobX"),
    ("jotai", "Jotai"),
    ("recoil", "Recoil"),
];

const API_LAYER: &[(&str, &str)] = &[
    ("@tanstack/react-query", "React Query"),
    ("swr", "SWR"),
    ("axios", "Axios"),
    ("@apollo/client", "Apollo Client"),
    ("graphql", "GraphQL"),
    ("@trpc/client", "tRPC"),
];

const UI_LIBRARY: &[(&str, &str)] = &[
    ("@mui/material", "Material UI"),
    ("antd", "Ant Design"),
    ("@chakra-ui/react", "Chakra UI"),
    ("react-native-paper", "React Native Paper"),
    ("nativewind", "NativeWind"),
];

const TESTING: &[(&str, &str)] = &[
    ("jest", "Jest"),
    ("vitest", "Vitest"),
    ("@testing-library/react", "Testing Library"),
    ("cypress", "Cypress"),
    ("@playwright/test", "Playwright"),
    ("detox", "Detox"),
];

const CSS: &[(&str, &str)] = &[
    ("tailwindcss", "Tailwind CSS"),
    ("styled-components", "styled-components"),
    ("@emotion/react", "Emotion"),
    ("sass", "Sass"),
];

const BACKEND: &[(&str, &str)] = &[
    ("express", "Express"),
    ("fastify", "Fastify"),
    ("hono", "Hono"),
    ("@nestjs/core", "NestJS"),
];

const DATABASE: &[(&str, &str)] = &[
    ("prisma", "Prisma"),
    ("drizzle-orm", "Drizzle"),
    ("@supabase/supabase-js", "Supabase"),
    ("mongoose", "Mongoose"),
    ("typeorm", "TypeORM"),
    ("firebase", "Firebase"),
];

const NAVIGATION: &[(&str, &str)] = &[
    ("@react-navigation/native", "React Navigation"),
    ("expo-router", "Expo Router"),
    ("react-router-dom", "React Router"),
];

/// Derive the technology profile from a manifest.
///
/// Deterministic and idempotent: the same manifest always yields the same
/// profile, in the same member order.
pub fn detect(manifest: &Manifest) -> StackProfile {
    let mut profile = StackProfile::default();

    // Framework precedence: meta-frameworks bundle their base library, so
    // `next` must be tested before `react`, and `expo` before `react-native`.
    if manifest.has("next") {
        profile.framework = Some("Next.js".to_string());
        profile.platform = Platform::Web;
    } else if manifest.has("expo") {
        profile.framework = Some("Expo".to_string());
        profile.platform = Platform::Mobile;
    } else if manifest.has("react-native") {
        profile.framework = Some("React Native".to_string());
        profile.platform = Platform::Mobile;
    } else if manifest.has("react") {
        profile.framework = Some("React".to_string());
        profile.platform = Platform::Web;
    }

    if manifest.has("vite") {
        profile.build_tool = Some("Vite".to_string());
    } else if manifest.has("webpack") {
        profile.build_tool = Some("Webpack".to_string());
    } else if manifest.has("metro") || profile.platform == Platform::Mobile {
        profile.build_tool = Some("Metro".to_string());
    }

    profile.typescript_enabled = manifest.has("typescript");

    append_matches(manifest, STATE_MANAGEMENT, &mut profile.state_management);
    append_matches(manifest, API_LAYER, &mut profile.api_layer);
    append_matches(manifest, UI_LIBRARY, &mut profile.ui_library);
    append_matches(manifest, TESTING, &mut profile.testing);
    append_matches(manifest, CSS, &mut profile.css);
    append_matches(manifest, BACKEND, &mut profile.backend);
    append_matches(manifest, DATABASE, &mut profile.database);
    append_matches(manifest, NAVIGATION, &mut profile.navigation);

    profile
}

fn append_matches(manifest: &Manifest, rules: &[(&str, &str)], target: &mut Vec<String>) {
    for (key, name) in rules {
        if manifest.has(key) {
            target.push((*name).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_next_with_typescript() {
        let manifest = Manifest::from_keys(["next", "typescript"]);
        let profile = detect(&manifest);

        assert_eq!(profile.framework.as_deref(), Some("Next.js"));
        assert_eq!(profile.platform, Platform::Web);
        assert!(profile.typescript_enabled);
    }

    #[test]
    fn test_next_wins_over_react() {
        let manifest = Manifest::from_keys(["react", "next"]);
        let profile = detect(&manifest);
        assert_eq!(profile.framework.as_deref(), Some("Next.js"));
    }

    #[test]
    fn test_expo_wins_over_react_native() {
        let manifest = Manifest::from_keys(["react-native", "expo", "react"]);
        let profile = detect(&manifest);

        assert_eq!(profile.framework.as_deref(), Some("Expo"));
        assert_eq!(profile.platform, Platform::Mobile);
        assert_eq!(profile.build_tool.as_deref(), Some("Metro"));
    }

    #[test]
    fn test_single_library_hits_exactly_one_field() {
        let manifest = Manifest::from_keys(["zustand"]);
        let profile = detect(&manifest);

        assert_eq!(profile.state_management, vec!["Zustand"]);
        assert!(profile.api_layer.is_empty());
        assert!(profile.database.is_empty());
        assert!(profile.framework.is_none());
    }

    #[test]
    fn test_detection_is_monotonic() {
        let base = detect(&Manifest::from_keys(["zustand"]));
        let extended = detect(&Manifest::from_keys(["zustand", "left-pad", "lodash"]));
        assert_eq!(base.state_management, extended.state_management);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let manifest = Manifest::from_keys(["next", "zustand", "axios", "prisma", "jest"]);
        assert_eq!(detect(&manifest), detect(&manifest));
    }

    #[test]
    fn test_dev_dependencies_merged() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"dependencies": {"react": "18.0.0"}, "devDependencies": {"vitest": "1.0.0"}}"#,
        )
        .unwrap();

        let manifest = Manifest::load(temp.path()).unwrap();
        let profile = detect(&manifest);

        assert_eq!(profile.framework.as_deref(), Some("React"));
        assert_eq!(profile.testing, vec!["Vitest"]);
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, ScopeError::ManifestMissing { .. }));
    }

    #[test]
    fn test_malformed_manifest_is_fatal() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{not json").unwrap();

        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, ScopeError::ManifestInvalid { .. }));
    }

    #[test]
    fn test_nested_version_values_tolerated() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"dependencies": {"next": {"version": "14.0.0"}}}"#,
        )
        .unwrap();

        let manifest = Manifest::load(temp.path()).unwrap();
        assert!(manifest.has("next"));
    }
}
