//! Backend/Schema Scanner
//!
//! Probes backend-specific conventions independently of the source scanner:
//! a Supabase-style hosted backend (schema/function/migration subfolders), a
//! Prisma schema file (model declarations found by a lightweight pattern
//! match, not a full grammar), a Drizzle migration folder, and generic API
//! route folders. `backend_type` is fixed by whichever detector fires first;
//! later detectors still contribute to the inventory.
//!
//! When both an ORM schema and a hosted-backend directory exist, probe order
//! decides the reported type. That is intentionally first-match-wins, not a
//! judgement about which backend is primary.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{BackendStructure, BackendType, Result, ScopeError};

static MODEL_RE: OnceLock<Regex> = OnceLock::new();

fn model_re() -> &'static Regex {
    MODEL_RE.get_or_init(|| Regex::new(r"(?m)^\s*model\s+(\w+)\s*\{").expect("valid model regex"))
}

pub struct BackendScanner<'a> {
    project_root: &'a Path,
}

impl<'a> BackendScanner<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self { project_root }
    }

    pub fn scan(&self) -> Result<BackendStructure> {
        let mut structure = BackendStructure::default();

        self.probe_supabase(&mut structure)?;
        self.probe_prisma(&mut structure)?;
        self.probe_drizzle(&mut structure)?;
        self.probe_api_routes(&mut structure)?;

        Ok(structure)
    }

    fn probe_supabase(&self, structure: &mut BackendStructure) -> Result<()> {
        let supabase = self.project_root.join("supabase");
        if !supabase.is_dir() {
            return Ok(());
        }

        if structure.backend_type == BackendType::Unknown {
            structure.backend_type = BackendType::Supabase;
        }

        structure.edge_functions = subdir_names(&supabase.join("functions"))?;
        structure.migrations = file_names(&supabase.join("migrations"))?;
        structure.schemas = file_names(&supabase.join("schemas"))?;
        Ok(())
    }

    fn probe_prisma(&self, structure: &mut BackendStructure) -> Result<()> {
        let schema = self.project_root.join("prisma/schema.prisma");
        if !schema.is_file() {
            return Ok(());
        }

        if structure.backend_type == BackendType::Unknown {
            structure.backend_type = BackendType::Prisma;
        }

        let text = std::fs::read_to_string(&schema)
            .map_err(|e| ScopeError::file_unreadable(&schema, e))?;
        structure.orm_models = model_re()
            .captures_iter(&text)
            .map(|c| c[1].to_string())
            .collect();
        structure
            .schemas
            .push("prisma/schema.prisma".to_string());

        let migrations = self.project_root.join("prisma/migrations");
        if migrations.is_dir() {
            structure.migrations.extend(subdir_names(&migrations)?);
        }
        Ok(())
    }

    fn probe_drizzle(&self, structure: &mut BackendStructure) -> Result<()> {
        let drizzle_dir = self.project_root.join("drizzle");
        let has_config = ["drizzle.config.ts", "drizzle.config.js"]
            .iter()
            .any(|f| self.project_root.join(f).is_file());

        if !drizzle_dir.is_dir() && !has_config {
            return Ok(());
        }

        if structure.backend_type == BackendType::Unknown {
            structure.backend_type = BackendType::Drizzle;
        }

        if drizzle_dir.is_dir() {
            structure.migrations.extend(file_names(&drizzle_dir)?);
        }
        Ok(())
    }

    /// API route folders across framework conventions, first match wins.
    /// Fires regardless of which detector claimed `backend_type`.
    fn probe_api_routes(&self, structure: &mut BackendStructure) -> Result<()> {
        let candidates = [
            self.project_root.join("app/api"),
            self.project_root.join("pages/api"),
            self.project_root.join("src/app/api"),
            self.project_root.join("src/pages/api"),
            self.project_root.join("server/api"),
        ];

        for dir in candidates {
            if dir.is_dir() {
                let routes = relative_files(&dir)?;
                if !routes.is_empty() {
                    structure.api_routes = routes;
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

fn subdir_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ScopeError::dir_unreadable(dir, e))? {
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

fn file_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ScopeError::dir_unreadable(dir, e))? {
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

fn relative_files(dir: &Path) -> Result<Vec<String>> {
    fn visit(base: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
        for entry in std::fs::read_dir(dir).map_err(|e| ScopeError::dir_unreadable(dir, e))? {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_supabase_inventory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("supabase/functions/send-email")).unwrap();
        std::fs::create_dir_all(temp.path().join("supabase/functions/sync-users")).unwrap();
        write(temp.path(), "supabase/migrations/0001_init.sql", "");

        let structure = BackendScanner::new(temp.path()).scan().unwrap();
        assert_eq!(structure.backend_type, BackendType::Supabase);
        assert_eq!(structure.edge_functions, vec!["send-email", "sync-users"]);
        assert_eq!(structure.migrations, vec!["0001_init.sql"]);
    }

    #[test]
    fn test_prisma_model_extraction() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "prisma/schema.prisma",
            "datasource db {}\n\nmodel User {\n  id Int @id\n}\n\nmodel Order {\n  id Int @id\n}\n",
        );

        let structure = BackendScanner::new(temp.path()).scan().unwrap();
        assert_eq!(structure.backend_type, BackendType::Prisma);
        assert_eq!(structure.orm_models, vec!["User", "Order"]);
        assert_eq!(structure.schemas, vec!["prisma/schema.prisma"]);
    }

    #[test]
    fn test_supabase_probed_before_prisma() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("supabase/functions")).unwrap();
        write(temp.path(), "prisma/schema.prisma", "model User {\n}\n");

        let structure = BackendScanner::new(temp.path()).scan().unwrap();
        // First-match-wins on type, but both detectors fill the inventory.
        assert_eq!(structure.backend_type, BackendType::Supabase);
        assert_eq!(structure.orm_models, vec!["User"]);
    }

    #[test]
    fn test_drizzle_config_detection() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "drizzle.config.ts", "export default {};");

        let structure = BackendScanner::new(temp.path()).scan().unwrap();
        assert_eq!(structure.backend_type, BackendType::Drizzle);
    }

    #[test]
    fn test_api_routes_contribute_without_backend_type() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pages/api/health.ts", "");

        let structure = BackendScanner::new(temp.path()).scan().unwrap();
        assert_eq!(structure.backend_type, BackendType::Unknown);
        assert_eq!(structure.api_routes, vec!["health.ts"]);
    }

    #[test]
    fn test_empty_project() {
        let temp = TempDir::new().unwrap();
        let structure = BackendScanner::new(temp.path()).scan().unwrap();
        assert_eq!(structure.backend_type, BackendType::Unknown);
        assert!(structure.api_routes.is_empty());
        assert!(structure.orm_models.is_empty());
    }
}
