//! Profile Command
//!
//! Runs the full profiling pipeline and renders the repository profile.

use std::path::PathBuf;

use crate::cli::output::Output;
use crate::profiler::{self, RepositoryProfile};
use crate::types::Result;

pub fn run(path: Option<PathBuf>, source_root: Option<&str>, format: &str) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    let profile = profiler::profile(&root, source_root)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&profile)?),
        _ => print_text(&profile),
    }

    Ok(())
}

fn print_text(profile: &RepositoryProfile) {
    let out = Output::new();

    out.section("Stack");
    print_fact("Framework", profile.stack.framework.as_deref().unwrap_or("none"));
    print_fact("Platform", &profile.stack.platform.to_string());
    print_fact("Build tool", profile.stack.build_tool.as_deref().unwrap_or("none"));
    print_fact(
        "TypeScript",
        if profile.stack.typescript_enabled { "yes" } else { "no" },
    );
    print_set("State management", &profile.stack.state_management);
    print_set("API layer", &profile.stack.api_layer);
    print_set("UI library", &profile.stack.ui_library);
    print_set("Testing", &profile.stack.testing);
    print_set("CSS", &profile.stack.css);
    print_set("Backend", &profile.stack.backend);
    print_set("Database", &profile.stack.database);
    print_set("Navigation", &profile.stack.navigation);

    out.section("Source structure");
    print_set("Features", &profile.source.features);
    print_set("Components", &profile.source.components);
    print_set("Hooks", &profile.source.hooks);
    print_set("Stores", &profile.source.stores);
    print_set("Screens", &profile.source.screens);
    print_set("Services", &profile.source.services);
    print_set("Navigation files", &profile.source.navigation_files);
    print_set("API routes", &profile.source.api_routes);
    print_set("GraphQL files", &profile.source.graphql_files);
    print_set("Type files", &profile.source.type_files);

    out.section("Backend");
    print_fact("Type", &profile.backend.backend_type.to_string());
    print_set("Schemas", &profile.backend.schemas);
    print_set("Edge functions", &profile.backend.edge_functions);
    print_set("Migrations", &profile.backend.migrations);
    print_set("ORM models", &profile.backend.orm_models);
    print_set("API routes", &profile.backend.api_routes);
}

fn print_fact(label: &str, value: &str) {
    println!("  {:<18} {}", label, value);
}

fn print_set(label: &str, values: &[String]) {
    if values.is_empty() {
        println!("  {:<18} -", label);
    } else {
        println!("  {:<18} {}", label, values.join(", "));
    }
}
