//! Sync command handler
//!
//! Handles `vpm sync` and `vpm modules`.

use crate::project::{self, ModuleEntry};
use crate::sync;
use crate::ui;
use anyhow::{Context, Result, anyhow};
use colored::*;
use std::path::{Path, PathBuf};

/// Canonical form of `path`, relative paths resolved against the working directory.
///
/// `.` and `..` components are folded away so the last component is the module name.
pub fn resolve_module_path(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let absolute = std::path::absolute(&path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    if !absolute.exists() {
        return Err(anyhow!("Module path {} does not exist", absolute.display()));
    }
    std::fs::canonicalize(&absolute)
        .with_context(|| format!("Failed to resolve {}", absolute.display()))
}

/// Synchronizes one module and prints the outcome.
pub fn sync_module(module_path: &Path, verbose: bool) -> Result<()> {
    let name = sync::module_name_of(module_path)?;
    println!("{} Processing module: {}", "⚡".yellow(), name.cyan());
    let report = sync::synchronize(module_path)
        .with_context(|| format!("Failed to synchronize module at {}", module_path.display()))?;
    ui::print_sync_report(&report, verbose);
    Ok(())
}

/// Handle `vpm sync [PATH] [--all]`
pub fn handle_sync(path: Option<&Path>, all: bool, verbose: bool) -> Result<()> {
    if !all {
        let module_path = resolve_module_path(path)?;
        return sync_module(&module_path, verbose);
    }

    let start = resolve_module_path(path)?;
    let root = project::find_project_root(&start);
    let modules = project::list_modules(&root)?;
    if modules.is_empty() {
        println!("{} No modules found in {}", "!".yellow(), root.display());
        return Ok(());
    }

    let mut failed = Vec::new();
    for module in &modules {
        if let Err(e) = sync_module(&module.path, verbose) {
            println!("{} {}: {:#}", "x".red(), module.display_name(), e);
            failed.push(module.display_name());
        }
    }

    if failed.is_empty() {
        println!(
            "{} Synchronized {} module(s)",
            "✓".green(),
            modules.len()
        );
        Ok(())
    } else {
        Err(anyhow!("Synchronization failed for: {}", failed.join(", ")))
    }
}

/// Handle `vpm modules`
pub fn handle_list_modules() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = project::find_project_root(&cwd);
    let modules = project::list_modules(&root)?;
    print_modules(&root, &modules);
    Ok(())
}

fn print_modules(root: &Path, modules: &[ModuleEntry]) {
    if modules.is_empty() {
        println!("{} No modules found in the project", "!".yellow());
        return;
    }

    println!("{} {}", "📦".cyan(), "Available modules".bold());
    let mut table = ui::Table::new(&["Module", "Synced", "Path"]);
    for module in modules {
        let synced = sync::list_file_path(&module.path, &module.name).exists();
        let relative = module.path.strip_prefix(root).unwrap_or(&module.path);
        table.add_row(vec![
            module.display_name().green().to_string(),
            (if synced { "yes".green() } else { "no".yellow() }).to_string(),
            sync::normalize_path(relative),
        ]);
    }
    table.print();
}
