//! Project layout: root discovery, `project.json`, and module listing.
//!
//! A project keeps its buildable units in two folders:
//!
//! ```text
//! project.json
//! app/<name>/...
//! lib/<name>/...
//! ```

use anyhow::{Context, Result};
use colored::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const PROJECT_FILE: &str = "project.json";

/// Files whose presence marks a project root, checked in order.
const ROOT_MARKERS: &[&str] = &[PROJECT_FILE, "vcpkg.json", "CMakePresets.json"];

/// Folders scanned for modules.
pub const MODULE_DIRS: &[&str] = &["app", "lib"];

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl ProjectConfig {
    /// Reads `project.json` under `root`.
    ///
    /// A missing or unparsable file is reported and replaced by defaults;
    /// only read errors on an existing file are returned.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(PROJECT_FILE);
        if !path.exists() {
            println!(
                "   {} {} not found, using defaults",
                "!".yellow(),
                PROJECT_FILE
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                println!(
                    "   {} Failed to parse {}: {}",
                    "!".yellow(),
                    PROJECT_FILE,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    pub fn organization_or_default(&self) -> &str {
        self.organization.as_deref().unwrap_or("Unknown Organization")
    }
}

/// Nearest ancestor of `start` holding a project marker, else `start`.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|m| dir.join(m).is_file()))
        .unwrap_or(start)
        .to_path_buf()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// `app` or `lib`
    pub kind: String,
    pub name: String,
    pub path: PathBuf,
}

impl ModuleEntry {
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }
}

/// Every directory directly under `app/` and `lib/`, sorted.
pub fn list_modules(root: &Path) -> Result<Vec<ModuleEntry>> {
    let mut modules = Vec::new();
    for kind in MODULE_DIRS {
        let dir = root.join(kind);
        if !dir.is_dir() {
            continue;
        }
        for entry in
            fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))?
        {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.file_type()?.is_dir() && !name.starts_with('.') {
                modules.push(ModuleEntry {
                    kind: kind.to_string(),
                    name,
                    path: entry.path(),
                });
            }
        }
    }
    modules.sort_by_key(|m| m.display_name());
    Ok(modules)
}

/// `my_class` -> `MyClass`. Names without underscores that already start
/// uppercase are kept as-is.
pub fn to_pascal_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if !text.contains('_') && text.starts_with(|c: char| c.is_uppercase()) {
        return text.to_string();
    }
    text.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// `base` extended with one directory per `::`-separated namespace part.
pub fn compose_namespace_path(base: &Path, namespace: &str) -> PathBuf {
    namespace
        .split("::")
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |path, part| path.join(part))
}

static MODULE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());

/// Module names become directory names, CMake targets and variable
/// prefixes, so they are restricted to `[A-Za-z][A-Za-z0-9_-]*`.
pub fn validate_module_name(name: &str) -> Result<()> {
    if MODULE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Invalid module name '{}': use letters, digits, '-' or '_', starting with a letter",
            name
        ))
    }
}
