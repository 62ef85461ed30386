//! Module scaffolding for `vpm module new`.
//!
//! Creates `<root>/<app|lib>/<name>` with its folder skeleton and starter
//! files, synchronizes its source lists, and registers it with the parent
//! `CMakeLists.txt`.

use crate::fs::DiskFs;
use crate::project::{self, ProjectConfig};
use crate::sync::{self, SyncReport, variable_prefix};
use crate::templates;
use anyhow::{Context, Result, anyhow};
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    App,
    Lib,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 2] = [ModuleKind::App, ModuleKind::Lib];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::App => "app",
            ModuleKind::Lib => "lib",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModuleKind::App => "Executable application",
            ModuleKind::Lib => "Static/shared library with public headers",
        }
    }
}

impl std::str::FromStr for ModuleKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "app" => Ok(ModuleKind::App),
            "lib" => Ok(ModuleKind::Lib),
            other => Err(anyhow!("Unknown module type '{}' (expected app or lib)", other)),
        }
    }
}

/// `package.json` written into every module.
#[derive(Serialize, Debug)]
struct ModuleManifest<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    description: String,
}

pub struct ModuleCreator {
    pub name: String,
    pub kind: ModuleKind,
    pub use_gtest: bool,
    pub project_root: PathBuf,
}

impl ModuleCreator {
    pub fn new(name: &str, kind: ModuleKind, use_gtest: bool, project_root: &Path) -> Self {
        Self {
            name: name.to_string(),
            kind,
            use_gtest,
            project_root: project_root.to_path_buf(),
        }
    }

    pub fn module_path(&self) -> PathBuf {
        self.project_root.join(self.kind.as_str()).join(&self.name)
    }

    fn folder_structure(&self) -> Vec<PathBuf> {
        let base = [".cmake", "docs", "resources", "test"]
            .iter()
            .map(PathBuf::from);
        let code: Vec<PathBuf> = match self.kind {
            ModuleKind::Lib => vec![
                Path::new("include").join(&self.name),
                Path::new("src").join(&self.name),
            ],
            ModuleKind::App => vec![PathBuf::from("include"), PathBuf::from("src")],
        };
        base.chain(code).collect()
    }

    /// Header and source paths relative to the module root.
    fn code_files(&self) -> (PathBuf, PathBuf) {
        match self.kind {
            ModuleKind::Lib => (
                Path::new("include")
                    .join(&self.name)
                    .join(format!("{}.h", self.name)),
                Path::new("src")
                    .join(&self.name)
                    .join(format!("{}.cpp", self.name)),
            ),
            ModuleKind::App => (
                Path::new("include").join(format!("{}.h", self.name)),
                Path::new("src").join("main.cpp"),
            ),
        }
    }

    /// Every starter file as (path relative to the module, contents).
    fn starter_files(&self, config: &ProjectConfig) -> Result<Vec<(PathBuf, String)>> {
        let name = self.name.as_str();
        let is_app = self.kind == ModuleKind::App;
        let prefix = variable_prefix(name);

        let manifest = ModuleManifest {
            name,
            version: "0.1.0",
            kind: self.kind.as_str(),
            description: format!("{} module of type {}", name, self.kind.as_str()),
        };

        let (header, source) = self.code_files();
        let header_include = sync::normalize_path(header.strip_prefix("include")?);
        let link_target = if is_app { None } else { Some(name) };

        Ok(vec![
            (
                PathBuf::from("package.json"),
                serde_json::to_string_pretty(&manifest)? + "\n",
            ),
            (
                PathBuf::from("README.md"),
                templates::readme(name, self.kind.as_str()),
            ),
            (
                PathBuf::from("LICENSE"),
                templates::license(
                    name,
                    config.organization_or_default(),
                    config.contact_email.as_deref(),
                ),
            ),
            (
                PathBuf::from("CMakeLists.txt"),
                templates::module_cmake_lists(name, &prefix, is_app),
            ),
            (header, templates::module_header(name)),
            (
                source,
                templates::module_source(name, &header_include, is_app),
            ),
            (
                Path::new("test").join("CMakeLists.txt"),
                templates::test_cmake_lists(
                    &format!("{}_test", name),
                    &prefix,
                    self.use_gtest,
                    link_target,
                ),
            ),
            (
                Path::new("test").join("test_main.cpp"),
                templates::test_main(name, self.use_gtest),
            ),
            (
                Path::new("docs").join("Doxyfile"),
                templates::doxyfile(name),
            ),
        ])
    }

    /// Scaffolds the module, synchronizes it, and adds it to the parent build.
    pub fn create(&self) -> Result<SyncReport> {
        project::validate_module_name(&self.name)?;

        let module_path = self.module_path();
        if module_path.exists() {
            return Err(anyhow!(
                "Module '{}' already exists at {}",
                self.name,
                module_path.display()
            ));
        }

        let config = ProjectConfig::load(&self.project_root)?;

        for folder in self.folder_structure() {
            let dir = module_path.join(folder);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        for (relative, content) in self.starter_files(&config)? {
            let path = module_path.join(&relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "   {} Created {}",
                "+".green(),
                sync::normalize_path(&relative)
            );
        }

        let report = sync::synchronize(&module_path)
            .with_context(|| format!("Failed to synchronize module '{}'", self.name))?;

        let parent_cmake = self
            .project_root
            .join(self.kind.as_str())
            .join("CMakeLists.txt");
        sync::append_line_if_missing(
            &DiskFs,
            &parent_cmake,
            &format!("add_subdirectory({})", self.name),
        )
        .with_context(|| format!("Failed to update {}", parent_cmake.display()))?;

        Ok(report)
    }
}
