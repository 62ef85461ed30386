//! Source file generation for `vpm source new`.

use crate::project::{compose_namespace_path, to_pascal_case};
use crate::sync::normalize_path;
use crate::templates;
use anyhow::{Context, Result, anyhow};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTemplate {
    Class,
    Gtest,
    GtestFixture,
    GtestParametrized,
    Qrc,
}

impl SourceTemplate {
    pub const ALL: [SourceTemplate; 5] = [
        SourceTemplate::Class,
        SourceTemplate::Gtest,
        SourceTemplate::GtestFixture,
        SourceTemplate::GtestParametrized,
        SourceTemplate::Qrc,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SourceTemplate::Class => "class",
            SourceTemplate::Gtest => "gtest",
            SourceTemplate::GtestFixture => "gtest_fixture",
            SourceTemplate::GtestParametrized => "gtest_parametrized",
            SourceTemplate::Qrc => "qrc",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SourceTemplate::Class => "Standard C++ Class",
            SourceTemplate::Gtest => "Google Test",
            SourceTemplate::GtestFixture => "Google Test with Fixture",
            SourceTemplate::GtestParametrized => "Parametrized Google Test",
            SourceTemplate::Qrc => "Qt Resource File",
        }
    }
}

impl std::str::FromStr for SourceTemplate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SourceTemplate::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| anyhow!("Unknown template type '{}'", s))
    }
}

/// Renders `template` for `name` inside the module at `module_dir`.
///
/// Returns the created files. Existing files are never overwritten.
pub fn create_source(
    template: SourceTemplate,
    name: &str,
    namespace: &str,
    module_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if name.trim().is_empty() {
        return Err(anyhow!("A name is required"));
    }

    let class_name = to_pascal_case(name);
    let header_file = format!("{}.h", class_name);
    let header_include =
        normalize_path(&compose_namespace_path(Path::new(""), namespace).join(&header_file));

    let files: Vec<(PathBuf, String)> = match template {
        SourceTemplate::Class => vec![
            (
                compose_namespace_path(&module_dir.join("include"), namespace).join(&header_file),
                templates::class_header(&class_name, namespace),
            ),
            (
                compose_namespace_path(&module_dir.join("src"), namespace)
                    .join(format!("{}.cpp", class_name)),
                templates::class_source(&class_name, &header_include, namespace),
            ),
        ],
        SourceTemplate::Gtest
        | SourceTemplate::GtestFixture
        | SourceTemplate::GtestParametrized => {
            let render: fn(&str, &str, &str) -> String = match template {
                SourceTemplate::GtestFixture => templates::gtest_fixture,
                SourceTemplate::GtestParametrized => templates::gtest_parametrized,
                _ => templates::gtest_simple,
            };
            vec![(
                compose_namespace_path(&module_dir.join("test"), namespace)
                    .join(format!("{}Test.cpp", class_name)),
                render(&class_name, &header_include, namespace),
            )]
        }
        SourceTemplate::Qrc => vec![(
            module_dir
                .join("resources")
                .join(format!("{}.qrc", name.to_lowercase())),
            templates::qrc(name),
        )],
    };

    if let Some((existing, _)) = files.iter().find(|(path, _)| path.exists()) {
        return Err(anyhow!("{} already exists", existing.display()));
    }

    let mut created = Vec::new();
    for (path, content) in files {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("   {} Created {}", "+".green(), path.display());
        created.push(path);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_keys_roundtrip() {
        for template in SourceTemplate::ALL {
            assert_eq!(template.key().parse::<SourceTemplate>().unwrap(), template);
        }
        assert!("jinja".parse::<SourceTemplate>().is_err());
    }

    #[test]
    fn test_class_with_namespace() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let created =
            create_source(SourceTemplate::Class, "http_client", "net::http", dir.path())?;

        let header = dir.path().join("include/net/http/HttpClient.h");
        let source = dir.path().join("src/net/http/HttpClient.cpp");
        assert_eq!(created, vec![header.clone(), source.clone()]);
        assert!(fs::read_to_string(&header)?.contains("class HttpClient {"));
        assert!(fs::read_to_string(&source)?.contains("#include \"net/http/HttpClient.h\""));
        Ok(())
    }

    #[test]
    fn test_gtest_fixture_location() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let created = create_source(SourceTemplate::GtestFixture, "Parser", "", dir.path())?;
        assert_eq!(created, vec![dir.path().join("test/ParserTest.cpp")]);
        assert!(fs::read_to_string(&created[0])?.contains("TEST_F(ParserTestFixture"));
        Ok(())
    }

    #[test]
    fn test_qrc_lowercases_file_name() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let created = create_source(SourceTemplate::Qrc, "Icons", "", dir.path())?;
        assert_eq!(created, vec![dir.path().join("resources/icons.qrc")]);
        assert!(fs::read_to_string(&created[0])?.contains("prefix=\"/Icons\""));
        Ok(())
    }

    #[test]
    fn test_refuses_to_overwrite() -> Result<()> {
        let dir = tempfile::tempdir()?;
        create_source(SourceTemplate::Gtest, "Parser", "", dir.path())?;
        assert!(create_source(SourceTemplate::Gtest, "Parser", "", dir.path()).is_err());
        Ok(())
    }
}
