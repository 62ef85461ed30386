//! Source command handler
//!
//! Handles `vpm source new` and `vpm source templates`.

use crate::source::{self, SourceTemplate};
use crate::sync;
use anyhow::{Context, Result};
use colored::*;
use inquire::{Select, Text};
use std::path::{Path, PathBuf};

/// Source subcommand operations
#[derive(Clone, Debug)]
pub enum SourceOp {
    /// Create files from a template inside a module
    New {
        template: Option<String>,
        name: Option<String>,
        namespace: String,
        output_dir: PathBuf,
    },
    /// List template types
    Templates,
}

pub fn handle_source_command(op: &SourceOp) -> Result<()> {
    match op {
        SourceOp::New {
            template,
            name,
            namespace,
            output_dir,
        } => create_source(template.as_deref(), name.as_deref(), namespace, output_dir),
        SourceOp::Templates => {
            print_templates();
            Ok(())
        }
    }
}

fn create_source(
    template: Option<&str>,
    name: Option<&str>,
    namespace: &str,
    output_dir: &Path,
) -> Result<()> {
    let template: SourceTemplate = match template {
        Some(t) => t.parse()?,
        None => {
            let keys: Vec<&str> = SourceTemplate::ALL.iter().map(|t| t.key()).collect();
            Select::new("Template type:", keys).prompt()?.parse()?
        }
    };
    let name = match name {
        Some(n) => n.to_string(),
        None => Text::new("Name for the new file/class?").prompt()?,
    };

    println!(
        "{} Creating {} files...",
        "⚡".yellow(),
        template.description()
    );
    source::create_source(template, &name, namespace, output_dir)?;

    // Files exist at this point; a failed list update is only a warning.
    println!("{} Updating CMake files...", "⚙️".cyan());
    let module_path = std::fs::canonicalize(output_dir)
        .with_context(|| format!("Failed to resolve {}", output_dir.display()))?;
    match sync::synchronize(&module_path) {
        Ok(report) => println!(
            "{} CMake files updated for module '{}'",
            "✓".green(),
            report.module_name
        ),
        Err(e) => println!(
            "{} Warning: Failed to update CMake files: {}",
            "!".yellow(),
            e
        ),
    }
    Ok(())
}

fn print_templates() {
    println!("{} {}", "📝".cyan(), "Available template types".bold());
    for template in SourceTemplate::ALL {
        println!("   {} - {}", template.key().green(), template.description());
    }
}
