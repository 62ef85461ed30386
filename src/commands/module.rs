//! Module command handler
//!
//! Handles `vpm module new` and `vpm module types`.

use crate::module::{ModuleCreator, ModuleKind};
use crate::project;
use crate::ui;
use anyhow::Result;
use colored::*;
use inquire::{Select, Text};

/// Module subcommand operations
#[derive(Clone, Debug)]
pub enum ModuleOp {
    /// Create a module; prompts for anything not given
    New {
        name: Option<String>,
        kind: Option<String>,
        use_gtest: bool,
    },
    /// List module types
    Types,
}

pub fn handle_module_command(op: &ModuleOp) -> Result<()> {
    match op {
        ModuleOp::New {
            name,
            kind,
            use_gtest,
        } => create_module(name.as_deref(), kind.as_deref(), *use_gtest),
        ModuleOp::Types => {
            print_module_types();
            Ok(())
        }
    }
}

fn create_module(name: Option<&str>, kind: Option<&str>, use_gtest: bool) -> Result<()> {
    let name = match name {
        Some(n) => n.to_string(),
        None => Text::new("Module name?").with_default("core").prompt()?,
    };
    let kind: ModuleKind = match kind {
        Some(k) => k.parse()?,
        None => {
            let options: Vec<&str> = ModuleKind::ALL.iter().map(|k| k.as_str()).collect();
            Select::new("Module type:", options).prompt()?.parse()?
        }
    };

    let cwd = std::env::current_dir()?;
    let root = project::find_project_root(&cwd);
    println!(
        "{} Creating {} module '{}'...",
        "⚡".yellow(),
        kind.as_str(),
        name.cyan()
    );

    let creator = ModuleCreator::new(&name, kind, use_gtest, &root);
    let report = creator.create()?;
    ui::print_sync_report(&report, false);
    println!(
        "{} Module '{}' of type '{}' created at {}",
        "✓".green(),
        name,
        kind.as_str(),
        creator.module_path().display()
    );
    Ok(())
}

fn print_module_types() {
    println!("{} {}", "📦".cyan(), "Available module types".bold());
    for kind in ModuleKind::ALL {
        println!("   {} - {}", kind.as_str().green(), kind.description());
    }
}
