//! # vpm CLI Entry Point
//!
//! Parses CLI arguments using clap and routes commands to the handlers in
//! [`vpm::commands`].
//!
//! ## Command Structure
//!
//! - **Sources**: `sync`, `modules`
//! - **Scaffolding**: `module new`, `module types`, `source new`, `source templates`
//! - **Shell**: `completion`

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use vpm::commands;

#[derive(Parser)]
#[command(name = "vpm")]
#[command(about = "CMake/vcpkg C++ project toolkit", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate a module's .cmake source lists
    Sync {
        /// Module directory (defaults to the current directory)
        path: Option<PathBuf>,
        /// Synchronize every module under app/ and lib/
        #[arg(long)]
        all: bool,
        /// List every file written to the source lists
        #[arg(short, long)]
        verbose: bool,
    },
    /// List all modules in the project
    Modules,
    /// Create modules
    Module {
        #[command(subcommand)]
        op: ModuleOp,
    },
    /// Create source files from templates
    Source {
        #[command(subcommand)]
        op: SourceOp,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

#[derive(Subcommand)]
enum ModuleOp {
    /// Create a new module (interactive if NAME is omitted)
    New {
        /// Module name
        name: Option<String>,
        /// Module type (app or lib) [default: lib]
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Include Google Test support (default)
        #[arg(long, overrides_with = "no_gtest")]
        gtest: bool,
        /// Generate a plain test runner without Google Test
        #[arg(long)]
        no_gtest: bool,
    },
    /// List available module types
    Types,
}

#[derive(Subcommand)]
enum SourceOp {
    /// Create new source files from a template
    New {
        /// Template (class, gtest, gtest_fixture, gtest_parametrized, qrc)
        #[arg(short = 't', long = "type")]
        template: Option<String>,
        /// Name for the new file/class
        #[arg(short, long)]
        name: Option<String>,
        /// C++ namespace, e.g. net::http
        #[arg(long, default_value = "")]
        namespace: String,
        /// Module directory to create the files in
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// List available template types
    Templates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Sync { path, all, verbose } => {
            commands::sync::handle_sync(path.as_deref(), *all, *verbose)
        }

        Commands::Modules => commands::sync::handle_list_modules(),

        Commands::Module { op } => {
            let local_op = match op {
                ModuleOp::New {
                    name,
                    kind,
                    gtest: _,
                    no_gtest,
                } => commands::module::ModuleOp::New {
                    name: name.clone(),
                    // Only prompt for the type when the name is prompted too.
                    kind: kind
                        .clone()
                        .or_else(|| name.as_ref().map(|_| "lib".to_string())),
                    use_gtest: !*no_gtest,
                },
                ModuleOp::Types => commands::module::ModuleOp::Types,
            };
            commands::module::handle_module_command(&local_op)
        }

        Commands::Source { op } => {
            let local_op = match op {
                SourceOp::New {
                    template,
                    name,
                    namespace,
                    output_dir,
                } => commands::source::SourceOp::New {
                    template: template.clone(),
                    name: name.clone(),
                    namespace: namespace.clone(),
                    output_dir: output_dir.clone(),
                },
                SourceOp::Templates => commands::source::SourceOp::Templates,
            };
            commands::source::handle_source_command(&local_op)
        }

        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}
