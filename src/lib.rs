//! # vpm - CMake/vcpkg C++ project toolkit
//!
//! vpm keeps the CMake side of a C++ repository in step with the files on
//! disk. Every module (`app/<name>` or `lib/<name>`) gets a generated
//! `.cmake/<name>_sources.cmake` listing its headers, sources, test sources
//! and resources, so `CMakeLists.txt` never has to be edited by hand when a
//! file is added.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scaffold a library module
//! vpm module new netcore --type lib
//!
//! # Add a class and refresh the source lists
//! vpm source new --type class --name HttpClient --output-dir lib/netcore
//!
//! # Re-scan after editing files by hand
//! vpm sync lib/netcore
//! ```
//!
//! ## Module Organization
//!
//! - [`sync`] - Source-list scanning and generation
//! - [`fs`] - File access used by [`sync`]
//! - [`module`] - Module scaffolding
//! - [`source`] - Class/test/resource file generation
//! - [`commands`] - CLI command handlers

/// CLI command handlers extracted from main.
pub mod commands;

/// Synchronization error type.
pub mod error;

/// Filesystem abstraction (disk and in-memory).
pub mod fs;

/// Module scaffolding (`vpm module new`).
pub mod module;

/// Project root discovery, `project.json`, module listing.
pub mod project;

/// Source file generation (`vpm source new`).
pub mod source;

/// Source-list synchronization engine.
pub mod sync;

/// Built-in file templates.
pub mod templates;

/// Terminal UI utilities (tables, reports).
pub mod ui;

pub use error::{SyncError, SyncResult};
