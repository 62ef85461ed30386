//! CLI command handlers
//!
//! Each handler prints its own progress and returns an `anyhow` error for
//! `main` to report.

pub mod module;
pub mod source;
pub mod sync;
