//! Source-list synchronization.
//!
//! Scans a module's `include/`, `src/`, `test/` and `resources/` folders and
//! regenerates `.cmake/<name>_sources.cmake`, then makes sure that file is
//! included once from `.cmake/sources.cmake`.
//!
//! ```text
//! lib/foo/
//! ├── .cmake/
//! │   ├── foo_sources.cmake   <- rewritten on every sync
//! │   └── sources.cmake       <- append-only
//! ├── include/foo/a.h
//! └── src/a.cpp
//! ```

mod category;
mod registrar;
mod scanner;
mod writer;

pub use category::{Category, PathBase, variable_prefix};
pub use registrar::{aggregate_file_path, append_line_if_missing, include_directive, register};
pub use scanner::{FileScanner, normalize_path, sorted_unique};
pub use writer::{CMAKE_DIR, ModuleFiles, list_file_path, render, write_list_file};

use crate::error::{SyncError, SyncResult};
use crate::fs::{DiskFs, FileSystem};
use std::path::{Path, PathBuf};

/// Outcome of one synchronization, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub module_name: String,
    pub files: ModuleFiles,
    pub list_file: PathBuf,
    pub aggregate_file: PathBuf,
    /// Whether the include line had to be added
    pub registered: bool,
}

pub struct Synchronizer<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> Synchronizer<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn scan(&self, module_root: &Path) -> ModuleFiles {
        let scanner = FileScanner::new(self.fs, module_root);
        let mut files = ModuleFiles::default();
        for category in Category::ALL {
            *files.get_mut(category) = scanner.scan_category(category);
        }
        files
    }

    /// Scans the module, rewrites its list file and registers it.
    pub fn synchronize(&self, module_root: &Path) -> SyncResult<SyncReport> {
        let module_name = module_name_of(module_root)?;
        let files = self.scan(module_root);
        let list_file = write_list_file(self.fs, module_root, &module_name, &files)?;
        let registered = register(self.fs, module_root, &module_name)?;

        Ok(SyncReport {
            aggregate_file: aggregate_file_path(module_root),
            module_name,
            files,
            list_file,
            registered,
        })
    }
}

/// Synchronizes a module on the real filesystem.
pub fn synchronize(module_root: &Path) -> SyncResult<SyncReport> {
    Synchronizer::new(&DiskFs).synchronize(module_root)
}

/// The module name is the last component of its root directory.
pub fn module_name_of(module_root: &Path) -> SyncResult<String> {
    module_root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            SyncError::InvalidModule(format!(
                "cannot derive a module name from '{}'",
                module_root.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    fn foo_module() -> MemoryFs {
        let fs = MemoryFs::new();
        fs.insert("lib/foo/include/foo/a.h", "#pragma once\n");
        fs.insert("lib/foo/src/a.cpp", "");
        fs.insert("lib/foo/src/b.cpp", "");
        fs
    }

    #[test]
    fn test_end_to_end() {
        let fs = foo_module();
        let report = Synchronizer::new(&fs)
            .synchronize(Path::new("lib/foo"))
            .unwrap();

        assert_eq!(report.module_name, "foo");
        assert_eq!(report.files.headers, vec!["include/foo/a.h"]);
        assert_eq!(report.files.sources, vec!["src/a.cpp", "src/b.cpp"]);
        assert!(report.files.test_sources.is_empty());
        assert!(report.files.resources.is_empty());
        assert!(report.registered);

        let list = fs.get_string("lib/foo/.cmake/foo_sources.cmake").unwrap();
        assert!(list.starts_with("set(FOO_HEADERS\n    include/foo/a.h\n)\n"));
        assert!(list.contains("set(FOO_TEST_SOURCES\n)\n"));
        assert!(list.ends_with("set(FOO_RESOURCES\n)\n"));

        assert_eq!(
            fs.get_string("lib/foo/.cmake/sources.cmake").unwrap(),
            "include(${CMAKE_CURRENT_LIST_DIR}/foo_sources.cmake)\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let fs = foo_module();
        let sync = Synchronizer::new(&fs);
        let root = Path::new("lib/foo");

        sync.synchronize(root).unwrap();
        let list_first = fs.get("lib/foo/.cmake/foo_sources.cmake").unwrap();
        let aggregate_first = fs.get("lib/foo/.cmake/sources.cmake").unwrap();

        let second = sync.synchronize(root).unwrap();
        assert!(!second.registered);
        assert_eq!(fs.get("lib/foo/.cmake/foo_sources.cmake").unwrap(), list_first);
        assert_eq!(fs.get("lib/foo/.cmake/sources.cmake").unwrap(), aggregate_first);
    }

    #[test]
    fn test_each_category_uses_its_own_rules() {
        let fs = foo_module();
        fs.insert("lib/foo/resources/app.qrc", "");
        fs.insert("lib/foo/test/CMakeLists.txt", "");
        fs.insert("lib/foo/test/foo_test.cpp", "");
        let report = Synchronizer::new(&fs)
            .synchronize(Path::new("lib/foo"))
            .unwrap();
        assert_eq!(report.files.resources, vec!["resources/app.qrc"]);
        assert_eq!(report.files.test_sources, vec!["foo_test.cpp"]);
    }

    #[test]
    fn test_new_file_picked_up_on_resync() {
        let fs = foo_module();
        let sync = Synchronizer::new(&fs);
        sync.synchronize(Path::new("lib/foo")).unwrap();

        fs.insert("lib/foo/src/0_first.cpp", "");
        let report = sync.synchronize(Path::new("lib/foo")).unwrap();
        assert_eq!(report.files.sources[0], "src/0_first.cpp");
        let list = fs.get_string("lib/foo/.cmake/foo_sources.cmake").unwrap();
        assert!(list.contains("    src/0_first.cpp\n    src/a.cpp\n"));
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let fs = foo_module();
        fs.set_read_only(true);
        assert!(Synchronizer::new(&fs).synchronize(Path::new("lib/foo")).is_err());
    }

    #[test]
    fn test_module_name_of() {
        assert_eq!(module_name_of(Path::new("lib/foo/")).unwrap(), "foo");
        assert_eq!(module_name_of(Path::new("app")).unwrap(), "app");
        assert!(matches!(
            module_name_of(Path::new("/")),
            Err(SyncError::InvalidModule(_))
        ));
    }
}
