use super::category::{Category, PathBase};
use crate::fs::FileSystem;
use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Finds a module's files by extension and returns them as sorted,
/// deduplicated, `/`-separated relative paths.
pub struct FileScanner<'a> {
    fs: &'a dyn FileSystem,
    module_root: &'a Path,
}

impl<'a> FileScanner<'a> {
    pub fn new(fs: &'a dyn FileSystem, module_root: &'a Path) -> Self {
        Self { fs, module_root }
    }

    pub fn scan_category(&self, category: Category) -> Vec<String> {
        self.scan(
            category.extensions(),
            category.subfolder(),
            category.base() == PathBase::Module,
        )
    }

    /// Scans `<module_root>/<subfolder>` recursively.
    ///
    /// Paths are relative to the module root when `relative_to_module` is
    /// set, otherwise to the subfolder. A missing subfolder yields nothing.
    pub fn scan(
        &self,
        extensions: &[&str],
        subfolder: &str,
        relative_to_module: bool,
    ) -> Vec<String> {
        let folder = self.module_root.join(subfolder);
        let base = if relative_to_module {
            self.module_root
        } else {
            folder.as_path()
        };

        let matched = self.fs.list_files(&folder).into_iter().filter_map(|file| {
            let inside = file.strip_prefix(&folder).ok()?;
            if is_hidden(inside) || !matches_extension(inside, extensions) {
                return None;
            }
            let relative = file.strip_prefix(base).ok()?;
            Some(normalize_path(relative))
        });

        sorted_unique(matched)
    }
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext))
}

// Dotfiles and dot-directories (.DS_Store, .cache/...) are never build inputs.
fn is_hidden(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(part) => part.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Renders a relative path with `/` separators on every host.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Deduplicates and sorts paths by plain string comparison.
pub fn sorted_unique<I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    paths
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{DiskFs, MemoryFs};
    use std::fs;

    #[test]
    fn test_sort_order() {
        let input = ["b.h", "a.h", "c/d.h"].map(String::from);
        assert_eq!(sorted_unique(input), vec!["a.h", "b.h", "c/d.h"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let input = ["x.hpp", "x.hpp", "a.h"].map(String::from);
        assert_eq!(sorted_unique(input), vec!["a.h", "x.hpp"]);
    }

    #[test]
    fn test_backslashes_normalized() {
        let fs = MemoryFs::new();
        fs.insert("mod/include/foo\\bar.h", "");
        let root = Path::new("mod");
        let scanner = FileScanner::new(&fs, root);
        assert_eq!(scanner.scan(&[".h"], "include", false), vec!["foo/bar.h"]);
        assert_eq!(normalize_path(Path::new("a\\b\\c.h")), "a/b/c.h");
    }

    #[test]
    fn test_relative_base_selection() {
        let fs = MemoryFs::new();
        fs.insert("lib/foo/test/unit/a_test.cpp", "");
        let scanner = FileScanner::new(&fs, Path::new("lib/foo"));

        assert_eq!(
            scanner.scan(&[".cpp"], "test", true),
            vec!["test/unit/a_test.cpp"]
        );
        assert_eq!(
            scanner.scan_category(Category::TestSources),
            vec!["unit/a_test.cpp"]
        );
    }

    #[test]
    fn test_missing_folder_is_empty() {
        let fs = MemoryFs::new();
        let scanner = FileScanner::new(&fs, Path::new("lib/foo"));
        assert!(scanner.scan_category(Category::Resources).is_empty());
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let fs = MemoryFs::new();
        fs.insert("m/src/a.CPP", "");
        fs.insert("m/src/b.cpp", "");
        fs.insert("m/src/notes.cpp.bak", "");
        let scanner = FileScanner::new(&fs, Path::new("m"));
        assert_eq!(scanner.scan_category(Category::Sources), vec!["src/b.cpp"]);
    }

    #[test]
    fn test_overlapping_extensions_do_not_duplicate() {
        let fs = MemoryFs::new();
        fs.insert("m/include/a.hpp", "");
        let scanner = FileScanner::new(&fs, Path::new("m"));
        assert_eq!(
            scanner.scan(&[".hpp", "pp", ".hpp"], "include", true),
            vec!["include/a.hpp"]
        );
    }

    #[test]
    fn test_hidden_entries_skipped() {
        let fs = MemoryFs::new();
        fs.insert("m/resources/.DS_Store.txt", "");
        fs.insert("m/resources/.cache/x.json", "");
        fs.insert("m/resources/icons/app.png", "");
        let scanner = FileScanner::new(&fs, Path::new("m"));
        assert_eq!(
            scanner.scan_category(Category::Resources),
            vec!["resources/icons/app.png"]
        );
    }

    #[test]
    fn test_disk_scan_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for name in ["z.cpp", "a.cpp", "m/n.cc", "m/a.c", "b.mm"] {
            let path = root.join("src").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }

        let scanner = FileScanner::new(&DiskFs, root);
        let first = scanner.scan_category(Category::Sources);
        let second = scanner.scan_category(Category::Sources);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec!["src/a.cpp", "src/b.mm", "src/m/a.c", "src/m/n.cc", "src/z.cpp"]
        );
    }
}
