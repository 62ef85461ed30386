use super::writer::CMAKE_DIR;
use crate::error::SyncResult;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// File name of the per-module aggregate include file.
pub const AGGREGATE_FILE: &str = "sources.cmake";

/// `<module>/.cmake/sources.cmake`
pub fn aggregate_file_path(module_root: &Path) -> PathBuf {
    module_root.join(CMAKE_DIR).join(AGGREGATE_FILE)
}

/// Include line pointing at the generated list file, relative to the
/// including file's own directory.
pub fn include_directive(module_name: &str) -> String {
    format!(
        "include(${{CMAKE_CURRENT_LIST_DIR}}/{}_sources.cmake)",
        module_name
    )
}

/// Makes sure the module's list file is included from the aggregate file.
///
/// Returns `true` when the aggregate file was created or appended to.
pub fn register(fs: &dyn FileSystem, module_root: &Path, module_name: &str) -> SyncResult<bool> {
    let path = aggregate_file_path(module_root);
    fs.create_dir_all(&module_root.join(CMAKE_DIR))?;
    append_line_if_missing(fs, &path, &include_directive(module_name))
}

/// Appends `line` to `path` unless the file already contains it.
///
/// A missing file is created holding just that line. Existing content is
/// never rewritten or reordered.
pub fn append_line_if_missing(fs: &dyn FileSystem, path: &Path, line: &str) -> SyncResult<bool> {
    if !fs.exists(path) {
        fs.write(path, &format!("{}\n", line))?;
        return Ok(true);
    }

    let content = fs.read_to_string(path)?;
    if content.contains(line) {
        return Ok(false);
    }

    let mut addition = String::new();
    if !content.is_empty() && !content.ends_with('\n') {
        addition.push('\n');
    }
    addition.push_str(line);
    addition.push('\n');
    fs.append(path, &addition)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::fs::MemoryFs;

    const FOO_LINE: &str = "include(${CMAKE_CURRENT_LIST_DIR}/foo_sources.cmake)";

    #[test]
    fn test_directive_text() {
        assert_eq!(include_directive("foo"), FOO_LINE);
    }

    #[test]
    fn test_creates_missing_file() {
        let fs = MemoryFs::new();
        assert!(register(&fs, Path::new("lib/foo"), "foo").unwrap());
        assert_eq!(
            fs.get_string("lib/foo/.cmake/sources.cmake").unwrap(),
            format!("{FOO_LINE}\n")
        );
    }

    #[test]
    fn test_preserves_custom_content() {
        let fs = MemoryFs::new();
        fs.insert("lib/foo/.cmake/sources.cmake", "# custom\n");

        assert!(register(&fs, Path::new("lib/foo"), "foo").unwrap());
        let after_first = fs.get_string("lib/foo/.cmake/sources.cmake").unwrap();
        assert_eq!(after_first, format!("# custom\n{FOO_LINE}\n"));

        assert!(!register(&fs, Path::new("lib/foo"), "foo").unwrap());
        assert_eq!(
            fs.get_string("lib/foo/.cmake/sources.cmake").unwrap(),
            after_first
        );
    }

    #[test]
    fn test_missing_trailing_newline_gets_one() {
        let fs = MemoryFs::new();
        fs.insert("m/.cmake/sources.cmake", "# custom");
        register(&fs, Path::new("m"), "foo").unwrap();
        assert_eq!(
            fs.get_string("m/.cmake/sources.cmake").unwrap(),
            format!("# custom\n{FOO_LINE}\n")
        );
    }

    #[test]
    fn test_other_modules_kept_in_order() {
        let fs = MemoryFs::new();
        register(&fs, Path::new("m"), "b").unwrap();
        register(&fs, Path::new("m"), "a").unwrap();
        register(&fs, Path::new("m"), "b").unwrap();
        let text = fs.get_string("m/.cmake/sources.cmake").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![include_directive("b"), include_directive("a")]);
    }

    #[test]
    fn test_binary_aggregate_is_encoding_error() {
        let fs = MemoryFs::new();
        fs.insert("m/.cmake/sources.cmake", vec![0xc3u8, 0x28]);
        let err = register(&fs, Path::new("m"), "m").unwrap_err();
        assert!(matches!(err, SyncError::Encoding { .. }));
    }
}
