//! The four file categories a module owns and where each one is scanned.

/// Which directory a scanned path is made relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathBase {
    /// The module root, e.g. `include/foo/a.h`
    Module,
    /// The scanned subfolder itself, e.g. `foo_test.cpp` for `test/foo_test.cpp`
    Subfolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Headers,
    Sources,
    TestSources,
    Resources,
}

pub const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp"];

pub const SOURCE_EXTENSIONS: &[&str] = &[".cpp", ".c", ".cc", ".cxx", ".mm"];

pub const TEST_SOURCE_EXTENSIONS: &[&str] = &[".cpp", ".h", ".hpp"];

pub const RESOURCE_EXTENSIONS: &[&str] = &[
    ".qrc", ".rc", ".ui", ".json", ".xml", ".txt", ".md", ".yaml", ".yml", ".ini", ".conf",
    ".cfg", ".properties", ".csv", ".svg", ".png", ".jpg", ".jpeg", ".gif", ".vtk", ".stl",
    ".qml",
];

impl Category {
    /// Fixed order used both for scanning and for the generated file.
    pub const ALL: [Category; 4] = [
        Category::Headers,
        Category::Sources,
        Category::TestSources,
        Category::Resources,
    ];

    pub fn subfolder(self) -> &'static str {
        match self {
            Category::Headers => "include",
            Category::Sources => "src",
            Category::TestSources => "test",
            Category::Resources => "resources",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Category::Headers => HEADER_EXTENSIONS,
            Category::Sources => SOURCE_EXTENSIONS,
            Category::TestSources => TEST_SOURCE_EXTENSIONS,
            Category::Resources => RESOURCE_EXTENSIONS,
        }
    }

    // Test sources are consumed by test/CMakeLists.txt, hence the different base.
    pub fn base(self) -> PathBase {
        match self {
            Category::TestSources => PathBase::Subfolder,
            _ => PathBase::Module,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Category::Headers => "_HEADERS",
            Category::Sources => "_SOURCES",
            Category::TestSources => "_TEST_SOURCES",
            Category::Resources => "_RESOURCES",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Headers => "headers",
            Category::Sources => "sources",
            Category::TestSources => "test sources",
            Category::Resources => "resources",
        }
    }

    /// CMake variable name for this category, e.g. `MY_LIB_HEADERS`.
    pub fn variable_name(self, module_name: &str) -> String {
        format!("{}{}", variable_prefix(module_name), self.suffix())
    }
}

/// Uppercased module name with `-` and spaces turned into `_`.
pub fn variable_prefix(module_name: &str) -> String {
    module_name.to_uppercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names() {
        assert_eq!(Category::Headers.variable_name("foo"), "FOO_HEADERS");
        assert_eq!(
            Category::TestSources.variable_name("my-lib core"),
            "MY_LIB_CORE_TEST_SOURCES"
        );
        assert_eq!(Category::Resources.variable_name("Gui"), "GUI_RESOURCES");
    }

    #[test]
    fn test_only_tests_use_subfolder_base() {
        for cat in Category::ALL {
            let expected = if cat == Category::TestSources {
                PathBase::Subfolder
            } else {
                PathBase::Module
            };
            assert_eq!(cat.base(), expected);
        }
    }

    #[test]
    fn test_extensions_start_with_dot() {
        for cat in Category::ALL {
            assert!(!cat.extensions().is_empty());
            assert!(cat.extensions().iter().all(|e| e.starts_with('.')));
        }
    }
}
