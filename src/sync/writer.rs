use super::category::Category;
use crate::error::SyncResult;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// Directory inside every module that holds generated CMake files.
pub const CMAKE_DIR: &str = ".cmake";

/// Scanned file lists for one module, one per [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFiles {
    pub headers: Vec<String>,
    pub sources: Vec<String>,
    pub test_sources: Vec<String>,
    pub resources: Vec<String>,
}

impl ModuleFiles {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Headers => &self.headers,
            Category::Sources => &self.sources,
            Category::TestSources => &self.test_sources,
            Category::Resources => &self.resources,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Headers => &mut self.headers,
            Category::Sources => &mut self.sources,
            Category::TestSources => &mut self.test_sources,
            Category::Resources => &mut self.resources,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// `<module>/.cmake/<module_name>_sources.cmake`
pub fn list_file_path(module_root: &Path, module_name: &str) -> PathBuf {
    module_root
        .join(CMAKE_DIR)
        .join(format!("{}_sources.cmake", module_name))
}

/// Renders the four `set(...)` blocks in category order.
pub fn render(module_name: &str, files: &ModuleFiles) -> String {
    let blocks: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            let mut block = format!("set({}\n", category.variable_name(module_name));
            for entry in files.get(*category) {
                block.push_str("    ");
                block.push_str(entry);
                block.push('\n');
            }
            block.push_str(")\n");
            block
        })
        .collect();
    blocks.join("\n")
}

/// Regenerates the module's list file from scratch.
pub fn write_list_file(
    fs: &dyn FileSystem,
    module_root: &Path,
    module_name: &str,
    files: &ModuleFiles,
) -> SyncResult<PathBuf> {
    let path = list_file_path(module_root, module_name);
    fs.create_dir_all(&module_root.join(CMAKE_DIR))?;
    fs.write(&path, &render(module_name, files))?;
    Ok(path)
}
