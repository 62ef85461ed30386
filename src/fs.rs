//! File access used by the synchronization engine.
//!
//! The engine never touches `std::fs` directly. It goes through the
//! [`FileSystem`] trait so the same code can run against the real disk
//! ([`DiskFs`]) or an in-memory tree ([`MemoryFs`]) in tests.

use crate::error::{SyncError, SyncResult};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub trait FileSystem {
    /// Every regular file below `root`, at any depth.
    ///
    /// A missing or unreadable `root` yields an empty list.
    fn list_files(&self, root: &Path) -> Vec<PathBuf>;

    fn exists(&self, path: &Path) -> bool;

    /// Reads a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SyncResult<String>;

    /// Replaces `path` with `contents`.
    ///
    /// Readers see either the old file or the complete new one, never a
    /// partial write.
    fn write(&self, path: &Path, contents: &str) -> SyncResult<()>;

    /// Appends `contents` to an existing file.
    fn append(&self, path: &Path, contents: &str) -> SyncResult<()>;

    fn create_dir_all(&self, path: &Path) -> SyncResult<()>;
}

/// Real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            return Vec::new();
        }
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            // symlinked files count, symlinked directories are not descended
            .filter(|e| e.file_type().is_file() || e.path().is_file())
            .map(|e| e.into_path())
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> SyncResult<String> {
        let bytes = fs::read(path).map_err(|e| SyncError::io(path, e))?;
        String::from_utf8(bytes).map_err(|_| SyncError::Encoding {
            path: path.to_path_buf(),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> SyncResult<()> {
        let tmp = staging_path(path);
        if let Err(e) = fs::write(&tmp, contents) {
            let _ = fs::remove_file(&tmp);
            return Err(SyncError::io(path, e));
        }
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            SyncError::io(path, e)
        })
    }

    fn append(&self, path: &Path, contents: &str) -> SyncResult<()> {
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| SyncError::io(path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| SyncError::io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> SyncResult<()> {
        fs::create_dir_all(path).map_err(|e| SyncError::io(path, e))
    }
}

/// Sibling of `path` that a new version is written to before the rename.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// In-memory filesystem for tests and dry runs.
///
/// Writes require the parent directory to exist, mirroring the disk.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_only: Cell<bool>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, creating its parent directories.
    pub fn insert(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.into());
    }

    /// Raw bytes of a file, if present.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn get_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.get(path).and_then(|b| String::from_utf8(b).ok())
    }

    /// Makes every subsequent mutation fail with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.dirs.borrow().contains(path)
    }

    fn check_writable(&self, path: &Path) -> SyncResult<()> {
        if self.read_only.get() {
            return Err(SyncError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only filesystem"),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        self.files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> SyncResult<String> {
        let bytes = self.get(path).ok_or_else(|| {
            SyncError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })?;
        String::from_utf8(bytes).map_err(|_| SyncError::Encoding {
            path: path.to_path_buf(),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> SyncResult<()> {
        self.check_writable(path)?;
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.is_dir(parent) {
            return Err(SyncError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> SyncResult<()> {
        self.check_writable(path)?;
        let mut files = self.files.borrow_mut();
        let existing = files.get_mut(path).ok_or_else(|| {
            SyncError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })?;
        existing.extend_from_slice(contents.as_bytes());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> SyncResult<()> {
        self.check_writable(path)?;
        self.add_dirs(path);
        Ok(())
    }
}
