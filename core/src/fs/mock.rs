//! In-memory filesystem for testing.
//!
//! Keeps a set of directories and a map of file contents, and can be told
//! to fail listing or removal of specific paths, making error handling in
//! the cleanup code deterministic to test.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::{has_extension, FileSystem};

/// A test-double that stores the tree in memory.
#[derive(Debug, Default)]
pub struct MockFs {
    /// Known directories.
    pub dirs: BTreeSet<PathBuf>,
    /// Known files and their contents.
    pub files: BTreeMap<PathBuf, String>,
    /// Files whose removal fails with `PermissionDenied`.
    pub protected: BTreeSet<PathBuf>,
    /// Files whose removal fails with `ErrorKind::Other`.
    pub failing: BTreeSet<PathBuf>,
    /// Directories whose listing fails with `PermissionDenied`.
    pub unreadable: BTreeSet<PathBuf>,
    /// Directories whose listing fails with `ErrorKind::Other`.
    pub broken: BTreeSet<PathBuf>,
}

impl MockFs {
    pub fn new() -> Self {
        MockFs::default()
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.files.insert(path, content.to_string());
    }

    /// Make removal of `path` fail with `PermissionDenied`.
    pub fn protect(&mut self, path: impl Into<PathBuf>) {
        self.protected.insert(path.into());
    }

    /// Make removal of `path` fail with `ErrorKind::Other`.
    pub fn fail_removal(&mut self, path: impl Into<PathBuf>) {
        self.failing.insert(path.into());
    }

    /// Make listing `dir` fail with `PermissionDenied`.
    pub fn deny_listing(&mut self, dir: impl Into<PathBuf>) {
        self.unreadable.insert(dir.into());
    }

    /// Make listing `dir` fail with `ErrorKind::Other`.
    pub fn fail_listing(&mut self, dir: impl Into<PathBuf>) {
        self.broken.insert(dir.into());
    }

    /// Contents of the file at `path`, if present.
    pub fn read(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(|s| s.as_str())
    }

    fn add_dirs(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MockFs {
    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        if self.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("mock: {} is a file", path.display()),
            ));
        }
        self.add_dirs(path);
        Ok(())
    }

    fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.dirs.contains(parent) => {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("mock: no directory {}", parent.display()),
                ))
            }
            _ => {
                self.files.insert(path.to_path_buf(), content.to_string());
                Ok(())
            }
        }
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        if self.protected.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("mock: {} is protected", path.display()),
            ));
        }
        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("mock: {} is busy", path.display()),
            ));
        }
        self.files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("mock: no file {}", path.display()),
                )
            })
    }

    fn list_files_recursively(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        if !self.dirs.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock: no directory {}", dir.display()),
            ));
        }
        if self.unreadable.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("mock: {} is unreadable", dir.display()),
            ));
        }
        if self.broken.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("mock: {} is broken", dir.display()),
            ));
        }
        Ok(self
            .files
            .keys()
            .filter(|p| p.starts_with(dir) && has_extension(p, extension))
            .cloned()
            .collect())
    }
}
