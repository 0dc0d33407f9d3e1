//! Filesystem backends for scaffolding and cleanup.
//!
//! Provides the `FileSystem` trait and implementations for the local disk
//! (production) and an in-memory tree (testing).

pub mod local;
pub mod mock;

use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operations the housekeeping helpers need.
pub trait FileSystem {
    /// True if `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// True if `path` exists and is a regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `content` into it.
    fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()>;

    /// Delete the file at `path`.
    fn remove_file(&mut self, path: &Path) -> io::Result<()>;

    /// All files under `dir` (at any depth) whose extension equals
    /// `extension`, without the leading dot. Sorted.
    fn list_files_recursively(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}

/// True if `path` has exactly the given extension.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().map(|e| e == extension).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::local::LocalFs;
    use super::mock::MockFs;

    #[test]
    fn backends_implement_file_system() {
        let local = LocalFs;
        let mock = MockFs::new();
        let _: &dyn FileSystem = &local;
        let _: &dyn FileSystem = &mock;
    }

    #[test]
    fn has_extension_matches_exactly() {
        assert!(has_extension(Path::new("/a/b.pyc"), "pyc"));
        assert!(!has_extension(Path::new("/a/b.pyc"), "py"));
        assert!(!has_extension(Path::new("/a/pyc"), "pyc"));
        assert!(!has_extension(Path::new("/a/b.pyc.bak"), "pyc"));
    }
}
