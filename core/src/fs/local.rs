//! Local-disk `FileSystem` backed by `std::fs`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{has_extension, FileSystem};

/// Production backend operating on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn list_files_recursively(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        collect(dir, extension, &mut found)?;
        found.sort();
        Ok(found)
    }
}

fn collect(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        // Symlinked directories are not followed. Unreadable subdirectories
        // are skipped; only the top-level listing reports PermissionDenied.
        if file_type.is_dir() {
            match collect(&path, extension, found) {
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    warn!(path = %path.display(), "permission denied listing, skipping");
                }
                other => other?,
            }
        } else if has_extension(&path, extension) {
            found.push(path);
        }
    }
    Ok(())
}
