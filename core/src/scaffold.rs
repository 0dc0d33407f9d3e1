//! Package and module scaffolding.
//!
//! `create_package` lays out `<path>/<name>/__init__.py` and, unless the
//! package is itself the test package, a nested `tests` package. Existing
//! directories and files are never overwritten.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Settings;
use crate::errors::ScaffoldError;
use crate::fs::FileSystem;


/// Names used when laying out a package.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub init_module: String,
    pub test_package: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::from(&Settings::default())
    }
}

impl From<&Settings> for Layout {
    fn from(settings: &Settings) -> Self {
        Layout {
            init_module: settings.init_module.clone(),
            test_package: settings.test_package.clone(),
        }
    }
}


/// Create package `name` under `path` and return its root.
///
/// Does nothing to a package that already exists beyond filling in a
/// missing init module or test package.
pub fn create_package(
    fs: &mut dyn FileSystem,
    layout: &Layout,
    path: &Path,
    name: &str,
    create_tests: bool,
) -> Result<PathBuf, ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidArgument("package name is empty".into()));
    }

    let root = path.join(name);
    ensure_dir(fs, &root)?;
    create_module(fs, &root, &layout.init_module, None)?;

    if create_tests && name != layout.test_package {
        create_package(fs, layout, &root, &layout.test_package, false)?;
    }

    Ok(root)
}


/// Create module `name` in `path` with optional `content` and return its path.
///
/// An existing module is left untouched.
pub fn create_module(
    fs: &mut dyn FileSystem,
    path: &Path,
    name: &str,
    content: Option<&str>,
) -> Result<PathBuf, ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidArgument("module name is empty".into()));
    }

    ensure_dir(fs, path)?;

    let file = path.join(name);
    if !fs.file_exists(&file) {
        fs.write_file(&file, content.unwrap_or(""))
            .map_err(|source| ScaffoldError::Io { path: file.clone(), source })?;
        info!(path = %file.display(), "created module");
    }
    Ok(file)
}


fn ensure_dir(fs: &mut dyn FileSystem, dir: &Path) -> Result<(), ScaffoldError> {
    if fs.dir_exists(dir) {
        return Ok(());
    }
    fs.create_dir_all(dir)
        .map_err(|source| ScaffoldError::Io { path: dir.to_path_buf(), source })?;
    info!(path = %dir.display(), "created directory");
    Ok(())
}
