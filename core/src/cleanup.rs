//! Removal of compiled-artifact files (`.pyc`, `.pyo`, ...).

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::errors::CleanupError;
use crate::fs::FileSystem;


/// What a cleanup run did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanupReport {
    /// Files deleted, in visiting order.
    pub removed: Vec<PathBuf>,
    /// Files left behind, and search paths left unlisted, for lack of
    /// permission.
    pub skipped: Vec<PathBuf>,
    /// Search paths ignored because they are not directories.
    pub ignored: Vec<PathBuf>,
}


/// Recursively delete files with any of `extensions` under each of `paths`.
///
/// Paths that are not existing directories are ignored. Permission errors,
/// whether listing a search path or removing a file, are recorded in
/// `skipped` and the run continues; any other I/O error aborts it.
pub fn remove_compiled(
    fs: &mut dyn FileSystem,
    paths: &[PathBuf],
    extensions: &[String],
) -> Result<CleanupReport, CleanupError> {
    let mut report = CleanupReport::default();

    for dir in paths {
        if !fs.dir_exists(dir) {
            debug!(path = %dir.display(), "not a directory, ignoring");
            report.ignored.push(dir.clone());
            continue;
        }

        for ext in extensions {
            let files = match fs.list_files_recursively(dir, ext) {
                Ok(files) => files,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    warn!(path = %dir.display(), "permission denied listing, skipping");
                    report.skipped.push(dir.clone());
                    break;
                }
                Err(source) => return Err(CleanupError::Io { path: dir.clone(), source }),
            };
            for file in files {
                remove_one(fs, file, &mut report)?;
            }
        }
    }

    Ok(report)
}


fn remove_one(
    fs: &mut dyn FileSystem,
    file: PathBuf,
    report: &mut CleanupReport,
) -> Result<(), CleanupError> {
    // Already gone, e.g. listed under two overlapping search paths.
    if !fs.file_exists(&file) {
        return Ok(());
    }
    match fs.remove_file(&file) {
        Ok(()) => {
            info!(path = %file.display(), "removed");
            report.removed.push(file);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            warn!(path = %file.display(), "permission denied, skipping");
            report.skipped.push(file);
            Ok(())
        }
        Err(source) => Err(CleanupError::Io { path: file, source }),
    }
}


/// Directories to clean when none are given explicitly.
///
/// The configured `search_paths`, or else the entries of `PYTHONPATH`.
pub fn default_search_paths(settings: &Settings) -> Vec<PathBuf> {
    if !settings.search_paths.is_empty() {
        return settings.search_paths.iter().map(PathBuf::from).collect();
    }
    match std::env::var_os("PYTHONPATH") {
        Some(value) => split_search_path(&value),
        None => Vec::new(),
    }
}


fn split_search_path(value: &std::ffi::OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}
