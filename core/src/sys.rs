use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cleanup::{default_search_paths, remove_compiled};
use crate::command::Command;
use crate::config::{self, Settings};
use crate::fs::local::LocalFs;
use crate::fs::FileSystem;
use crate::help::help_text;
use crate::namespace::{add_namespace, remove_namespace, NameSpace};
use crate::package_info::package_info;
use crate::response::Response;
use crate::scaffold::{create_module, create_package, Layout};


/// Runtime for the mcore commands. Owns the settings and the filesystem
/// backend, and dispatches each `Command` to its handler.
pub struct Sys {
    settings: Settings,
    fs: Box<dyn FileSystem>,
}


impl Sys {
    /// Create a Sys on the local filesystem, loading settings from
    /// `config_dir` (defaults when there is no settings file).
    pub fn new(config_dir: &Path) -> Result<Sys, String> {
        let settings = config::load_or_default(config_dir)?;
        Ok(Sys::with_parts(settings, Box::new(LocalFs)))
    }

    pub fn with_parts(settings: Settings, fs: Box<dyn FileSystem>) -> Sys {
        Sys { settings, fs }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute a command and return its response.
    pub fn execute(&mut self, cmd: Command) -> Response {
        debug!(?cmd, "execute");
        let result = match cmd {
            Command::NsValid { name } => Ok(NameSpace::is_valid(&name).to_string()),
            Command::NsHead { namespace } => self.cmd_ns_part(&namespace, true),
            Command::NsTail { namespace } => self.cmd_ns_part(&namespace, false),
            Command::NsStrip { name } => Ok(remove_namespace(&name)),
            Command::NsAdd { namespace, name, keep_existing } => {
                self.cmd_ns_add(&namespace, &name, keep_existing)
            }
            Command::PackageCreate { path, name, tests } => {
                self.cmd_package_create(&path, &name, tests)
            }
            Command::ModuleCreate { path, name, content } => {
                self.cmd_module_create(&path, &name, content.as_deref())
            }
            Command::Clean { paths, verbose } => self.cmd_clean(paths, verbose),
            Command::Info { format } => self.cmd_info(format),
            Command::Help { topic } => Ok(help_text(topic.as_deref())),
        };
        match result {
            Ok(output) => Response::ok(output),
            Err(message) => Response::error(message),
        }
    }


    // -----------------------------------------------------------------
    // Namespace
    // -----------------------------------------------------------------

    fn cmd_ns_part(&self, namespace: &str, head: bool) -> Result<String, String> {
        let ns: NameSpace = namespace.parse().map_err(|e| format!("{}", e))?;
        let part = if head { ns.head() } else { ns.tail() };
        Ok(part.unwrap_or_default().to_string())
    }

    fn cmd_ns_add(&self, namespace: &str, name: &str, keep_existing: bool) -> Result<String, String> {
        if namespace.is_empty() {
            return Err("namespace is empty".into());
        }
        Ok(add_namespace(namespace, name, !keep_existing))
    }


    // -----------------------------------------------------------------
    // Scaffold
    // -----------------------------------------------------------------

    fn cmd_package_create(
        &mut self,
        path: &str,
        name: &str,
        tests: Option<bool>,
    ) -> Result<String, String> {
        let layout = Layout::from(&self.settings);
        let create_tests = tests.unwrap_or(self.settings.create_test_package);
        let root = create_package(self.fs.as_mut(), &layout, Path::new(path), name, create_tests)
            .map_err(|e| e.to_string())?;
        Ok(root.display().to_string())
    }

    fn cmd_module_create(
        &mut self,
        path: &str,
        name: &str,
        content: Option<&str>,
    ) -> Result<String, String> {
        let file = create_module(self.fs.as_mut(), Path::new(path), name, content)
            .map_err(|e| e.to_string())?;
        Ok(file.display().to_string())
    }


    // -----------------------------------------------------------------
    // Housekeeping
    // -----------------------------------------------------------------

    fn cmd_clean(&mut self, paths: Vec<String>, verbose: bool) -> Result<String, String> {
        let paths: Vec<PathBuf> = if paths.is_empty() {
            default_search_paths(&self.settings)
        } else {
            paths.into_iter().map(PathBuf::from).collect()
        };
        if paths.is_empty() {
            return Err("no paths to clean: pass paths, set search_paths or PYTHONPATH".into());
        }

        let report = remove_compiled(self.fs.as_mut(), &paths, &self.settings.compiled_extensions)
            .map_err(|e| e.to_string())?;

        let mut lines = Vec::new();
        if verbose {
            lines.extend(report.removed.iter().map(|p| p.display().to_string()));
        }
        for p in &report.skipped {
            lines.push(format!("skipped (permission denied): {}", p.display()));
        }
        lines.push(format!(
            "removed {} file(s), skipped {}",
            report.removed.len(),
            report.skipped.len()
        ));
        Ok(lines.join("\n"))
    }


    // -----------------------------------------------------------------
    // Top-level
    // -----------------------------------------------------------------

    fn cmd_info(&self, format: Option<String>) -> Result<String, String> {
        let info = package_info();
        match format.as_deref() {
            Some("json") => info.to_json(),
            _ => Ok(info.summary()),
        }
    }
}
