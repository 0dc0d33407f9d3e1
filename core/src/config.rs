//! Settings for the housekeeping helpers, loaded from `settings.yaml`.
//!
//! Every field has a default, so a missing file or a partial file both
//! yield a complete `Settings`.

use serde::{Deserialize, Serialize};
use std::path::Path;


/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Extensions (without the dot) that `clean` deletes, in order.
    pub compiled_extensions: Vec<String>,

    /// Directories `clean` visits when none are given on the command line.
    /// When empty, the entries of `PYTHONPATH` are used instead.
    pub search_paths: Vec<String>,

    /// File created in every package directory.
    pub init_module: String,

    /// Name of the nested test package.
    pub test_package: String,

    /// Whether `package create` adds a test package unless told otherwise.
    pub create_test_package: bool,
}


impl Default for Settings {
    fn default() -> Self {
        Settings {
            compiled_extensions: vec!["pyc".into(), "pyo".into()],
            search_paths: Vec::new(),
            init_module: "__init__.py".into(),
            test_package: "tests".into(),
            create_test_package: true,
        }
    }
}


/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.yaml";


/// Load settings from a YAML file.
pub fn load(path: &Path) -> Result<Settings, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    parse(&content)
}


/// Load `<config_dir>/settings.yaml`, or defaults if it does not exist.
pub fn load_or_default(config_dir: &Path) -> Result<Settings, String> {
    let path = config_dir.join(SETTINGS_FILE);
    if path.exists() {
        load(&path)
    } else {
        Ok(Settings::default())
    }
}


/// Parse settings from a YAML string.
pub fn parse(content: &str) -> Result<Settings, String> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| format!("invalid settings: {}", e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.compiled_extensions, vec!["pyc", "pyo"]);
        assert!(s.search_paths.is_empty());
        assert_eq!(s.init_module, "__init__.py");
        assert_eq!(s.test_package, "tests");
        assert!(s.create_test_package);
    }

    #[test]
    fn parse_full() {
        let yaml = r#"
compiled_extensions: ["pyc"]
search_paths:
  - /studio/python
  - /home/me/python
init_module: "__init__.py"
test_package: "unittests"
create_test_package: false
"#;
        let s = parse(yaml).unwrap();
        assert_eq!(s.compiled_extensions, vec!["pyc"]);
        assert_eq!(s.search_paths, vec!["/studio/python", "/home/me/python"]);
        assert_eq!(s.test_package, "unittests");
        assert!(!s.create_test_package);
    }

    #[test]
    fn parse_partial_fills_defaults() {
        let s = parse("search_paths: [/a]\n").unwrap();
        assert_eq!(s.search_paths, vec!["/a"]);
        assert_eq!(s.compiled_extensions, vec!["pyc", "pyo"]);
        assert_eq!(s.init_module, "__init__.py");
    }

    #[test]
    fn parse_empty_is_default() {
        assert_eq!(parse("").unwrap(), Settings::default());
        assert_eq!(parse("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn parse_wrong_type_fails() {
        let err = parse("create_test_package: [1, 2]\n").unwrap_err();
        assert!(err.contains("invalid settings"));
    }

    #[test]
    fn load_written_settings() {
        let dir = std::env::temp_dir().join("mcore_settings_roundtrip");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let mut s = Settings::default();
        s.search_paths = vec!["/x".into()];
        s.create_test_package = false;
        std::fs::write(dir.join(SETTINGS_FILE), serde_yaml::to_string(&s).unwrap()).unwrap();

        assert_eq!(load_or_default(&dir).unwrap(), s);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = std::env::temp_dir().join("mcore_settings_missing_xyz");
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(load_or_default(&dir).unwrap(), Settings::default());
    }
}
