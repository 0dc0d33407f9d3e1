//! Static package metadata.

use serde::Serialize;


/// A documentation link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: &'static str,
    pub url: &'static str,
}


/// Describes this package to the toolset's package registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    /// Keywords to find this package.
    pub keywords: &'static [&'static str],
    /// Major Python versions the package runs under.
    pub python_versions: &'static [&'static str],
    /// Platforms, as reported by `uname`.
    pub platforms: &'static [&'static str],
    pub documents: &'static [Document],
    /// Applications this package is initialized for.
    pub applications: &'static [&'static str],
    pub is_active: bool,
    /// Whether this is a third-party package.
    pub is_external: bool,
    /// Developer e-mail addresses.
    pub developers: &'static [&'static str],
    pub dependent_packages: &'static [&'static str],
    /// Packages contained by this package.
    pub packages: &'static [&'static str],
}


const PACKAGE_INFO: PackageInfo = PackageInfo {
    name: "mCore",
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    keywords: &["core", "display", "enum", "namespace", "platform", "python", "version"],
    python_versions: &["2", "3"],
    platforms: &["Linux", "Darwin", "Windows"],
    documents: &[],
    applications: &["all"],
    is_active: true,
    is_external: false,
    developers: &["safak@safakoner.com"],
    dependent_packages: &["mFileSystem"],
    packages: &["mCore"],
};


/// The metadata record for this package.
pub fn package_info() -> PackageInfo {
    PACKAGE_INFO
}


/// Platform name for an `std::env::consts::OS` value.
pub fn platform_name(os: &str) -> Option<&'static str> {
    match os {
        "linux" => Some("Linux"),
        "macos" => Some("Darwin"),
        "windows" => Some("Windows"),
        _ => None,
    }
}


impl PackageInfo {
    pub fn supports_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| *p == platform)
    }

    pub fn supports_current_platform(&self) -> bool {
        platform_name(std::env::consts::OS)
            .map(|p| self.supports_platform(p))
            .unwrap_or(false)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("cannot serialize package info: {}", e))
    }

    /// One-line summary, e.g. `mCore 1.0.0 - Core functionalities used by all packages.`
    pub fn summary(&self) -> String {
        format!("{} {} - {}", self.name, self.version, self.description)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_values() {
        let info = package_info();
        assert_eq!(info.name, "mCore");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.description, "Core functionalities used by all packages.");
        assert!(info.keywords.contains(&"namespace"));
        assert!(info.keywords.contains(&"python"));
        assert_eq!(info.python_versions, &["2", "3"]);
        assert!(info.is_active);
        assert!(!info.is_external);
        assert_eq!(info.dependent_packages, &["mFileSystem"]);
        assert!(info.documents.is_empty());
    }

    #[test]
    fn platform_support() {
        let info = package_info();
        assert!(info.supports_platform("Linux"));
        assert!(info.supports_platform("Darwin"));
        assert!(!info.supports_platform("linux"));
        assert_eq!(platform_name("macos"), Some("Darwin"));
        assert_eq!(platform_name("freebsd"), None);
    }

    #[test]
    fn json_rendering() {
        let json = package_info().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "mCore");
        assert_eq!(value["platforms"][1], "Darwin");
        assert_eq!(value["is_external"], false);
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            package_info().summary(),
            "mCore 1.0.0 - Core functionalities used by all packages."
        );
    }
}
