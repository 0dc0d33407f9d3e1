use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Namespace errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// A required string argument was missing or malformed.
    InvalidArgument(String),
    /// The value carries no `:` delimiter.
    NotANamespace(String),
}

impl fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            NamespaceError::NotANamespace(value) => {
                write!(f, "not a namespace: '{}'", value)
            }
        }
    }
}

impl std::error::Error for NamespaceError {}

// ---------------------------------------------------------------------------
// Scaffold errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ScaffoldError {
    /// Package or module name was empty or otherwise unusable.
    InvalidArgument(String),
    /// Filesystem I/O error while creating `path`.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ScaffoldError::Io { path, source } => {
                write!(f, "cannot create {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Cleanup errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum CleanupError {
    /// Listing or removing `path` failed for a reason other than permissions.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for CleanupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupError::Io { path, source } => {
                write!(f, "cannot clean {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CleanupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CleanupError::Io { source, .. } => Some(source),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn namespace_error_display() {
        let e = NamespaceError::InvalidArgument("namespace is absent".into());
        assert_eq!(e.to_string(), "invalid argument: namespace is absent");
        let e = NamespaceError::NotANamespace("soldier".into());
        assert_eq!(e.to_string(), "not a namespace: 'soldier'");
    }

    #[test]
    fn scaffold_error_exposes_source() {
        let e = ScaffoldError::Io {
            path: PathBuf::from("/nope/pkg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/nope/pkg"));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn cleanup_error_display() {
        let e = CleanupError::Io {
            path: PathBuf::from("/lib/a.pyc"),
            source: io::Error::new(io::ErrorKind::Other, "busy"),
        };
        assert_eq!(e.to_string(), "cannot clean /lib/a.pyc: busy");
    }
}
