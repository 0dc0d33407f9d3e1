//! The `NameSpace` value holder.
//!
//! ```
//! use mcore::namespace::NameSpace;
//!
//! let ns = NameSpace::with_value("asset:soldier:armA_01_jnt");
//! assert_eq!(ns.value(), Some("asset:soldier:armA_01_jnt"));
//! assert_eq!(ns.head(), Some("asset:soldier"));
//! assert_eq!(ns.tail(), Some("armA_01_jnt"));
//! assert!(!NameSpace::is_valid("soldier"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{add_namespace, NAME_SPACE_DELIMITER};
use crate::errors::NamespaceError;


/// A validated namespace string, or nothing.
///
/// Once a value is set it only changes through [`NameSpace::set`], which
/// rejects candidates without a `:` and keeps the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct NameSpace {
    value: Option<String>,
}


impl NameSpace {
    /// Create an unset namespace.
    pub fn new() -> Self {
        NameSpace { value: None }
    }

    /// Create a namespace holding `initial` if it is valid.
    ///
    /// An invalid initial value does not fail; the result is simply unset.
    /// Use `str::parse` for the strict variant.
    pub fn with_value(initial: &str) -> Self {
        let mut ns = NameSpace::new();
        if !initial.is_empty() {
            ns.set(initial);
        }
        ns
    }

    /// True if `candidate` contains at least one `:`.
    pub fn is_valid(candidate: &str) -> bool {
        candidate.contains(NAME_SPACE_DELIMITER)
    }

    /// Like [`NameSpace::is_valid`], but an absent candidate is an error.
    pub fn try_is_valid(candidate: Option<&str>) -> Result<bool, NamespaceError> {
        match candidate {
            Some(s) => Ok(NameSpace::is_valid(s)),
            None => Err(NamespaceError::InvalidArgument(
                "namespace candidate is absent".into(),
            )),
        }
    }

    /// Store `candidate` if valid. Returns false and keeps the current value
    /// otherwise.
    pub fn set(&mut self, candidate: &str) -> bool {
        if !NameSpace::is_valid(candidate) {
            debug!(candidate, "rejected namespace without delimiter");
            return false;
        }
        self.value = Some(candidate.to_string());
        true
    }

    /// The held value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True once a valid namespace has been set.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Everything before the last `:`. A value without `:` is its own head.
    pub fn head(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        Some(match value.rfind(NAME_SPACE_DELIMITER) {
            Some(pos) => &value[..pos],
            None => value,
        })
    }

    /// The last segment.
    pub fn tail(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        Some(match value.rfind(NAME_SPACE_DELIMITER) {
            Some(pos) => &value[pos + NAME_SPACE_DELIMITER.len()..],
            None => value,
        })
    }

    /// Iterate over the `:` segments of the held value. Empty when unset.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.value
            .as_deref()
            .into_iter()
            .flat_map(|v| v.split(NAME_SPACE_DELIMITER))
    }

    /// Prefix every path of `name` with the held value.
    ///
    /// Returns `None` when no namespace is set.
    pub fn apply(&self, name: &str, remove_existing: bool) -> Option<String> {
        self.value
            .as_deref()
            .map(|ns| add_namespace(ns, name, remove_existing))
    }
}


impl FromStr for NameSpace {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ns = NameSpace::new();
        if ns.set(s) {
            Ok(ns)
        } else {
            Err(NamespaceError::NotANamespace(s.to_string()))
        }
    }
}

impl fmt::Display for NameSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or(""))
    }
}

impl From<Option<String>> for NameSpace {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => NameSpace::with_value(&v),
            None => NameSpace::new(),
        }
    }
}

impl From<NameSpace> for Option<String> {
    fn from(ns: NameSpace) -> Self {
        ns.value
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
