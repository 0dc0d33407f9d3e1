//! Command — the typed interface for all mcore operations.
//!
//! Every operation dispatched through `Sys::execute()` is a variant of the
//! `Command` enum. Commands serialize as JSON objects with a `"command"`
//! discriminant:
//!
//! ```json
//! {"command": "ns.head", "namespace": "root:char:soldier"}
//! {"command": "ns.add", "namespace": "top:prop", "name": "a:b|a:c", "keep_existing": false}
//! {"command": "clean", "paths": ["/studio/python"], "verbose": true}
//! ```
//!
//! # Command Groups
//!
//! | Group | Commands |
//! |-------|----------|
//! | Namespace | `ns.valid`, `ns.head`, `ns.tail`, `ns.strip`, `ns.add` |
//! | Scaffold | `package.create`, `module.create` |
//! | Housekeeping | `clean` |
//! | Top-level | `info`, `help` |

use serde::{Deserialize, Serialize};


/// A typed command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    // -----------------------------------------------------------------
    // Namespace commands
    // -----------------------------------------------------------------

    /// Report whether a string is a namespace (contains `:`).
    #[serde(rename = "ns.valid")]
    NsValid { name: String },

    /// Everything before the last `:`.
    #[serde(rename = "ns.head")]
    NsHead { namespace: String },

    /// The last `:` segment.
    #[serde(rename = "ns.tail")]
    NsTail { namespace: String },

    /// Strip namespaces from every path of a qualified name.
    #[serde(rename = "ns.strip")]
    NsStrip { name: String },

    /// Prefix every path of a qualified name with a namespace.
    #[serde(rename = "ns.add")]
    NsAdd {
        namespace: String,
        name: String,
        /// Keep existing prefixes instead of replacing them.
        #[serde(default)]
        keep_existing: bool,
    },

    // -----------------------------------------------------------------
    // Scaffold commands
    // -----------------------------------------------------------------

    /// Create a package directory with an init module.
    #[serde(rename = "package.create")]
    PackageCreate {
        path: String,
        name: String,
        /// Create the nested test package. `None` defers to settings.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tests: Option<bool>,
    },

    /// Create a module file unless it already exists.
    #[serde(rename = "module.create")]
    ModuleCreate {
        path: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },

    // -----------------------------------------------------------------
    // Housekeeping
    // -----------------------------------------------------------------

    /// Delete compiled artifacts under the given paths (or the defaults).
    #[serde(rename = "clean")]
    Clean {
        #[serde(default)]
        paths: Vec<String>,
        /// List every removed file in the output.
        #[serde(default)]
        verbose: bool,
    },

    // -----------------------------------------------------------------
    // Top-level
    // -----------------------------------------------------------------

    /// Show package metadata.
    #[serde(rename = "info")]
    Info {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    /// Show help text.
    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}
