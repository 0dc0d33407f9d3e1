//! mcore — core helpers shared by the content-production packages.
//!
//! - [`namespace`]: colon-delimited namespaces and `|`-separated qualified names
//! - [`package_info`]: static package metadata
//! - [`scaffold`] and [`cleanup`]: package scaffolding and compiled-file removal
//!   on top of the [`fs::FileSystem`] trait
//! - [`command`], [`sys`], [`cli`]: the typed command surface used by the `mcore` binary

pub mod cleanup;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod fs;
pub mod help;
pub mod namespace;
pub mod package_info;
pub mod response;
pub mod scaffold;
pub mod sys;

pub use errors::{CleanupError, NamespaceError, ScaffoldError};
pub use namespace::{add_namespace, remove_namespace, NameSpace};
