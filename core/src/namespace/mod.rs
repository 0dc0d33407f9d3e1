//! Colon-delimited namespaces and pipe-delimited qualified names.
//!
//! A namespace such as `root:char:soldier` is held by [`NameSpace`], which
//! splits it into a head (`root:char`) and a tail (`soldier`). Qualified
//! names like `root:char:soldier:armA_01_jnt|root:char:soldier:armB_01_jnt`
//! are rewritten with [`remove_namespace`] and [`add_namespace`].

pub mod name_space;
pub mod qualified;

pub use name_space::NameSpace;
pub use qualified::{add_namespace, remove_namespace, terminal_name};

/// Separates the segments of a namespace.
pub const NAME_SPACE_DELIMITER: &str = ":";

/// Separates the paths of a qualified name.
pub const FULL_PATH_DELIMITER: &str = "|";
