//! Adding and removing namespaces on `|`-separated qualified names.

use super::{FULL_PATH_DELIMITER, NAME_SPACE_DELIMITER};


/// The part of `path` after its last `:`, or all of it.
pub fn terminal_name(path: &str) -> &str {
    match path.rfind(NAME_SPACE_DELIMITER) {
        Some(pos) => &path[pos + NAME_SPACE_DELIMITER.len()..],
        None => path,
    }
}

/// Strip the namespace prefix from every path of `name`.
///
/// `root:char:soldier:armA_01_jnt|root:char:soldier:armB_01_jnt` becomes
/// `armA_01_jnt|armB_01_jnt`. Empty paths stay empty.
pub fn remove_namespace(name: &str) -> String {
    name.split(FULL_PATH_DELIMITER)
        .map(terminal_name)
        .collect::<Vec<_>>()
        .join(FULL_PATH_DELIMITER)
}

/// Prefix every non-empty path of `name` with `namespace`.
///
/// With `remove_existing` the current prefixes are stripped first, so
/// `root:soldier:armA_01_jnt` under `top:prop` becomes `top:prop:armA_01_jnt`
/// rather than `top:prop:root:soldier:armA_01_jnt`. Returns an empty string
/// when `name` has no non-empty paths.
pub fn add_namespace(namespace: &str, name: &str, remove_existing: bool) -> String {
    let stripped;
    let name = if remove_existing {
        stripped = remove_namespace(name);
        stripped.as_str()
    } else {
        name
    };

    name.split(FULL_PATH_DELIMITER)
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}{}{}", namespace, NAME_SPACE_DELIMITER, path))
        .collect::<Vec<_>>()
        .join(FULL_PATH_DELIMITER)
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
