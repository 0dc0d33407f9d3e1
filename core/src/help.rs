//! Help system — usage text for all mcore commands.
//!
//! `mcore help` prints the overview; `mcore help ns` lists a group;
//! `mcore help ns add` (or `ns.add`) shows one command in detail.


/// Generate help text for a given topic.
pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => {
            let key = t.trim().replace(' ', ".");
            if let Some(text) = command_help(&key) {
                return text.to_string();
            }
            if let Some(text) = group_help(&key) {
                return text.to_string();
            }
            format!("Unknown help topic: '{}'. Run 'mcore help' for a list of commands.", t)
        }
    }
}


fn overview() -> String {
    "\
mcore — namespace and package housekeeping utilities

Usage: mcore <command> [args...]

Namespace commands:
  ns valid <name>                      Check whether a name carries a namespace
  ns head <namespace>                  Everything before the last ':'
  ns tail <namespace>                  The last ':' segment
  ns strip <name>                      Remove namespaces from every '|' path
  ns add <namespace> <name> [flags]    Prefix every '|' path with a namespace

Scaffold commands:
  package create <path> <name> [flags] Create a package with an init module
  module create <path> <name> [flags]  Create a module file if missing

Housekeeping:
  clean [<path>...] [--verbose]        Delete compiled .pyc/.pyo files

Other:
  info [--json]                        Show package metadata
  help [topic]                         Show help (this message, or a topic)"
        .to_string()
}


fn group_help(group: &str) -> Option<&'static str> {
    match group {
        "ns" => Some(
            "\
Namespace commands:
  ns valid <name>
  ns head <namespace>
  ns tail <namespace>
  ns strip <name>
  ns add <namespace> <name> [--keep-existing]",
        ),
        "package" | "module" => Some(
            "\
Scaffold commands:
  package create <path> <name> [--no-tests|--tests]
  module create <path> <name> [--content <text>]",
        ),
        _ => None,
    }
}


fn command_help(cmd: &str) -> Option<&'static str> {
    match cmd {
        "ns.valid" => Some(
            "\
mcore ns valid <name>

Prints 'true' if <name> contains ':', 'false' otherwise.",
        ),
        "ns.head" => Some(
            "\
mcore ns head <namespace>

Prints everything before the last ':'.
  mcore ns head root:char:soldier   # root:char",
        ),
        "ns.tail" => Some(
            "\
mcore ns tail <namespace>

Prints the last ':' segment.
  mcore ns tail root:char:soldier   # soldier",
        ),
        "ns.strip" => Some(
            "\
mcore ns strip <name>

Removes the namespace from every '|'-separated path.
  mcore ns strip 'a:b:jntA|a:b:jntB'   # jntA|jntB",
        ),
        "ns.add" => Some(
            "\
mcore ns add <namespace> <name> [--keep-existing]

Prefixes every '|'-separated path of <name> with <namespace>. Existing
namespaces are replaced unless --keep-existing is given. Empty paths are
dropped.
  mcore ns add top:prop 'a:jntA|a:jntB'   # top:prop:jntA|top:prop:jntB",
        ),
        "package.create" => Some(
            "\
mcore package create <path> <name> [--no-tests|--tests]

Creates <path>/<name> with an init module and, unless --no-tests is given
or settings disable it, a nested test package. Existing files are kept.",
        ),
        "module.create" => Some(
            "\
mcore module create <path> <name> [--content <text>]

Creates <path>/<name> with optional content. Never overwrites.",
        ),
        "clean" => Some(
            "\
mcore clean [<path>...] [--verbose]

Recursively deletes compiled files (settings: compiled_extensions) under each
path. Without paths, uses settings search_paths or PYTHONPATH. Files that
cannot be removed for lack of permission are reported and skipped.",
        ),
        "info" => Some(
            "\
mcore info [--json]

Shows package metadata.",
        ),
        _ => None,
    }
}
