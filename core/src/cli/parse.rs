use crate::command::Command;


/// Parse CLI arguments into a typed Command enum.
///
/// Arguments are expected WITHOUT the program name (i.e., `args` should
/// be `["ns", "head", "a:b"]`, not `["mcore", "ns", "head", "a:b"]`).
pub fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'mcore help' for usage.".into());
    }

    match args[0] {
        "ns" => parse_ns(args),
        "package" => parse_package(args),
        "module" => parse_module(args),
        "clean" => parse_clean(args),
        "info" => parse_info(args),
        "help" => parse_help(args),
        _ => Err(format!("Unknown command: '{}'", args[0])),
    }
}


// ---------------------------------------------------------------------------
// Sub-parsers
// ---------------------------------------------------------------------------

/// `mcore ns <subcommand> ...`
fn parse_ns(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: mcore ns <valid|head|tail|strip|add>".into());
    }
    match args[1] {
        "valid" => Ok(Command::NsValid { name: positional(args, 2, "mcore ns valid <name>")? }),
        "head" => Ok(Command::NsHead {
            namespace: positional(args, 2, "mcore ns head <namespace>")?,
        }),
        "tail" => Ok(Command::NsTail {
            namespace: positional(args, 2, "mcore ns tail <namespace>")?,
        }),
        "strip" => Ok(Command::NsStrip { name: positional(args, 2, "mcore ns strip <name>")? }),
        "add" => parse_ns_add(args),
        _ => Err(format!("Unknown ns subcommand: '{}'", args[1])),
    }
}

/// `mcore ns add <namespace> <name> [--keep-existing]`
fn parse_ns_add(args: &[&str]) -> Result<Command, String> {
    const USAGE: &str = "mcore ns add <namespace> <name> [--keep-existing]";
    let namespace = positional(args, 2, USAGE)?;
    let name = positional(args, 3, USAGE)?;
    let mut keep_existing = false;
    for flag in &args[4..] {
        match *flag {
            "--keep-existing" => keep_existing = true,
            other => return Err(format!("Unknown flag for ns add: '{}'", other)),
        }
    }
    Ok(Command::NsAdd { namespace, name, keep_existing })
}

/// `mcore package create <path> <name> [--no-tests|--tests]`
fn parse_package(args: &[&str]) -> Result<Command, String> {
    const USAGE: &str = "mcore package create <path> <name> [--no-tests|--tests]";
    if args.len() < 2 || args[1] != "create" {
        return Err(format!("Usage: {}", USAGE));
    }
    let path = positional(args, 2, USAGE)?;
    let name = positional(args, 3, USAGE)?;
    let mut tests = None;
    for flag in &args[4..] {
        match *flag {
            "--no-tests" => tests = Some(false),
            "--tests" => tests = Some(true),
            other => return Err(format!("Unknown flag for package create: '{}'", other)),
        }
    }
    Ok(Command::PackageCreate { path, name, tests })
}

/// `mcore module create <path> <name> [--content <text>]`
fn parse_module(args: &[&str]) -> Result<Command, String> {
    const USAGE: &str = "mcore module create <path> <name> [--content <text>]";
    if args.len() < 2 || args[1] != "create" {
        return Err(format!("Usage: {}", USAGE));
    }
    let path = positional(args, 2, USAGE)?;
    let name = positional(args, 3, USAGE)?;
    let mut content = None;

    let rest = &args[4..];
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--content" => {
                i += 1;
                content = Some(take_arg(rest, i, "--content")?);
            }
            other => return Err(format!("Unknown flag for module create: '{}'", other)),
        }
        i += 1;
    }
    Ok(Command::ModuleCreate { path, name, content })
}

/// `mcore clean [<path>...] [--verbose]`
fn parse_clean(args: &[&str]) -> Result<Command, String> {
    let mut paths = Vec::new();
    let mut verbose = false;
    for arg in &args[1..] {
        match *arg {
            "--verbose" | "-v" => verbose = true,
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown flag for clean: '{}'", flag));
            }
            path => paths.push(path.to_string()),
        }
    }
    Ok(Command::Clean { paths, verbose })
}

/// `mcore info [--json]`
fn parse_info(args: &[&str]) -> Result<Command, String> {
    let format = if args.contains(&"--json") {
        Some("json".into())
    } else {
        None
    };
    Ok(Command::Info { format })
}

/// `mcore help [topic]`
fn parse_help(args: &[&str]) -> Result<Command, String> {
    let topic = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };
    Ok(Command::Help { topic })
}


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Take the positional argument at `index`, or fail with `usage`.
fn positional(args: &[&str], index: usize, usage: &str) -> Result<String, String> {
    match args.get(index) {
        Some(arg) => Ok(arg.to_string()),
        None => Err(format!("Usage: {}", usage)),
    }
}

/// Safely take an argument value after a flag.
fn take_arg(args: &[&str], index: usize, flag: &str) -> Result<String, String> {
    if index >= args.len() {
        return Err(format!("{} requires a value", flag));
    }
    Ok(args[index].into())
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args() {
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn unknown_command() {
        assert!(parse_args(&["bogus"]).is_err());
    }

    // --- ns ---

    #[test]
    fn ns_valid() {
        let cmd = parse_args(&["ns", "valid", "a:b"]).unwrap();
        assert_eq!(cmd, Command::NsValid { name: "a:b".into() });
    }

    #[test]
    fn ns_head_and_tail() {
        assert_eq!(
            parse_args(&["ns", "head", "root:soldier"]).unwrap(),
            Command::NsHead { namespace: "root:soldier".into() }
        );
        assert_eq!(
            parse_args(&["ns", "tail", "root:soldier"]).unwrap(),
            Command::NsTail { namespace: "root:soldier".into() }
        );
    }

    #[test]
    fn ns_strip() {
        let cmd = parse_args(&["ns", "strip", "a:b|a:c"]).unwrap();
        assert_eq!(cmd, Command::NsStrip { name: "a:b|a:c".into() });
    }

    #[test]
    fn ns_add_default_replaces() {
        let cmd = parse_args(&["ns", "add", "top:prop", "a:b"]).unwrap();
        assert_eq!(
            cmd,
            Command::NsAdd { namespace: "top:prop".into(), name: "a:b".into(), keep_existing: false }
        );
    }

    #[test]
    fn ns_add_keep_existing() {
        let cmd = parse_args(&["ns", "add", "top:prop", "a:b", "--keep-existing"]).unwrap();
        match cmd {
            Command::NsAdd { keep_existing, .. } => assert!(keep_existing),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn ns_missing_arguments() {
        assert!(parse_args(&["ns"]).is_err());
        assert!(parse_args(&["ns", "head"]).is_err());
        assert!(parse_args(&["ns", "add", "top:prop"]).is_err());
        assert!(parse_args(&["ns", "bogus", "x"]).is_err());
    }

    #[test]
    fn ns_add_unknown_flag() {
        let err = parse_args(&["ns", "add", "a:b", "c", "--force"]).unwrap_err();
        assert!(err.contains("--force"));
    }

    // --- package / module ---

    #[test]
    fn package_create() {
        let cmd = parse_args(&["package", "create", "/dev", "mAsset"]).unwrap();
        assert_eq!(
            cmd,
            Command::PackageCreate { path: "/dev".into(), name: "mAsset".into(), tests: None }
        );
    }

    #[test]
    fn package_create_no_tests() {
        let cmd = parse_args(&["package", "create", "/dev", "mAsset", "--no-tests"]).unwrap();
        match cmd {
            Command::PackageCreate { tests, .. } => assert_eq!(tests, Some(false)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn package_wrong_subcommand() {
        assert!(parse_args(&["package", "delete", "/dev", "x"]).is_err());
        assert!(parse_args(&["package"]).is_err());
    }

    #[test]
    fn module_create_with_content() {
        let cmd =
            parse_args(&["module", "create", "/dev/pkg", "lib.py", "--content", "X = 1"]).unwrap();
        assert_eq!(
            cmd,
            Command::ModuleCreate {
                path: "/dev/pkg".into(),
                name: "lib.py".into(),
                content: Some("X = 1".into()),
            }
        );
    }

    #[test]
    fn module_content_requires_value() {
        let err = parse_args(&["module", "create", "/dev", "a.py", "--content"]).unwrap_err();
        assert!(err.contains("requires a value"));
    }

    // --- clean / info / help ---

    #[test]
    fn clean_defaults() {
        let cmd = parse_args(&["clean"]).unwrap();
        assert_eq!(cmd, Command::Clean { paths: vec![], verbose: false });
    }

    #[test]
    fn clean_paths_and_verbose() {
        let cmd = parse_args(&["clean", "/a", "--verbose", "/b"]).unwrap();
        assert_eq!(
            cmd,
            Command::Clean { paths: vec!["/a".into(), "/b".into()], verbose: true }
        );
    }

    #[test]
    fn clean_unknown_flag() {
        assert!(parse_args(&["clean", "--all"]).is_err());
    }

    #[test]
    fn info_json() {
        assert_eq!(parse_args(&["info"]).unwrap(), Command::Info { format: None });
        assert_eq!(
            parse_args(&["info", "--json"]).unwrap(),
            Command::Info { format: Some("json".into()) }
        );
    }

    #[test]
    fn help_topic() {
        assert_eq!(parse_args(&["help"]).unwrap(), Command::Help { topic: None });
        assert_eq!(
            parse_args(&["help", "ns", "add"]).unwrap(),
            Command::Help { topic: Some("ns add".into()) }
        );
    }
}
