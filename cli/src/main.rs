//! mcore CLI — the command-line entry point.
//!
//! # Usage
//!
//! ```text
//! mcore ns head root:char:soldier
//! mcore ns add top:prop 'root:jntA|root:jntB'
//! mcore package create ~/dev mAsset
//! mcore clean ~/dev --verbose
//! ```

use std::path::PathBuf;
use std::process;

use mcore::cli::parse_args;
use mcore::command::Command;
use mcore::response::Response;
use mcore::sys::Sys;
use tracing_subscriber::EnvFilter;


fn main() {
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcore: {}", e);
            process::exit(1);
        }
    };

    init_logging(&cmd);

    let config_dir = resolve_config_dir();
    let response = match Sys::new(&config_dir) {
        Ok(mut sys) => sys.execute(cmd),
        Err(e) => Response::Error {
            message: format!("Failed to initialize: {}", e),
        },
    };

    match response {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("mcore error: {}", message);
            process::exit(1);
        }
    }
}


/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `info` for a
/// verbose clean.
fn init_logging(cmd: &Command) {
    let default_level = match cmd {
        Command::Clean { verbose: true, .. } => "info",
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}


fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MCORE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("mcore")
}
