//! Command-line interface for sl
//!
//! Reads sl specification files and prints, for every specified function, its signature and
//! its postcondition check. Other formats dump the intermediate stages.
//!
//! Usage:
//!   sl `<files>...` [--format `<format>`] [--config `<path>`] [--set `<key=value>`]...
//!                                                              - Process files in order
//!   sl --ebnf                                                  - Print the grammar
//!   sl --list-formats                                          - List the output formats
//!
//! Configuration is layered: built-in defaults, then `sl.toml` in the working directory if
//! present, then the `--config` file, then each `--set` override.
//!
//! Files are processed one after the other. The first failure is printed to stderr, prefixed
//! with the file name, and the process exits with status 1.

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use sl_config::{Loader, SlConfig, SlConfigError};
use sl_parser::sl::grammar::ebnf;
use sl_parser::sl::loader::DocumentLoader;
use std::path::{Path, PathBuf};
use std::process;

/// Picked up from the working directory when it exists
const USER_CONFIG: &str = "sl.toml";

fn build_cli() -> Command {
    Command::new("sl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lower sl function specifications into signatures and postcondition checks")
        .arg_required_else_help(true)
        .arg(
            Arg::new("files")
                .help("sl source files, processed in order")
                .num_args(1..)
                .value_parser(existing_file)
                .required_unless_present_any(["ebnf", "list-formats"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .value_parser(transforms::format_names())
                .default_value("source"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("TOML file layered over the built-in defaults")
                .value_parser(existing_file),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override one configuration key, e.g. lowering.check_prefix=CHECK_")
                .action(ArgAction::Append)
                .value_parser(key_value),
        )
        .arg(
            Arg::new("ebnf")
                .long("ebnf")
                .help("Print the grammar as EBNF and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats and exit")
                .action(ArgAction::SetTrue),
        )
}

/// Reject paths that do not name an existing file
fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file does not exist: {}", value))
    }
}

/// Split a `key=value` override on its first `=`
fn key_value(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), val.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", value)),
    }
}

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();

    if matches.get_flag("ebnf") {
        println!("{}", ebnf());
        return;
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("source");

    for path in matches.get_many::<PathBuf>("files").into_iter().flatten() {
        if let Err(message) = handle_file(path, format, &config) {
            eprintln!("{}: {}", path.display(), message);
            process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<SlConfig, SlConfigError> {
    let mut loader = Loader::new().with_optional_file(USER_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        debug!("layering configuration from {}", path.display());
        loader = loader.with_file(path);
    }
    for (key, value) in matches
        .get_many::<(String, String)>("set")
        .into_iter()
        .flatten()
    {
        debug!("overriding {} = {}", key, value);
        loader = loader.set_override(key, value.as_str())?;
    }
    loader.build()
}

fn handle_file(path: &Path, format: &str, config: &SlConfig) -> Result<(), String> {
    debug!("processing {} as {}", path.display(), format);
    let loader = DocumentLoader::from_path(path).map_err(|e| e.to_string())?;
    let output = transforms::execute_format(&loader, format, config).map_err(|e| e.to_string())?;
    if output.ends_with('\n') || output.is_empty() {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for (name, description) in transforms::AVAILABLE_FORMATS {
        println!("  {:<14} {}", name, description);
    }
}
