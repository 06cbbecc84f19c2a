//! Command-line interface for chx
//! Parses a chx file and prints it in one of the registered output formats.
//!
//! Usage:
//!   chx `[path]` [--format `<format>`] [--config `<file>`]  - Print the program (stdin when path is `-` or omitted)
//!   chx `[path]` --tokens                                 - Print the token stream as JSON
//!   chx --list-formats                                    - List all available formats
//!
//! Configuration is layered: built-in defaults, then `./chx.toml` if present, then the file
//! given with `--config`, then `--format`. Set `CHX_LOG` (e.g. `CHX_LOG=debug`) for logs on
//! stderr.

use chx::chx::config::{ChxConfig, ConfigError, Loader};
use chx::chx::formats::{FormatError, FormatRegistry};
use chx::{tokenize, Parser};
use clap::{Arg, ArgAction, Command};
use std::io::{self, Read};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    init_logging();

    let matches = Command::new("chx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse chx files and render them as a tree, JSON, YAML or prompt text")
        .arg(
            Arg::new("path")
                .help("Path to the chx file, or '-' for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'tree', 'json', 'prompt')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream as JSON instead of the program")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let result = if matches.get_flag("list-formats") {
        handle_list_formats_command(matches.get_one::<String>("config"))
    } else {
        // `path` has a default value, so it is always present.
        let path = matches
            .get_one::<String>("path")
            .map(String::as_str)
            .unwrap_or("-");
        if matches.get_flag("tokens") {
            handle_tokens_command(path)
        } else {
            handle_render_command(
                path,
                matches.get_one::<String>("format"),
                matches.get_one::<String>("config"),
            )
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CHX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(
    config_path: Option<&String>,
    format: Option<&String>,
) -> Result<ChxConfig, ConfigError> {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    loader.with_format(format.map(String::as_str))?.build()
}

fn read_source(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Parse the input and print it in the configured format
fn handle_render_command(
    path: &str,
    format: Option<&String>,
    config_path: Option<&String>,
) -> Result<(), CliError> {
    let config = load_config(config_path, format)?;
    let registry = FormatRegistry::from_config(&config);

    let source = read_source(path)?;
    let program = Parser::new().parse(&source);
    debug!(format = %config.output.format, "rendering program");

    let output = registry.serialize(&program, &config.output.format)?;
    print_output(&output);
    Ok(())
}

/// Print the token stream as JSON
fn handle_tokens_command(path: &str) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tokens = tokenize(&source);
    let output = serde_json::to_string_pretty(&tokens)?;
    print_output(&output);
    Ok(())
}

/// List the registered formats with their descriptions
fn handle_list_formats_command(config_path: Option<&String>) -> Result<(), CliError> {
    let config = load_config(config_path, None)?;
    let registry = FormatRegistry::from_config(&config);

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let marker = if name == config.output.format {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", name, marker);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
    Ok(())
}

fn print_output(output: &str) {
    if output.is_empty() || output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
