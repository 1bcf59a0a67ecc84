//! Prepkit - data preprocessing CLI tool.
//!
//! This crate provides cleaning, numeric scaling, text cleanup and list
//! reshaping as pure functions, plus the command line that drives them.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod preprocessing;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Cli, Command, ConfigAction};
use config::{Config, load_config, resolve_config_path, save_config, validate_config};
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for prepkit CLI.
pub fn run() -> Result<()> {
    let cli = parse_cli();

    // Initialize logging
    init_logging(cli.global.verbose, cli.global.quiet);

    let config_path = cli.global.config.as_deref();

    let command = match cli.command {
        Command::Config { action } => return handle_config_command(action, config_path),
        Command::Transform(command) => command,
    };

    // Each transform checks only the defaults it falls back on
    let config = load_config(config_path)?;

    let format = cli.global.format.unwrap_or(config.output.format);
    info!("Output format: {format}");

    let output = cli::transform::execute(&command, &config.defaults)?;

    let stdout = std::io::stdout().lock();
    let mut writer = output::create_writer(format, stdout);
    writer.write_output(&output)?;
    writer.finalize()
}

/// Parse the command line, exiting on usage errors.
///
/// Clap omits the usage line for rejected values, so it is appended here.
#[allow(clippy::print_stderr)]
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::ValueValidation | ErrorKind::InvalidValue) => {
            let _ = e.print();
            let args: Vec<String> = std::env::args().skip(1).collect();
            eprintln!("\n{}", usage_for(&args));
            std::process::exit(e.exit_code());
        }
        Err(e) => e.exit(),
    }
}

/// Usage line of the deepest subcommand named in `args`.
fn usage_for(args: &[String]) -> String {
    let mut command = Cli::command().bin_name(constants::APP_NAME);
    command.build();

    let mut current = &command;
    for arg in args {
        if let Some(sub) = current.find_subcommand(arg) {
            current = sub;
        }
    }
    current.clone().render_usage().to_string()
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Results go to stdout, so logs stay on stderr and default to warnings only.
    let filter_str = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = resolve_config_path(explicit)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                info!("Wrote default configuration");
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            validate_config(&config)?;
            let contents = toml::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{contents}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = resolve_config_path(explicit)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
