//! `MongoAuth` CLI - resolve MongoDB authentication credentials
//!
//! Reads connection properties from a TOML file and/or flags and shows the
//! credentials a driver would authenticate with.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use mongoauth_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();

    let output = match cli.log_file.as_deref() {
        Some(raw) => Some(TracingOutput::File(util::expand_path(raw))),
        None if cli.quiet => None,
        None => Some(TracingOutput::Stderr),
    };

    if let Some(output) = output {
        let config = TracingConfig::new()
            .with_level(TracingLevel::from_verbosity(cli.verbose))
            .with_output(output);
        if let Err(e) = init_tracing(&config) {
            if !cli.quiet {
                eprintln!("Warning: {e}");
            }
        }
    }

    let result = commands::dispatch(cli.config.as_deref(), cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
