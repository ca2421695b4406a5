#![forbid(unsafe_code)]

//! Gatelist CLI
//!
//! Command-line interface for inspecting and bootstrapping whitelist files.

use anyhow::Result;
use clap::Parser;
use gatelist_core::GatelistConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Args;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    // Initialize logging; RUST_LOG takes precedence over the config file.
    let default_level = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(path = %config.whitelist_file().path().display(), "Resolved whitelist");

    let mut stdout = std::io::stdout().lock();
    commands::run(args.command, &config, &mut stdout)
}

/// Layer command-line overrides on top of the config file (or defaults).
fn resolve_config(args: &Args) -> Result<GatelistConfig> {
    let mut config = match &args.config {
        Some(path) => GatelistConfig::load(path)?,
        None => GatelistConfig::default(),
    };

    if let Some(dir) = &args.dir {
        config.directory = dir.clone();
    }
    if let Some(file_name) = &args.file_name {
        config.file_name = file_name.clone();
    }
    if args.verbose {
        config.trace_entries = true;
    }

    config.validate()?;
    Ok(config)
}
