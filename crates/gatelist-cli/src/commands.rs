//! Handler functions for gatelist subcommands.

use anyhow::{Context, Result, bail};
use gatelist_core::{GatelistConfig, Identity, Whitelist, WhitelistFile};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::Command;

/// Dispatch a subcommand against the resolved configuration.
pub fn run(command: Command, config: &GatelistConfig, out: &mut impl Write) -> Result<ExitCode> {
    match command {
        Command::Path => cmd_path(config, out),
        Command::Init { force } => cmd_init(config, force, out),
        Command::List => cmd_list(config, out),
        Command::Check { identity } => cmd_check(config, &identity, out),
        Command::Diff { snapshot } => cmd_diff(config, &snapshot, out),
    }
}

/// Show the resolved whitelist path.
fn cmd_path(config: &GatelistConfig, out: &mut impl Write) -> Result<ExitCode> {
    let file = config.whitelist_file();
    writeln!(out, "{}", file.path().display())?;
    if !file.exists() {
        eprintln!("(file does not exist; run `gatelist init` to create it)");
    }
    Ok(ExitCode::SUCCESS)
}

/// Create the whitelist file from the template.
fn cmd_init(config: &GatelistConfig, force: bool, out: &mut impl Write) -> Result<ExitCode> {
    let whitelist = Whitelist::from_config(config);
    let path = whitelist.file().path();

    if whitelist.exists() && !force {
        bail!(
            "Whitelist file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    whitelist.initialize()?;
    writeln!(out, "Whitelist file created at {}", path.display())?;
    Ok(ExitCode::SUCCESS)
}

/// Reload and print members, one per line in ascending order.
fn cmd_list(config: &GatelistConfig, out: &mut impl Write) -> Result<ExitCode> {
    let mut whitelist = Whitelist::from_config(config);
    let outcome = whitelist.reload()?;

    for identity in outcome.current.to_sorted_vec() {
        writeln!(out, "{identity}")?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Report whether an identity is whitelisted.
fn cmd_check(config: &GatelistConfig, identity: &str, out: &mut impl Write) -> Result<ExitCode> {
    let identity: Identity = identity.parse().map_err(gatelist_core::Error::from)?;

    let mut whitelist = Whitelist::from_config(config);
    whitelist.reload()?;

    if whitelist.contains(identity) {
        writeln!(out, "{identity} is whitelisted")?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(out, "{identity} is not whitelisted")?;
        Ok(ExitCode::from(1))
    }
}

/// Print `+id` for identities added since `snapshot` and `-id` for removed ones.
fn cmd_diff(config: &GatelistConfig, snapshot: &Path, out: &mut impl Write) -> Result<ExitCode> {
    let snapshot_file = snapshot_file(snapshot)?;
    if !snapshot_file.exists() {
        bail!("Snapshot file not found: {}", snapshot.display());
    }

    let mut before = Whitelist::new(snapshot_file).with_trace_entries(config.trace_entries);
    let old = before.reload()?.current;

    let mut after = Whitelist::from_config(config);
    let new = after.reload()?.current;

    for identity in new.difference(&old) {
        writeln!(out, "+{identity}")?;
    }
    for identity in old.difference(&new) {
        writeln!(out, "-{identity}")?;
    }
    Ok(ExitCode::SUCCESS)
}

fn snapshot_file(path: &Path) -> Result<WhitelistFile> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid snapshot path: {}", path.display()))?;
    let directory = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(WhitelistFile::new(directory, file_name))
}
