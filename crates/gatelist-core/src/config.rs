//! Configuration for locating the whitelist and tuning its diagnostics.
//!
//! Configuration is read from TOML. Every key is optional:
//!
//! ```toml
//! directory = "~/.config/gatelist"
//! file_name = "whitelist.txt"
//! trace_entries = false
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::bootstrap::WhitelistFile;
use crate::template::DEFAULT_FILE_NAME;
use crate::{Error, Result};

/// Whitelist location and verbosity settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatelistConfig {
    /// Directory holding the whitelist file. A leading `~` is expanded.
    pub directory: PathBuf,
    /// Name of the whitelist file inside `directory`.
    pub file_name: String,
    /// Emit a debug event for every accepted or rejected line on reload.
    pub trace_entries: bool,
    /// Default log filter for binaries embedding the engine: a level such as
    /// `info`, or comma-separated `target=level` directives.
    pub log_level: String,
}

impl Default for GatelistConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
            trace_entries: false,
            log_level: "info".to_string(),
        }
    }
}

impl GatelistConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { message } => Error::config(format!("{}: {message}", path.display())),
            other => other,
        })
    }

    /// Checks values that TOML syntax alone cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(Error::config("file_name must not be empty"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(Error::config(format!(
                "file_name must be a bare file name, got '{}'",
                self.file_name
            )));
        }
        validate_log_level(&self.log_level)?;
        Ok(())
    }

    /// `directory` with a leading `~` expanded to the home directory.
    pub fn resolved_directory(&self) -> PathBuf {
        let raw = self.directory.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }

    /// The whitelist file this configuration points at.
    pub fn whitelist_file(&self) -> WhitelistFile {
        WhitelistFile::new(self.resolved_directory(), self.file_name.clone())
    }
}

/// Every directive must end in a known level; a bare word that is not a
/// level would otherwise be read as a target name and hide a typo.
fn validate_log_level(filter: &str) -> Result<()> {
    let directives: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect();
    if directives.is_empty() {
        return Err(Error::config("log_level must not be empty"));
    }

    for directive in directives {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level);
        if level.parse::<LevelFilter>().is_err() {
            return Err(Error::config(format!(
                "log_level directive '{directive}' does not name a level \
                 (expected off, error, warn, info, debug, or trace)"
            )));
        }
    }
    Ok(())
}
