//! Locating and bootstrapping the whitelist file.
//!
//! [`WhitelistFile`] knows where the backing file lives, whether it is
//! there, how to read it, and how to create it from
//! [`DEFAULT_TEMPLATE`](crate::template::DEFAULT_TEMPLATE). It never merges
//! with an existing file: [`initialize`](WhitelistFile::initialize) replaces
//! whatever is at the path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::template::DEFAULT_TEMPLATE;
use crate::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Location of a whitelist file: a directory plus a fixed file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistFile {
    directory: PathBuf,
    file_name: String,
}

impl WhitelistFile {
    /// Creates a handle for `directory/file_name`. Nothing is touched on disk.
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Directory holding the file.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name within [`directory`](Self::directory).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Returns `true` if a regular file is present at [`path`](Self::path).
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Writes the bootstrap template, creating the directory if needed.
    ///
    /// Destructive: existing content is truncated. Callers should only
    /// invoke this when [`exists`](Self::exists) is `false`.
    pub fn initialize(&self) -> Result<()> {
        if !self.directory.as_os_str().is_empty() && !self.directory.exists() {
            fs::create_dir_all(&self.directory)
                .map_err(|e| Error::io_with_path(e, &self.directory))?;
        }

        let path = self.path();
        fs::write(&path, DEFAULT_TEMPLATE).map_err(|e| Error::io_with_path(e, &path))?;

        tracing::debug!(path = %path.display(), "Wrote whitelist template");
        Ok(())
    }

    /// Reads the file as lines, in order.
    ///
    /// A trailing newline does not yield an extra empty line, `\r\n`
    /// endings and a leading byte-order mark are stripped. Bytes that are not
    /// valid UTF-8 become U+FFFD, so only the line holding them is affected.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let path = self.path();
        let bytes = fs::read(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let content = String::from_utf8_lossy(&bytes);
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&*content);
        Ok(content.lines().map(str::to_string).collect())
    }
}
