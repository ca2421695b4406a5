//! Common test utilities for gatelist integration tests.

#![allow(dead_code)]

use gatelist_core::{Identity, Whitelist, WhitelistFile};
use std::fs;
use tempfile::TempDir;

/// A whitelist file in a private temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    /// Temporary directory holding the whitelist file
    pub dir: TempDir,
    /// Location of the whitelist file
    pub file: WhitelistFile,
}

impl Fixture {
    /// Creates a fixture whose whitelist file does not exist yet.
    pub fn missing() -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let file = WhitelistFile::new(dir.path(), "whitelist.txt");
        Self { dir, file }
    }

    /// Creates a fixture with the given lines written to the whitelist file.
    pub fn with_lines(lines: &[&str]) -> Self {
        let fixture = Self::missing();
        fixture.write_lines(lines);
        fixture
    }

    /// Replaces the file content, one entry per line.
    pub fn write_lines(&self, lines: &[&str]) {
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        fs::write(self.file.path(), content).expect("whitelist should be written");
    }

    /// Builds an engine over this fixture's file.
    pub fn engine(&self) -> Whitelist {
        Whitelist::new(self.file.clone())
    }
}

/// Converts raw values into identities.
pub fn ids(values: &[u64]) -> Vec<Identity> {
    values.iter().copied().map(Identity::new).collect()
}
