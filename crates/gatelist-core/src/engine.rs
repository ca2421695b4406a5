//! The reload engine.
//!
//! [`Whitelist`] owns the current [`MembershipSet`] and replaces it wholesale
//! on every [`reload`](Whitelist::reload). Published sets are shared as
//! `Arc`s and never mutated, so a reader holding one always sees a complete
//! snapshot.
//!
//! The engine does no background work and holds no locks. Hosts that reload
//! from more than one thread must serialize calls themselves, typically with
//! a `Mutex<Whitelist>` or `RwLock<Whitelist>` at their composition root.
//!
//! # Usage
//!
//! ```no_run
//! use gatelist_core::{Identity, Whitelist, WhitelistFile};
//!
//! let mut whitelist = Whitelist::new(WhitelistFile::new("/srv/host", "whitelist.txt"));
//!
//! let outcome = whitelist.reload()?;
//! for identity in outcome.removed() {
//!     println!("revoking {identity}");
//! }
//!
//! assert_eq!(whitelist.get().len(), outcome.current.len());
//! let allowed = whitelist.contains(Identity::new(76561190000000001));
//! # let _ = allowed;
//! # Ok::<(), gatelist_core::Error>(())
//! ```

use std::sync::Arc;

use crate::bootstrap::WhitelistFile;
use crate::config::GatelistConfig;
use crate::parse::parse_lines;
use crate::types::{Identity, MembershipSet, ReloadOutcome, ReloadStats};
use crate::Result;

/// File-backed whitelist with reload-and-diff semantics.
#[derive(Debug)]
pub struct Whitelist {
    file: WhitelistFile,
    members: Arc<MembershipSet>,
    trace_entries: bool,
}

impl Whitelist {
    /// Creates an engine for `file` with an empty membership set.
    ///
    /// Nothing is read until [`reload`](Self::reload) is called.
    pub fn new(file: WhitelistFile) -> Self {
        Self {
            file,
            members: Arc::new(MembershipSet::new()),
            trace_entries: false,
        }
    }

    /// Creates an engine from loaded configuration.
    pub fn from_config(config: &GatelistConfig) -> Self {
        Self::new(config.whitelist_file()).with_trace_entries(config.trace_entries)
    }

    /// Enables debug-level events for every accepted or rejected line.
    pub fn with_trace_entries(mut self, enabled: bool) -> Self {
        self.trace_entries = enabled;
        self
    }

    /// The backing file.
    pub fn file(&self) -> &WhitelistFile {
        &self.file
    }

    /// Returns `true` if the backing file is present.
    pub fn exists(&self) -> bool {
        self.file.exists()
    }

    /// Overwrites the backing file with the bootstrap template.
    pub fn initialize(&self) -> Result<()> {
        self.file.initialize()
    }

    /// Re-reads the backing file and replaces the membership set.
    ///
    /// A missing file is created from the template first. `previous` in the
    /// returned outcome is the set held before this call, or `None` if that
    /// set was empty.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be created or read. The membership set held
    /// before the call is then left in place.
    pub fn reload(&mut self) -> Result<ReloadOutcome> {
        if !self.file.exists() {
            tracing::warn!(
                path = %self.file.path().display(),
                "No whitelist file found, initializing it with default settings"
            );
            self.file.initialize()?;
        }

        let lines = self.file.read_lines()?;

        let previous = if self.members.is_empty() {
            None
        } else {
            Some(Arc::clone(&self.members))
        };

        if lines.is_empty() {
            tracing::warn!(
                path = %self.file.path().display(),
                "No identities found in whitelist file"
            );
            let current = Arc::new(MembershipSet::new());
            self.members = Arc::clone(&current);
            return Ok(ReloadOutcome {
                current,
                previous,
                stats: ReloadStats::default(),
            });
        }

        let (members, stats) = parse_lines(&lines, self.trace_entries);

        tracing::info!(
            path = %self.file.path().display(),
            members = members.len(),
            duplicates = stats.duplicates,
            rejected = stats.rejected,
            "Whitelist reloaded"
        );

        let current = Arc::new(members);
        self.members = Arc::clone(&current);

        Ok(ReloadOutcome {
            current,
            previous,
            stats,
        })
    }

    /// Snapshot of the membership from the last successful reload.
    ///
    /// Empty until the first reload.
    pub fn get(&self) -> Arc<MembershipSet> {
        Arc::clone(&self.members)
    }

    /// Returns `true` if `identity` is in the current membership.
    pub fn contains(&self, identity: Identity) -> bool {
        self.members.contains(identity)
    }
}
