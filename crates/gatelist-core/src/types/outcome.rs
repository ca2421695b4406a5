//! Result of a single reload.

use std::sync::Arc;

use super::{Identity, MembershipSet};

/// Line counts gathered while parsing a whitelist file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadStats {
    /// Total lines read from the file.
    pub lines: usize,
    /// Lines that produced a new member.
    pub accepted: usize,
    /// Valid identities already seen earlier in the file.
    pub duplicates: usize,
    /// Lines discarded because they contain the comment marker.
    pub comments: usize,
    /// Empty or whitespace-only lines.
    pub blank: usize,
    /// Lines that are not a valid identity.
    pub rejected: usize,
}

/// Membership before and after a reload.
///
/// `previous` is `None` when the engine held no members before the reload:
/// both on the very first reload and after a reload that found nobody. Hosts
/// that revoke access for dropped identities should use [`removed`](Self::removed).
#[derive(Debug, Clone)]
pub struct ReloadOutcome {
    /// Membership parsed from the file by this reload.
    pub current: Arc<MembershipSet>,
    /// Membership retained from the prior reload, if it was non-empty.
    pub previous: Option<Arc<MembershipSet>>,
    /// Parse statistics for this reload.
    pub stats: ReloadStats,
}

impl ReloadOutcome {
    /// Returns `true` if there was no prior membership to compare against.
    pub fn is_first_load(&self) -> bool {
        self.previous.is_none()
    }

    /// Identities present before this reload but no longer listed.
    pub fn removed(&self) -> Vec<Identity> {
        match &self.previous {
            Some(previous) => previous.difference(&self.current),
            None => Vec::new(),
        }
    }

    /// Identities listed now that were not present before this reload.
    pub fn added(&self) -> Vec<Identity> {
        match &self.previous {
            Some(previous) => self.current.difference(previous),
            None => self.current.to_sorted_vec(),
        }
    }
}
