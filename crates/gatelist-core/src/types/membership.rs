//! Deduplicated set of whitelisted identities.

use std::collections::HashSet;
use std::collections::hash_set;

use super::Identity;

/// Who currently has access.
///
/// Unordered and free of duplicates. The reload engine builds a fresh set on
/// every reload and publishes it whole; a published set is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSet {
    members: HashSet<Identity>,
}

impl MembershipSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if nobody is whitelisted.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `identity` is a member.
    pub fn contains(&self, identity: Identity) -> bool {
        self.members.contains(&identity)
    }

    /// Adds an identity, returning `false` if it was already present.
    pub fn insert(&mut self, identity: Identity) -> bool {
        self.members.insert(identity)
    }

    /// Iterates members in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Identity> {
        self.members.iter()
    }

    /// Members in ascending order, for stable output.
    pub fn to_sorted_vec(&self) -> Vec<Identity> {
        let mut ids: Vec<Identity> = self.members.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Identities in `self` that are not in `other`, ascending.
    ///
    /// ```
    /// use gatelist_core::{Identity, MembershipSet};
    ///
    /// let before: MembershipSet = [1, 2, 3].into_iter().map(Identity::new).collect();
    /// let after: MembershipSet = [2, 3, 4].into_iter().map(Identity::new).collect();
    ///
    /// assert_eq!(before.difference(&after), vec![Identity::new(1)]);
    /// assert_eq!(after.difference(&before), vec![Identity::new(4)]);
    /// ```
    pub fn difference(&self, other: &MembershipSet) -> Vec<Identity> {
        let mut ids: Vec<Identity> = self.members.difference(&other.members).copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<Identity> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = Identity>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MembershipSet {
    type Item = &'a Identity;
    type IntoIter = hash_set::Iter<'a, Identity>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
