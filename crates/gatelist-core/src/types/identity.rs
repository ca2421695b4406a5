//! Numeric identity of a whitelisted principal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A platform account identifier admitted by the whitelist.
///
/// Identities carry no structure beyond their 64-bit value; two identities
/// are the same principal exactly when their values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(u64);

impl Identity {
    /// Creates an identity from its raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatelist_core::Identity;
    ///
    /// let id = Identity::new(76561190000000001);
    /// assert_eq!(id.get(), 76561190000000001);
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Identity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Identity> for u64 {
    fn from(id: Identity) -> Self {
        id.0
    }
}

/// Error returned when text is not a non-negative 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{input}` is not an unsigned 64-bit integer")]
pub struct ParseIdentityError {
    input: String,
    #[source]
    source: ParseIntError,
}

impl ParseIdentityError {
    /// The rejected text, exactly as supplied.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Identity {
    type Err = ParseIdentityError;

    /// Parses a decimal identity.
    ///
    /// Surrounding ASCII whitespace and a single leading `+` are accepted.
    /// A `-`, digit separators, and anything past `u64::MAX` are rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim_ascii()
            .parse::<u64>()
            .map(Self)
            .map_err(|source| ParseIdentityError {
                input: s.to_string(),
                source,
            })
    }
}
