#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Gatelist Core Library
//!
//! Loads a line-oriented whitelist of numeric identities, keeps the current
//! membership in memory, and reports what changed on every reload so a host
//! can revoke access for identities that were dropped.
//!
//! # Modules
//!
//! - [`bootstrap`]: Whitelist file location, creation, and reading
//! - [`config`]: TOML configuration
//! - [`engine`]: The [`Whitelist`] reload engine
//! - [`error`]: Error types and Result alias
//! - [`parse`]: Line classification and parsing
//! - [`template`]: Bootstrap template and syntax constants
//! - [`types`]: Identities, membership sets, reload outcomes

pub mod bootstrap;
pub mod config;
pub mod engine;
pub mod error;
pub mod parse;
pub mod template;
pub mod types;

// Re-exports for convenience
pub use bootstrap::WhitelistFile;
pub use config::GatelistConfig;
pub use engine::Whitelist;
pub use error::{Error, Result};
pub use types::{Identity, MembershipSet, ParseIdentityError, ReloadOutcome, ReloadStats};
