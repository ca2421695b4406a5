//! Core types for whitelist membership.

mod identity;
mod membership;
mod outcome;
mod proptests;

pub use identity::{Identity, ParseIdentityError};
pub use membership::MembershipSet;
pub use outcome::{ReloadOutcome, ReloadStats};
