//! Line classification and whitelist parsing.
//!
//! The rules, applied to each line on its own:
//!
//! 1. A line containing `#` anywhere is a comment and is discarded whole.
//!    Trailing comments are not stripped; `765611900000 # note` is dropped.
//! 2. An empty or ASCII-whitespace-only line is blank.
//! 3. A line that parses as an [`Identity`] is a candidate member.
//! 4. Anything else is invalid and skipped.
//!
//! Nothing in a single line can fail the whole file.

use crate::template::COMMENT_MARKER;
use crate::types::{Identity, MembershipSet, ReloadStats};

/// How a single whitelist line was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Contains the comment marker.
    Comment,
    /// Empty or ASCII whitespace only.
    Blank,
    /// A well-formed identity.
    Identity(Identity),
    /// Not a comment, not blank, not an identity.
    Invalid,
}

/// Classifies one line of a whitelist file.
///
/// ```
/// use gatelist_core::parse::{classify_line, LineKind};
/// use gatelist_core::Identity;
///
/// assert_eq!(classify_line("# note"), LineKind::Comment);
/// assert_eq!(classify_line("12 # note"), LineKind::Comment);
/// assert_eq!(classify_line(""), LineKind::Blank);
/// assert_eq!(classify_line("12"), LineKind::Identity(Identity::new(12)));
/// assert_eq!(classify_line("twelve"), LineKind::Invalid);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    if line.contains(COMMENT_MARKER) {
        return LineKind::Comment;
    }
    if line.trim_ascii().is_empty() {
        return LineKind::Blank;
    }
    match line.parse::<Identity>() {
        Ok(identity) => LineKind::Identity(identity),
        Err(_) => LineKind::Invalid,
    }
}

/// Parses whitelist lines into a fresh membership set.
///
/// Later duplicates are dropped silently. With `trace` set, every accepted
/// identity and every invalid line is reported at debug level; otherwise no
/// per-line events are emitted.
pub fn parse_lines<I, S>(lines: I, trace: bool) -> (MembershipSet, ReloadStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut members = MembershipSet::new();
    let mut stats = ReloadStats::default();

    for line in lines {
        let line = line.as_ref();
        stats.lines += 1;

        match classify_line(line) {
            LineKind::Comment => stats.comments += 1,
            LineKind::Blank => stats.blank += 1,
            LineKind::Identity(identity) => {
                if members.insert(identity) {
                    stats.accepted += 1;
                    if trace {
                        tracing::debug!(identity = %identity, "Adding identity to whitelist");
                    }
                } else {
                    stats.duplicates += 1;
                }
            }
            LineKind::Invalid => {
                stats.rejected += 1;
                if trace {
                    tracing::debug!(line = %line, "Unable to parse whitelist line as an identity");
                }
            }
        }
    }

    (members, stats)
}
