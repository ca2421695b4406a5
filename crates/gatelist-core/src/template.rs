//! Default content written when no whitelist file exists yet.

/// The comment marker. Any line containing it is discarded whole.
pub const COMMENT_MARKER: char = '#';

/// Default whitelist file name.
pub const DEFAULT_FILE_NAME: &str = "whitelist.txt";

/// Bootstrap template: syntax notes and a shape hint, but no members.
pub const DEFAULT_TEMPLATE: &str = "\
#
# Edit this file to add or remove identities from the whitelist.
#
# When the host reloads this file on change, it picks up edits without a
# restart. Identities removed from the list can be acted on by the host,
# for example by disconnecting them.
#
# Put one identity per line. You can use comments in this file with the #
# character, but you cannot put a comment on the same line as an identity:
# such a line is skipped entirely.
#
# 10101010101010101
#
";
