//! Property-based tests for core types.
