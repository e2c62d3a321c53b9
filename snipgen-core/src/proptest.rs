//! Property-based tests for scanning, compilation and rendering.
//!
//! These tests check the invariants that hold for every phrase:
//!
//! - Compiled patterns are anchored and compile as regexes
//! - Scans cover the phrase without gaps and always make progress
//! - Capture groups line up with placeholders and inferred types
//! - Patterns compiled from a phrase match the phrase with other values
