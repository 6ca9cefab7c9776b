//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating scan report output: repository
//! headers, indented findings, and the fixed finding texts.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate matching a repository header on its own line
pub fn has_repository_header(name: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!("(?m)^{}$", name)).unwrap()
}

/// Creates a predicate matching a finding line, including its two-space
/// indent
pub fn has_finding(finding: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("  {}", finding))
}

/// Creates a predicate for the untracked-branch finding
pub fn has_untracked_branch(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{} is not tracking a remote branch.", branch))
}

/// Creates a predicate for the ahead-of-remote finding
pub fn has_ahead_branch(branch: &str, count: u32) -> impl Predicate<str> {
    predicates::str::contains(format!(
        "{} is ahead of its remote branch by {} commits.",
        branch, count
    ))
}

/// Creates a predicate for the stash finding
pub fn has_stashed_changes() -> impl Predicate<str> {
    predicates::str::contains("There are stashed changes.")
}

/// Creates a predicate matching a completely silent report
pub fn empty_report() -> impl Predicate<str> {
    predicates::str::is_empty()
}
