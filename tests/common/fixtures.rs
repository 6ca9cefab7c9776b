//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories in specific reportable
//! states so report tests read as scenarios instead of git choreography.

#![allow(dead_code)]

use super::repository::*;
use wip_scan::core::error::Result;

/// Scenario: fully tracked clone with one modified tracked file.
///
/// The only expected finding is the porcelain line ` M initial.txt`.
pub fn create_repo_with_modified_file() -> Result<(TestRepo, TestRepo)> {
    let (origin, clone) = setup_tracked_repo()?;
    create_file(&clone.path, "initial.txt", "modified content\n")?;
    Ok((origin, clone))
}

/// Scenario: fully tracked clone with nothing to report
pub fn create_clean_tracked_repo() -> Result<(TestRepo, TestRepo)> {
    setup_tracked_repo()
}

/// Scenario: tracked clone whose only finding is a stash entry.
///
/// A tracked file is modified and immediately stashed, leaving the working
/// tree clean again.
pub fn create_repo_with_stash() -> Result<(TestRepo, TestRepo)> {
    let (origin, clone) = setup_tracked_repo()?;
    create_file(&clone.path, "initial.txt", "half-finished work\n")?;
    git_stash(&clone.path)?;
    Ok((origin, clone))
}

/// Scenario: tracked clone whose `main` is ahead of `origin/main` by
/// `count` commits, with a clean working tree
pub fn create_repo_ahead_by(count: u32) -> Result<(TestRepo, TestRepo)> {
    let (origin, clone) = setup_tracked_repo()?;
    make_commits(&clone.path, count)?;
    Ok((origin, clone))
}

/// Scenario: standalone repository with a commit but no remote, so `main`
/// tracks nothing
pub fn create_untracked_branch_repo() -> Result<TestRepo> {
    setup_test_repo_with_initial_commit()
}

/// Scenario: repository at `path` with a single untracked file, handy for
/// discovery tests that need a visible finding
pub fn make_dirty_repo_at(path: &std::path::Path) -> Result<()> {
    init_repo_at(path)?;
    create_file(path, "todo.txt", "unfinished\n")
}
