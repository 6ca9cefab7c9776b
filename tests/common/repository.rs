//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various working tree, branch tracking, and stash states.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wip_scan::core::error::{Result, WipScanError};

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs a git command in the given directory and fails the test path when
/// git itself fails, so broken fixtures surface immediately
pub fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(WipScanError::Io)?;

    if !output.status.success() {
        return Err(WipScanError::git_command_failed(
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }

    Ok(())
}

/// Initializes a git repository at an existing path.
///
/// The branch is always named `main` and a throwaway identity is configured
/// so commits never prompt.
pub fn init_repo_at(repo_path: &Path) -> Result<()> {
    fs::create_dir_all(repo_path).map_err(WipScanError::Io)?;
    run_git(repo_path, &["init", "-b", "main"])?;
    run_git(repo_path, &["config", "user.name", "Test User"])?;
    run_git(repo_path, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository on a
/// branch named `main`, and sets up basic git configuration to avoid user
/// prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(WipScanError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();
    init_repo_at(&repo_path)?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit
///
/// Creates a repository using `setup_test_repo()` and adds an initial
/// commit with a basic file to establish a git history.
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Sets up an origin repository and a clone whose `main` tracks
/// `origin/main`.
///
/// Returns `(origin, clone)`. The clone starts fully in sync, so a fresh
/// one has no findings at all. Keep both values alive for the duration of
/// the test.
pub fn setup_tracked_repo() -> Result<(TestRepo, TestRepo)> {
    let origin = setup_test_repo_with_initial_commit()?;

    let temp_dir = TempDir::new().map_err(WipScanError::Io)?;
    let clone_path = temp_dir.path().join("clone");
    run_git(
        temp_dir.path(),
        &["clone", &origin.path.to_string_lossy(), "clone"],
    )?;
    run_git(&clone_path, &["config", "user.name", "Test User"])?;
    run_git(&clone_path, &["config", "user.email", "test@example.com"])?;

    let clone = TestRepo {
        temp_dir,
        path: clone_path,
    };
    Ok((origin, clone))
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(WipScanError::Io)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    run_git(repo_path, &["commit", "-m", message])
}

/// Stashes whatever is pending in the working tree
pub fn git_stash(repo_path: &Path) -> Result<()> {
    run_git(repo_path, &["stash", "push"])
}

/// Creates `count` commits, each adding one new file
pub fn make_commits(repo_path: &Path, count: u32) -> Result<()> {
    for i in 1..=count {
        let filename = format!("work{}.txt", i);
        create_file(repo_path, &filename, "local work\n")?;
        git_add(repo_path, &filename)?;
        git_commit(repo_path, &format!("Local commit {}", i))?;
    }
    Ok(())
}

/// Creates a local branch without switching to it
pub fn git_branch(repo_path: &Path, name: &str) -> Result<()> {
    run_git(repo_path, &["branch", name])
}
