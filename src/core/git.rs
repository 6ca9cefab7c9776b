//! Git repository operations via the `git` command line.
//!
//! This module provides a thin interface to git through the [`GitRepo`] struct.
//! Every query shells out to the `git` binary with an explicit working
//! directory and hands the captured stdout back as lines, so the process-wide
//! current directory is never touched.
//!
//! # Public API
//! - [`GitRepo`]: Handle on a single repository working tree
//! - [`git_available`]: Preflight check that a `git` binary is on PATH
//!
//! # Key Features
//! - **Status reading**: Porcelain status lines including untracked files
//! - **Branch listing**: Verbose branch output with upstream tracking info
//! - **Stash listing**: Raw `git stash list` output
//! - **Error surfacing**: Failed subprocesses return the stderr text instead
//!   of being conflated with empty output

use crate::core::error::{Result, WipScanError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository whose working tree root is `path`.
    ///
    /// The path must contain `.git` metadata. Both a `.git` directory and a
    /// `.git` file (linked worktrees, submodule checkouts) are accepted.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.join(".git").exists() {
            return Err(WipScanError::not_a_repository(root));
        }
        Ok(GitRepo { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name of the working tree root, used as the report header
    pub fn name(&self) -> String {
        match self.root.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.root.display().to_string(),
        }
    }

    /// Run a git subcommand inside this repository and return its stdout
    /// split into lines.
    ///
    /// A non-zero exit status becomes [`WipScanError::GitCommandFailed`]
    /// carrying the subprocess stderr, so callers can tell a failed command
    /// apart from one that legitimately printed nothing.
    pub fn run(&self, args: &[&str]) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(WipScanError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WipScanError::git_command_failed(
                args.join(" "),
                stderr.trim(),
            ));
        }

        Ok(split_lines(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Porcelain status lines, one per pending working tree change.
    ///
    /// Untracked files are listed individually rather than as collapsed
    /// directory entries.
    pub fn status_lines(&self) -> Result<Vec<String>> {
        self.run(&["status", "--porcelain", "-uall"])
    }

    /// Verbose local branch listing with upstream tracking annotations.
    ///
    /// When `main_branch` is given, branches already merged into it are
    /// filtered out by git itself.
    pub fn branch_lines(&self, main_branch: Option<&str>) -> Result<Vec<String>> {
        match main_branch {
            Some(main) => self.run(&["branch", "-vv", "--no-merged", main]),
            None => self.run(&["branch", "-vv"]),
        }
    }

    /// Raw `git stash list` output, one line per stash entry
    pub fn stash_lines(&self) -> Result<Vec<String>> {
        self.run(&["stash", "list"])
    }
}

/// Check that a `git` binary can be spawned at all.
///
/// Runs `git --version` with all output discarded. Called once before a scan
/// so a missing executable is reported as a single fatal error instead of
/// once per repository.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Split captured subprocess output into lines regardless of line-ending
/// style, dropping the empty segment after a trailing newline.
fn split_lines(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
