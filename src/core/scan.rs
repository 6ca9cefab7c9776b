//! Scan orchestration: deciding what to scan and collecting a repository's
//! findings.
//!
//! # Public API
//! - [`wip`]: All findings for one repository, in report order
//! - [`ScanTarget`]: What a scan will look at
//! - [`resolve_scan_target`]: Argument, environment and fallback resolution
//!
//! # Finding order
//! Working tree status lines come first in git's own order, then branch
//! findings ordered by branch name, then the stash line. Repeated scans of
//! an unchanged repository produce identical output.

use crate::core::branches::{branch_findings, parse_branch_lines};
use crate::core::config::ScanConfig;
use crate::core::error::{Result, WipScanError};
use crate::core::findings::{stash_finding, status_findings};
use crate::core::git::GitRepo;
use crate::core::locate::find_enclosing_repository;
use std::env;
use std::path::PathBuf;

/// Environment variable holding whitespace-separated search roots
pub const ROOTS_ENV_VAR: &str = "WIP_SCAN_ROOTS";

/// What a scan will look at, resolved before any repository is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// Search these roots downward for repositories
    Roots(Vec<PathBuf>),
    /// Report on this single repository only
    Repository(PathBuf),
}

/// Collect every finding for one repository.
///
/// Runs the three git queries and assembles their findings: status lines,
/// then branch findings, then the stash line. A repository with nothing to
/// report yields an empty list.
pub fn wip(repo: &GitRepo, config: &ScanConfig) -> Result<Vec<String>> {
    let mut findings = status_findings(&repo.status_lines()?);

    let tracking = parse_branch_lines(&repo.branch_lines(config.main_branch.as_deref())?);
    findings.extend(branch_findings(&tracking));

    if let Some(stash) = stash_finding(&repo.stash_lines()?) {
        findings.push(stash);
    }

    Ok(findings)
}

/// Decide what to scan.
///
/// Priority order: positional arguments, then the `WIP_SCAN_ROOTS`
/// environment variable, then the repository enclosing the current
/// directory, and finally the user's home directory. Only the last step can
/// fail, when no home directory is resolvable.
pub fn resolve_scan_target(args: &[PathBuf]) -> Result<ScanTarget> {
    if !args.is_empty() {
        return Ok(ScanTarget::Roots(existing_directories(args)));
    }

    if let Ok(value) = env::var(ROOTS_ENV_VAR) {
        if !value.trim().is_empty() {
            return Ok(ScanTarget::Roots(roots_from_env_value(&value)));
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = find_enclosing_repository(&cwd) {
            return Ok(ScanTarget::Repository(root));
        }
    }

    match dirs::home_dir() {
        Some(home) => Ok(ScanTarget::Roots(vec![home])),
        None => Err(WipScanError::HomeDirectoryNotFound),
    }
}

/// Split an environment value on whitespace into search roots, keeping the
/// entries that exist as directories
pub fn roots_from_env_value(value: &str) -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = value.split_whitespace().map(PathBuf::from).collect();
    existing_directories(&paths)
}

fn existing_directories(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| {
            let keep = path.is_dir();
            if !keep {
                log::debug!("Ignoring search root that is not a directory: {}", path.display());
            }
            keep
        })
        .cloned()
        .collect()
}
