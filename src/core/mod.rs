//! Core functionality for the wip-scan tool.
//!
//! This module provides the fundamental building blocks for repository
//! discovery, git queries, branch tracking analysis, and report output.

pub mod branches;
pub mod config;
pub mod dirs;
pub mod error;
pub mod findings;
pub mod git;
pub mod locate;
pub mod output;
pub mod scan;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, WipScanError};

// === Git operations ===
// Subprocess-backed repository interface for status, branch and stash queries
pub use git::{git_available, GitRepo};

// === Branch analysis ===
// Tracking state parsed from verbose branch listings
pub use branches::{branch_findings, parse_branch_lines, BranchTracking};

// === Working tree and stash findings ===
// Report lines for pending changes and stashed work
pub use findings::{stash_finding, status_findings, STASH_FINDING};

// === Repository discovery ===
// Downward search with pruning plus upward enclosing-repository lookup
pub use locate::{
    find_enclosing_repository, find_repositories, is_repository_root, DEFAULT_EXCLUDED_DIRS,
};

// === Scan orchestration ===
// Target resolution and per-repository finding collection
pub use scan::{resolve_scan_target, roots_from_env_value, wip, ScanTarget, ROOTS_ENV_VAR};

// === Configuration ===
// Optional JSON config carrying extra exclusions and a main branch name
pub use config::ScanConfig;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_finding, print_repository_header, print_warning};
