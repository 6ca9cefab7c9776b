//! Wip Scan - A lightweight Rust CLI tool that finds unfinished work across
//! git repositories.
//!
//! This library provides the core functionality for wip-scan: locating
//! repositories on disk, querying them through the `git` command line, and
//! reporting uncommitted changes, unpushed branches, and stashed work.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - Repository discovery with pruning and exclusions
//! - Git queries over subprocesses with an explicit working directory
//! - Branch tracking analysis from verbose branch listings
//! - Error handling and result types
//! - Report formatting

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    branch_findings,
    find_enclosing_repository,
    // Repository discovery
    find_repositories,
    // Git operations
    git_available,
    is_repository_root,
    // Branch analysis
    parse_branch_lines,
    resolve_scan_target,

    roots_from_env_value,
    stash_finding,
    // Findings
    status_findings,
    // Scan orchestration
    wip,

    BranchTracking,
    GitRepo,
    Result,
    // Configuration
    ScanConfig,
    ScanTarget,
    // Error handling
    WipScanError,

    DEFAULT_EXCLUDED_DIRS,
    ROOTS_ENV_VAR,
    STASH_FINDING,
};
