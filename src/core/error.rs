//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`WipScanError`] which provides comprehensive error handling
//! for all wip-scan operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`WipScanError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, WipScanError>`
//!
//! # Error Categories
//! - **Git invocation**: Missing git executable, failed subprocesses
//! - **Repository lookup**: Paths that are not repositories, unresolvable home
//! - **File operations**: I/O errors while reading configuration
//! - **Configuration**: Malformed JSON in the config file

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for wip-scan
#[derive(Error, Debug)]
pub enum WipScanError {
    // Git invocation errors
    #[error("Could not find a `git` executable on PATH")]
    GitNotFound,

    #[error("git {args} failed: {detail}")]
    GitCommandFailed { args: String, detail: String },

    // Repository lookup errors
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Could not determine a home directory to scan")]
    HomeDirectoryNotFound,

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using WipScanError
pub type Result<T> = std::result::Result<T, WipScanError>;

impl WipScanError {
    /// Create a git command failed error from the invoked arguments and
    /// whatever the subprocess left on stderr
    pub fn git_command_failed(args: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            args: args.into(),
            detail: detail.into(),
        }
    }

    /// Create a not-a-repository error
    pub fn not_a_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
