//! Output formatting utilities for consistent CLI presentation.
//!
//! Report lines go to stdout in a shape other tooling can consume: a
//! repository name on its own line with findings indented two spaces
//! beneath it. Errors and warnings go to stderr so a piped report stays
//! clean.
//!
//! # Colors
//! - Repository names in bold blue
//! - "✕ Error:" in red, "⚠ Warning:" in yellow
//! - Message text in white

use colored::*;

/// Prints the report header for one repository
///
/// # Format
/// ```text
/// <name>
/// ```
pub fn print_repository_header(name: &str) {
    println!("{}", name.blue().bold());
}

/// Prints a single finding, indented beneath its repository header
///
/// # Format
/// ```text
///   <finding>
/// ```
pub fn print_finding(finding: &str) {
    println!("  {}", finding.white());
}

/// Formats and prints a fatal error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a per-repository warning without interrupting the
/// report
///
/// # Format
/// ```text
/// ⚠ Warning: <message>
/// ```
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠ Warning:".yellow(), message.white());
}
