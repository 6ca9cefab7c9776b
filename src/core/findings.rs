//! Findings derived from raw git output lines.
//!
//! Working tree findings quote the porcelain status lines verbatim, so the
//! report shows exactly what `git status` would. Stash findings collapse to
//! a single fixed line because only the presence of stashed changes matters,
//! not their contents.

/// The one finding emitted when a repository has any stash entries
pub const STASH_FINDING: &str = "There are stashed changes.";

/// Every non-empty porcelain status line, quoted verbatim in git's order
pub fn status_findings(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !line.is_empty())
        .cloned()
        .collect()
}

/// The fixed stash finding when the stash listing is non-empty
pub fn stash_finding(lines: &[String]) -> Option<String> {
    if lines.iter().any(|line| !line.is_empty()) {
        Some(STASH_FINDING.to_string())
    } else {
        None
    }
}
