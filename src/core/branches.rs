//! Branch tracking analysis from `git branch -vv` output.
//!
//! This module classifies each local branch by its relationship to an
//! upstream tracking branch and renders findings for the ones that carry
//! unpushed or unpublished work.
//!
//! # Public API
//! - [`BranchTracking`]: Tracking state of a single local branch
//! - [`parse_branch_lines`]: Branch listing lines to a name-keyed map
//! - [`branch_findings`]: Tracking map to report lines, ordered by name
//!
//! # Line grammar
//! A reportable line starts with an optional `*` or `+` marker, then the
//! branch name, an abbreviated commit hash, and optionally a bracketed
//! upstream summary such as `[origin/main: ahead 2]`. Detached HEAD entries
//! name no branch (the field starts with a parenthesis) and fail the
//! pattern, so they are skipped.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static RE_BRANCH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*+]?\s+([^\s(]\S*)\s+[0-9a-f]+(?:\s+\[([^\]]+)\])?")
        .expect("invalid RE_BRANCH_LINE regex")
});

static RE_AHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ahead (\d+)").expect("invalid RE_AHEAD regex"));

/// Relationship of a local branch to its upstream tracking branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchTracking {
    /// No upstream configured, every commit is local-only
    Untracked,
    /// Upstream exists and holds every local commit.
    ///
    /// Branches that are only behind their upstream, and branches whose
    /// upstream ref is gone, land here as well since neither has unpushed
    /// commits.
    UpToDate,
    /// Upstream exists but is missing this many local commits
    Ahead(u32),
}

impl BranchTracking {
    /// Report line for a branch in this state, or `None` when there is
    /// nothing to report
    pub fn finding(&self, name: &str) -> Option<String> {
        match self {
            BranchTracking::Untracked => {
                Some(format!("{} is not tracking a remote branch.", name))
            }
            BranchTracking::UpToDate => None,
            BranchTracking::Ahead(count) => Some(format!(
                "{} is ahead of its remote branch by {} commits.",
                name, count
            )),
        }
    }
}

/// Parse `git branch -vv` output into a map of branch name to tracking
/// state.
///
/// Lines that do not match the branch grammar are ignored. Should the same
/// name somehow appear twice, the last occurrence wins.
pub fn parse_branch_lines(lines: &[String]) -> BTreeMap<String, BranchTracking> {
    let mut tracking = BTreeMap::new();

    for line in lines {
        let Some(captures) = RE_BRANCH_LINE.captures(line) else {
            continue;
        };
        let name = captures[1].to_string();
        let state = match captures.get(2) {
            None => BranchTracking::Untracked,
            Some(bracket) => match RE_AHEAD
                .captures(bracket.as_str())
                .and_then(|ahead| ahead[1].parse().ok())
            {
                Some(count) => BranchTracking::Ahead(count),
                None => BranchTracking::UpToDate,
            },
        };
        tracking.insert(name, state);
    }

    tracking
}

/// Render the reportable branches as finding lines, ordered by branch name
pub fn branch_findings(tracking: &BTreeMap<String, BranchTracking>) -> Vec<String> {
    tracking
        .iter()
        .filter_map(|(name, state)| state.finding(name))
        .collect()
}
