//! Repository discovery on the filesystem.
//!
//! Downward search walks one or more root directories and collects every
//! git repository beneath them, pruning the walk at each repository root so
//! nested checkouts (vendored trees, submodule working copies) are not
//! reported separately. Upward search resolves the repository enclosing a
//! given directory, for running inside a checkout.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names skipped during downward search. Trash, media folders,
/// toolchain caches and dependency trees are full of repositories nobody
/// wants reported.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 10] = [
    ".Trash",
    "Library",
    "Music",
    "Movies",
    "Pictures",
    "node_modules",
    ".cargo",
    ".rustup",
    ".cache",
    ".local",
];

/// A directory is a repository root when it carries `.git` metadata,
/// whether as a directory or as a worktree pointer file
pub fn is_repository_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Find every repository root beneath the given search roots.
///
/// Results are sorted lexicographically and contain no path nested beneath
/// another result, even when the search roots overlap.
pub fn find_repositories(roots: &[PathBuf], excluded: &HashSet<String>) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for root in roots {
        collect_repositories(root, excluded, &mut found);
    }
    found.sort();
    prune_nested(found)
}

fn collect_repositories(root: &Path, excluded: &HashSet<String>, found: &mut Vec<PathBuf>) {
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    loop {
        let entry = match walker.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                log::debug!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        // The excluded-name check spares the search roots themselves, so an
        // explicitly requested directory is always scanned.
        let name = entry.file_name().to_string_lossy();
        if entry.depth() > 0 && excluded.contains(name.as_ref()) {
            walker.skip_current_dir();
            continue;
        }

        if is_repository_root(entry.path()) {
            found.push(entry.path().to_path_buf());
            walker.skip_current_dir();
        }
    }
}

/// Drop every path nested beneath an earlier one. Relies on the input being
/// sorted, which places an ancestor directly before all of its descendants.
fn prune_nested(sorted: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut result: Vec<PathBuf> = Vec::new();
    for path in sorted {
        if let Some(kept) = result.last() {
            if path.starts_with(kept) {
                continue;
            }
        }
        result.push(path);
    }
    result
}

/// Find the repository enclosing `dir` by walking from its absolute form
/// toward the filesystem root
pub fn find_enclosing_repository(dir: &Path) -> Option<PathBuf> {
    let absolute = match dir.canonicalize() {
        Ok(path) => path,
        Err(_) => env::current_dir().ok()?.join(dir),
    };

    absolute
        .ancestors()
        .find(|candidate| is_repository_root(candidate))
        .map(Path::to_path_buf)
}
