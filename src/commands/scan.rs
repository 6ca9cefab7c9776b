use crate::core::{
    config::ScanConfig,
    error::{Result, WipScanError},
    git::{git_available, GitRepo},
    locate::find_repositories,
    output::{print_finding, print_repository_header, print_warning},
    scan::{resolve_scan_target, wip, ScanTarget},
};
use std::path::{Path, PathBuf};

pub fn execute_scan(roots: Vec<PathBuf>) -> Result<()> {
    // Fail once up front instead of once per repository
    if !git_available() {
        return Err(WipScanError::GitNotFound);
    }

    let config = ScanConfig::load();

    let repositories = match resolve_scan_target(&roots)? {
        ScanTarget::Repository(root) => vec![root],
        ScanTarget::Roots(search_roots) => {
            log::debug!("Searching {} root(s) for repositories", search_roots.len());
            find_repositories(&search_roots, &config.excluded_names())
        }
    };

    log::debug!("Scanning {} repositories", repositories.len());

    for root in &repositories {
        // One broken checkout must not end the scan
        if let Err(err) = scan_repository(root, &config) {
            print_warning(&format!("Skipping {}: {}", root.display(), err));
        }
    }

    Ok(())
}

fn scan_repository(root: &Path, config: &ScanConfig) -> Result<()> {
    let repo = GitRepo::open(root)?;
    let findings = wip(&repo, config)?;

    if findings.is_empty() {
        return Ok(());
    }

    print_repository_header(&repo.name());
    for finding in &findings {
        print_finding(finding);
    }

    Ok(())
}
