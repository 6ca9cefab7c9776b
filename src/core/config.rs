use crate::core::dirs::get_config_directory;
use crate::core::error::WipScanError;
use crate::core::locate::DEFAULT_EXCLUDED_DIRS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ScanConfig {
    /// Extra directory names to skip during downward search
    #[serde(default)]
    pub exclude: Vec<String>,
    /// When set, branches already merged into this branch are left out of
    /// the branch listing
    #[serde(default)]
    pub main_branch: Option<String>,
}

impl ScanConfig {
    /// Load the config file if one exists. A missing file means defaults,
    /// and a malformed one is reported once and then treated as missing.
    pub fn load() -> Self {
        let config_file = match get_config_directory() {
            Ok(dir) => dir.join("config.json"),
            Err(_) => return Self::default(),
        };

        if !config_file.exists() {
            return Self::default();
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config file: {}", err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, WipScanError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| WipScanError::config_read_failed(path, err))?;
        serde_json::from_str(&content).map_err(|err| WipScanError::config_parse_failed(path, err))
    }

    /// Built-in exclusions plus any configured extras
    pub fn excluded_names(&self) -> HashSet<String> {
        DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|name| name.to_string())
            .chain(self.exclude.iter().cloned())
            .collect()
    }
}
