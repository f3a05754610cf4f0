// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, PcmError, Result};
use std::path::{Path, PathBuf};

use super::schema::HookConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "prepare-commit-message.toml",
    ".prepare-commit-message.toml",
    ".config/prepare-commit-message.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Candidate configuration paths, nearest first: every ancestor of
/// `start_dir`, then the home directory, then the XDG config file.
fn candidate_paths(start_dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    let per_dir = start_dir
        .ancestors()
        .map(Path::to_path_buf)
        .chain(dirs::home_dir())
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)));

    let xdg = dirs::config_dir().map(|dir| dir.join("prepare-commit-message").join("config.toml"));

    per_dir.chain(xdg)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    candidate_paths(start_dir).find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<HookConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(HookConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<HookConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(PcmError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PcmError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<HookConfig> {
    toml::from_str(content).map_err(|e| {
        PcmError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Field-by-field overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub format: Option<super::MessageFormat>,
    pub exclude_branches: Option<Vec<String>>,
    pub exclude_words: Option<Vec<String>>,
    pub jira_projects: Option<Vec<String>>,
}

/// Merge overrides into a configuration, with the overrides taking precedence.
pub fn merge_overrides(base: HookConfig, overrides: ConfigOverrides) -> HookConfig {
    HookConfig {
        format: overrides.format.unwrap_or(base.format),
        exclude_branches: overrides.exclude_branches.unwrap_or(base.exclude_branches),
        exclude_words: overrides.exclude_words.unwrap_or(base.exclude_words),
        jira_projects: overrides.jira_projects.unwrap_or(base.jira_projects),
    }
}
