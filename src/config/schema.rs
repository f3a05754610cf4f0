// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structure that can be loaded from prepare-commit-message.toml.

use crate::error::{ConfigError, Result};
use crate::rules::{ticket, Policy};
use serde::{Deserialize, Serialize};

/// The configuration structure for prepare-commit-message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Message format.
    pub format: MessageFormat,

    /// Branches to ignore formatting on.
    pub exclude_branches: Vec<String>,

    /// Words that can be used to ignore formatting (jira format).
    pub exclude_words: Vec<String>,

    /// Jira projects allowed for this repository (empty means all allowed).
    pub jira_projects: Vec<String>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            format: MessageFormat::Default,
            exclude_branches: vec![
                "master".to_string(),
                "develop".to_string(),
                "stage".to_string(),
            ],
            exclude_words: vec![
                "NO STORY".to_string(),
                "NOSTORY".to_string(),
                "NS".to_string(),
            ],
            jira_projects: Vec::new(),
        }
    }
}

impl HookConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check values that could never match.
    pub fn validate(&self) -> Result<()> {
        for key in self.jira_projects.iter().map(|k| k.trim()) {
            if !key.is_empty() && !ticket::is_valid_project_key(key) {
                return Err(ConfigError::InvalidValue {
                    key: "jira_projects".to_string(),
                    message: format!("'{}' is not 2 to 10 uppercase letters", key),
                }
                .into());
            }
        }

        for word in self.exclude_words.iter().map(|w| w.trim()) {
            if !word.is_empty() && !ticket::is_valid_bypass_word(word) {
                tracing::warn!(
                    "Exclude word '{}' can never match, words must be 2 to 10 uppercase letters or spaces",
                    word
                );
            }
        }

        Ok(())
    }

    /// Build the formatting policy.
    pub fn policy(&self) -> Policy {
        Policy::new(self.format)
            .with_exclude_branches(&self.exclude_branches)
            .with_exclude_words(&self.exclude_words)
            .with_allowed_projects(&self.jira_projects)
    }
}

/// How commit messages are prefixed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Prefix with the branch name
    #[default]
    Default,
    /// Prefix with the Jira ticket found in the message or branch
    Jira,
}

impl MessageFormat {
    /// Get the string representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::Default => "default",
            MessageFormat::Jira => "jira",
        }
    }
}

impl std::fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
