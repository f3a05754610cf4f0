// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::{ConfigOverrides, MessageFormat};
use clap::Parser;
use std::path::PathBuf;

/// prepare-commit-message - Git prepare-commit-msg hook
///
/// Prefixes the commit message with the branch name or with the Jira ticket
/// found in the message or the branch.
#[derive(Parser, Debug)]
#[command(name = "prepare-commit-message")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Prefix commit messages with the branch name or Jira ticket", long_about = None)]
pub struct Cli {
    /// Commit message file prepared by git
    #[arg(value_name = "FILENAMES")]
    pub filenames: Vec<PathBuf>,

    /// Format that should be used
    #[arg(long, value_enum)]
    pub format: Option<MessageFormat>,

    /// Comma separated list of branches to ignore formatting on
    #[arg(long, alias = "exclude", value_delimiter = ',', value_name = "BRANCHES")]
    pub exclude_branches: Option<Vec<String>>,

    /// Comma separated list of words that can be used to ignore formatting
    #[arg(long, value_delimiter = ',', value_name = "WORDS")]
    pub exclude_words: Option<Vec<String>>,

    /// Comma separated list of Jira projects allowed for this repository
    #[arg(long, value_delimiter = ',', value_name = "PROJECTS")]
    pub jira_projects: Option<Vec<String>>,

    /// Compute the message but do not write it
    #[arg(
        long,
        env = "PREPARE_COMMIT_MESSAGE_DRY_RUN",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Configuration values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            format: self.format,
            exclude_branches: self.exclude_branches.clone(),
            exclude_words: self.exclude_words.clone(),
            jira_projects: self.jira_projects.clone(),
        }
    }
}
