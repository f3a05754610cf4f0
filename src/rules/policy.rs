// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Formatting policy.

use crate::config::MessageFormat;
use std::collections::BTreeSet;

/// What the formatter is allowed to do with a commit message.
///
/// Sets are ordered so diagnostics list their members deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// How the message is prefixed.
    pub format: MessageFormat,
    /// Branches whose commits are never rewritten.
    pub exclude_branches: BTreeSet<String>,
    /// Bracketed words that opt a commit out of ticket tagging (jira only).
    pub exclude_words: BTreeSet<String>,
    /// Project keys permitted for this repository, empty allows any (jira only).
    pub allowed_projects: BTreeSet<String>,
}

impl Policy {
    /// Create a policy with the given format and no exclusions.
    pub fn new(format: MessageFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the excluded branches.
    pub fn with_exclude_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_branches = collect_entries(branches);
        self
    }

    /// Set the bypass words.
    pub fn with_exclude_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_words = collect_entries(words);
        self
    }

    /// Set the allowed project keys.
    pub fn with_allowed_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_projects = collect_entries(projects);
        self
    }

    pub fn is_branch_excluded(&self, branch: &str) -> bool {
        self.exclude_branches.contains(branch)
    }

    pub fn is_bypass_word(&self, word: &str) -> bool {
        self.exclude_words.contains(word)
    }

    /// Whether a project key passes the allow-list.
    pub fn is_project_allowed(&self, key: &str) -> bool {
        self.allowed_projects.is_empty() || self.allowed_projects.contains(key)
    }
}

// Surrounding whitespace is dropped; blank entries (from `--jira-projects ""`
// or a trailing comma) are ignored.
fn collect_entries<I, S>(entries: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|e| e.as_ref().trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
