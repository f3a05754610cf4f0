// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message file handling.

use crate::error::{ConfigError, PcmError, Result, ResultExt};
use std::path::{Path, PathBuf};

/// The commit message file git hands to the prepare-commit-msg hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessageFile {
    path: PathBuf,
}

impl CommitMessageFile {
    /// Create a handle for a single message file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick the message file from the hook's positional arguments.
    ///
    /// Exactly one path is accepted.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self> {
        match paths {
            [path] => Ok(Self::new(path)),
            [] => Err(PcmError::Config(ConfigError::InvalidArgument {
                message: "expected the commit message file, got none".to_string(),
            })),
            _ => Err(PcmError::Config(ConfigError::InvalidArgument {
                message: format!(
                    "expected exactly one commit message file, got {}",
                    paths.len()
                ),
            })),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the message as a single line.
    pub fn read(&self) -> Result<String> {
        let content = std::fs::read_to_string(&self.path)
            .context(format!("Failed to read {}", self.path.display()))?;
        Ok(join_lines(&content))
    }

    /// Replace the file content with `message`.
    pub fn write(&self, message: &str) -> Result<()> {
        std::fs::write(&self.path, message)
            .context(format!("Failed to write {}", self.path.display()))
    }
}

/// Collapse a message into one line: each line is trimmed on the right and
/// the lines are joined with a single space.
pub fn join_lines(content: &str) -> String {
    content
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}
