// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for prepare-commit-message.
//!
//! Every error is terminal for the current commit. [`PcmError::exit_code`]
//! maps each variant onto the hook's process exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a commit the author has to fix (message or branch).
pub const EXIT_REJECTED: i32 = 1;

/// Exit status for a hook that is misconfigured or cannot run.
pub const EXIT_CONFIGURATION: i32 = 2;

/// The main error type for prepare-commit-message.
#[derive(Error, Debug)]
pub enum PcmError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // The formatter refused the commit
    #[error("Commit rejected: {0}")]
    Rejected(#[from] RejectionReason),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl PcmError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PcmError::Rejected(reason) => reason.exit_code(),
            PcmError::Config(_) | PcmError::Git(_) | PcmError::WithContext { .. } => {
                EXIT_CONFIGURATION
            }
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Detached HEAD state, check out a named branch before committing")]
    DetachedHead,
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Why the formatter refused a commit message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error(
        "Project key '{}' found but is not allowed, only the following keys are allowed: {}",
        .key,
        .allowed.join(", ")
    )]
    ProjectNotAllowed { key: String, allowed: Vec<String> },

    #[error("{}", no_ticket_help(.examples, .bypass_words))]
    NoTicketFound {
        examples: Vec<String>,
        bypass_words: Vec<String>,
    },

    #[error("Found Jira ticket {prefix} in commit message but the pattern is incorrect, you must use a valid pattern like '[{prefix}]'")]
    MalformedExistingTag { prefix: String },
}

impl RejectionReason {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::ProjectNotAllowed { .. } => "project-not-allowed",
            RejectionReason::NoTicketFound { .. } => "no-ticket-found",
            RejectionReason::MalformedExistingTag { .. } => "malformed-existing-tag",
        }
    }

    /// Process exit status for this rejection.
    ///
    /// A project outside the allow-list is a configuration violation; the
    /// other rejections ask the author to fix the message or branch.
    pub fn exit_code(&self) -> i32 {
        match self {
            RejectionReason::ProjectNotAllowed { .. } => EXIT_CONFIGURATION,
            RejectionReason::NoTicketFound { .. } | RejectionReason::MalformedExistingTag { .. } => {
                EXIT_REJECTED
            }
        }
    }
}

fn no_ticket_help(examples: &[String], bypass_words: &[String]) -> String {
    let mut help = format!(
        "Failed detecting Jira project / ticket number from branch or commit message, you must use a valid Jira pattern like {}",
        examples.join(" ")
    );
    if !bypass_words.is_empty() {
        let quoted: Vec<String> = bypass_words.iter().map(|w| format!("[{}]", w)).collect();
        help.push_str(&format!(
            ", or one of the skip words {} to pass through",
            quoted.join(" ")
        ));
    }
    help
}

/// Result type alias for prepare-commit-message operations.
pub type Result<T> = std::result::Result<T, PcmError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PcmError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
