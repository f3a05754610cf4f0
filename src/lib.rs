// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! prepare-commit-message - Git prepare-commit-msg hook
//!
//! Rewrites the commit message at commit time, prefixing it with the
//! current branch name or with a Jira ticket identifier.
//!
//! # Formats
//!
//! - **default**: `[feature/login] fix bug`
//! - **jira**: `[MLE-42] fix bug`, with the ticket taken from a leading tag
//!   in the message or from the branch name (`feature/MLE-42-login`).
//!   Commits without a ticket are rejected unless the message starts with a
//!   bypass word such as `[NOSTORY]`.
//!
//! # Example
//!
//! ```
//! use pcm::config::MessageFormat;
//! use pcm::rules::{Formatter, Policy};
//!
//! let policy = Policy::new(MessageFormat::Jira).with_allowed_projects(["MLE"]);
//! let formatted = Formatter::new(policy).format("fix bug", "MLE-42-login").unwrap();
//! assert_eq!(formatted.message, "[MLE-42] fix bug");
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::HookConfig;
pub use error::{PcmError, RejectionReason, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of prepare-commit-message.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
