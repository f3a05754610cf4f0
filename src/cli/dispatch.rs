// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook execution.

use crate::commit::CommitMessageFile;
use crate::config::{merge_overrides, HookConfig};
use crate::error::Result;
use crate::git;
use crate::rules::{Decision, Formatted, Formatter, TicketSource};

use super::args::Cli;

/// Run the hook with the given arguments.
pub fn run(cli: &Cli) -> Result<Formatted> {
    tracing::debug!("prepare-commit-message {}", crate::version::version_string());

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        HookConfig::load_from(config_path)?
    } else {
        HookConfig::load()?
    };
    let config = merge_overrides(config, cli.overrides());
    config.validate()?;
    tracing::debug!("Using configuration: {:?}", config);

    let file = CommitMessageFile::from_paths(&cli.filenames)?;
    let branch = git::get_branch_name()?;
    let message = file.read()?;

    tracing::info!(
        "Prepare commit message for '{}' on branch '{}'",
        message,
        branch
    );

    let formatter = Formatter::new(config.policy());
    let formatted = formatter.format(&message, &branch)?;
    report(&formatted, &branch);

    if !formatted.is_changed() {
        return Ok(formatted);
    }

    tracing::info!("Changing '{}' into '{}'", message, formatted.message);
    if cli.dry_run {
        tracing::info!("Dry-run mode enabled, commit message unchanged");
    } else {
        file.write(&formatted.message)?;
    }

    Ok(formatted)
}

/// Log how the formatter reached its decision.
fn report(formatted: &Formatted, branch: &str) {
    match &formatted.decision {
        Decision::BranchExcluded => {
            tracing::info!("Skipped formatting on branch {}", branch);
        }
        Decision::BranchPrefixed => {}
        Decision::Bypassed { word } => {
            tracing::warn!(
                "Could not find Jira project in commit message or branch name, bypassing with '{}'",
                word
            );
        }
        Decision::AlreadyTagged { ticket, source } | Decision::Tagged { ticket, source } => {
            if *source == TicketSource::BranchName {
                tracing::warn!(
                    "Could not find Jira project in commit message, trying in branch name..."
                );
            }
            tracing::info!("Found Jira project in {} {}", source, ticket);
        }
    }
}
