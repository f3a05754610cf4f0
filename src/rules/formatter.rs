// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message formatter.
//!
//! The formatter is a pure function of the message, the branch and the
//! policy. It never logs or touches the file system; the caller reports the
//! [`Decision`] and maps a [`RejectionReason`] to an exit status.

use crate::config::MessageFormat;
use crate::error::RejectionReason;

use super::policy::Policy;
use super::ticket::{self, TicketIdentifier};

/// Example ticket number used in help messages.
const EXAMPLE_TICKET_NUMBER: &str = "123";

/// Example project key used when no allow-list is configured.
const EXAMPLE_PROJECT_KEY: &str = "PROJ";

/// Where a ticket identifier was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSource {
    CommitMessage,
    BranchName,
}

impl std::fmt::Display for TicketSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketSource::CommitMessage => write!(f, "commit message"),
            TicketSource::BranchName => write!(f, "branch name"),
        }
    }
}

/// Why the formatter produced its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The branch is excluded from formatting.
    BranchExcluded,
    /// Default format: the branch name was prepended.
    BranchPrefixed,
    /// The message starts with an allowed bypass word.
    Bypassed { word: String },
    /// The message already carries the ticket tag.
    AlreadyTagged {
        ticket: TicketIdentifier,
        source: TicketSource,
    },
    /// The ticket tag was prepended.
    Tagged {
        ticket: TicketIdentifier,
        source: TicketSource,
    },
}

/// Result of formatting a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The final commit message.
    pub message: String,
    /// How it was reached.
    pub decision: Decision,
}

impl Formatted {
    fn unchanged(message: &str, decision: Decision) -> Self {
        Self {
            message: message.to_string(),
            decision,
        }
    }

    /// Whether the message differs from the input.
    pub fn is_changed(&self) -> bool {
        matches!(
            self.decision,
            Decision::BranchPrefixed | Decision::Tagged { .. }
        )
    }
}

/// Formats commit messages according to a [`Policy`].
#[derive(Debug, Clone)]
pub struct Formatter {
    policy: Policy,
}

impl Formatter {
    /// Create a formatter for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Format `message` for a commit on `branch`.
    pub fn format(&self, message: &str, branch: &str) -> Result<Formatted, RejectionReason> {
        if self.policy.is_branch_excluded(branch) {
            return Ok(Formatted::unchanged(message, Decision::BranchExcluded));
        }

        match self.policy.format {
            MessageFormat::Default => Ok(Formatted {
                message: prefix(branch, message),
                decision: Decision::BranchPrefixed,
            }),
            MessageFormat::Jira => self.format_jira(message, branch),
        }
    }

    fn format_jira(&self, message: &str, branch: &str) -> Result<Formatted, RejectionReason> {
        let (ticket, source) = match self.find_ticket(message, branch)? {
            Some(found) => found,
            None => {
                return match ticket::bypass_word(message) {
                    Some(word) if self.policy.is_bypass_word(word) => Ok(Formatted::unchanged(
                        message,
                        Decision::Bypassed {
                            word: word.to_string(),
                        },
                    )),
                    _ => Err(self.no_ticket_found()),
                };
            }
        };

        let reference = ticket.to_string();
        if !message.contains(&reference) {
            return Ok(Formatted {
                message: prefix(&reference, message),
                decision: Decision::Tagged { ticket, source },
            });
        }

        if !message.contains(&ticket.tag()) {
            return Err(RejectionReason::MalformedExistingTag { prefix: reference });
        }

        Ok(Formatted::unchanged(
            message,
            Decision::AlreadyTagged { ticket, source },
        ))
    }

    /// Look for a ticket in the message first, then in the branch.
    ///
    /// A ticket outside the allow-list rejects the commit instead of falling
    /// through to the next source.
    fn find_ticket(
        &self,
        message: &str,
        branch: &str,
    ) -> Result<Option<(TicketIdentifier, TicketSource)>, RejectionReason> {
        let candidates = [
            (ticket::ticket_in_message(message), TicketSource::CommitMessage),
            (ticket::ticket_in_branch(branch), TicketSource::BranchName),
        ];

        for (found, source) in candidates {
            if let Some(ticket) = found {
                self.check_project(&ticket)?;
                return Ok(Some((ticket, source)));
            }
        }

        Ok(None)
    }

    fn check_project(&self, ticket: &TicketIdentifier) -> Result<(), RejectionReason> {
        if self.policy.is_project_allowed(&ticket.key) {
            Ok(())
        } else {
            Err(RejectionReason::ProjectNotAllowed {
                key: ticket.key.clone(),
                allowed: self.policy.allowed_projects.iter().cloned().collect(),
            })
        }
    }

    fn no_ticket_found(&self) -> RejectionReason {
        let examples = if self.policy.allowed_projects.is_empty() {
            vec![example_tag(EXAMPLE_PROJECT_KEY)]
        } else {
            self.policy
                .allowed_projects
                .iter()
                .map(|key| example_tag(key))
                .collect()
        };

        RejectionReason::NoTicketFound {
            examples,
            bypass_words: self.policy.exclude_words.iter().cloned().collect(),
        }
    }
}

/// Format a commit message with a one-off formatter.
pub fn format_message(
    message: &str,
    branch: &str,
    policy: &Policy,
) -> Result<Formatted, RejectionReason> {
    Formatter::new(policy.clone()).format(message, branch)
}

fn prefix(tag: &str, message: &str) -> String {
    format!("[{}] {}", tag, message)
}

fn example_tag(key: &str) -> String {
    TicketIdentifier::new(key, EXAMPLE_TICKET_NUMBER).tag()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jira() -> Policy {
        Policy::new(MessageFormat::Jira)
    }

    #[test]
    fn test_default_format_prefixes_branch() {
        let result = format_message("fix bug", "feature/login", &Policy::default()).unwrap();
        assert_eq!(result.message, "[feature/login] fix bug");
        assert_eq!(result.decision, Decision::BranchPrefixed);
        assert!(result.is_changed());
    }

    #[test]
    fn test_excluded_branch_unchanged_in_every_format() {
        for format in [MessageFormat::Default, MessageFormat::Jira] {
            let policy = Policy::new(format).with_exclude_branches(["develop"]);
            let result = format_message("fix bug", "develop", &policy).unwrap();
            assert_eq!(result.message, "fix bug");
            assert_eq!(result.decision, Decision::BranchExcluded);
            assert!(!result.is_changed());
        }
    }

    #[test]
    fn test_jira_ticket_from_branch() {
        let result = format_message("fix bug", "MLE-42-login", &jira()).unwrap();
        assert_eq!(result.message, "[MLE-42] fix bug");
        assert_eq!(
            result.decision,
            Decision::Tagged {
                ticket: TicketIdentifier::new("MLE", "42"),
                source: TicketSource::BranchName,
            }
        );
    }

    #[test]
    fn test_jira_ticket_from_gitflow_branch() {
        let result = format_message("fix bug", "feature/MLE-42-login", &jira()).unwrap();
        assert_eq!(result.message, "[MLE-42] fix bug");
    }

    #[test]
    fn test_jira_already_tagged_is_unchanged() {
        let policy = jira().with_allowed_projects(["MLE"]);
        let result = format_message("[MLE-42] fix bug", "MLE-42-login", &policy).unwrap();
        assert_eq!(result.message, "[MLE-42] fix bug");
        assert_eq!(
            result.decision,
            Decision::AlreadyTagged {
                ticket: TicketIdentifier::new("MLE", "42"),
                source: TicketSource::CommitMessage,
            }
        );
    }

    #[test]
    fn test_message_ticket_wins_over_branch_ticket() {
        let result = format_message("[OPS-7] fix bug", "MLE-42-login", &jira()).unwrap();
        assert_eq!(result.message, "[OPS-7] fix bug");
        assert!(!result.is_changed());
    }

    #[test]
    fn test_tagged_message_accepted_on_any_branch() {
        for key in ["AB", "MLE", "ABCDEFGHIJ"] {
            for number in ["1", "42", "1234567890"] {
                let message = format!("[{}-{}] rest", key, number);
                let result = format_message(&message, "develop", &jira()).unwrap();
                assert_eq!(result.message, message);

                let allowed = jira().with_allowed_projects([key]);
                let result = format_message(&message, "develop", &allowed).unwrap();
                assert_eq!(result.message, message);
            }
        }
    }

    #[test]
    fn test_no_ticket_found() {
        let err = format_message("fix bug", "develop", &jira()).unwrap_err();
        assert_eq!(
            err,
            RejectionReason::NoTicketFound {
                examples: vec!["[PROJ-123]".to_string()],
                bypass_words: Vec::new(),
            }
        );
    }

    #[test]
    fn test_no_ticket_found_lists_allowed_projects() {
        let policy = jira()
            .with_allowed_projects(["OPS", "MLE"])
            .with_exclude_words(["NOSTORY"]);
        let err = format_message("fix bug", "develop", &policy).unwrap_err();
        assert_eq!(
            err,
            RejectionReason::NoTicketFound {
                examples: vec!["[MLE-123]".to_string(), "[OPS-123]".to_string()],
                bypass_words: vec!["NOSTORY".to_string()],
            }
        );
    }

    #[test]
    fn test_bypass_word() {
        let policy = jira().with_exclude_words(["NOSTORY"]);
        let result = format_message("[NOSTORY] typo fix", "develop", &policy).unwrap();
        assert_eq!(result.message, "[NOSTORY] typo fix");
        assert_eq!(
            result.decision,
            Decision::Bypassed {
                word: "NOSTORY".to_string()
            }
        );
    }

    #[test]
    fn test_bypass_word_with_space() {
        let policy = jira().with_exclude_words(["NO STORY"]);
        let result = format_message("[NO STORY] typo fix", "develop", &policy).unwrap();
        assert_eq!(result.message, "[NO STORY] typo fix");
    }

    #[test]
    fn test_unknown_bracket_word_is_not_a_bypass() {
        let policy = jira().with_exclude_words(["NOSTORY"]);
        let err = format_message("[WIP] typo fix", "develop", &policy).unwrap_err();
        assert_eq!(err.code(), "no-ticket-found");
    }

    #[test]
    fn test_branch_ticket_takes_precedence_over_bypass() {
        let policy = jira().with_exclude_words(["NOSTORY"]);
        let result = format_message("[NOSTORY] typo fix", "MLE-42-login", &policy).unwrap();
        assert_eq!(result.message, "[MLE-42] [NOSTORY] typo fix");
    }

    #[test]
    fn test_project_not_allowed_from_message() {
        let policy = jira().with_allowed_projects(["MLE"]);
        let err = format_message("[ABC-1] fix bug", "MLE-42-login", &policy).unwrap_err();
        assert_eq!(
            err,
            RejectionReason::ProjectNotAllowed {
                key: "ABC".to_string(),
                allowed: vec!["MLE".to_string()],
            }
        );
    }

    #[test]
    fn test_project_not_allowed_from_branch() {
        let policy = jira()
            .with_allowed_projects(["MLE"])
            .with_exclude_words(["NOSTORY"]);
        let err = format_message("[NOSTORY] fix bug", "ABC-1-login", &policy).unwrap_err();
        assert_eq!(err.code(), "project-not-allowed");
    }

    #[test]
    fn test_malformed_existing_tag() {
        let err = format_message("MLE-42 fix bug", "MLE-42-login", &jira()).unwrap_err();
        assert_eq!(
            err,
            RejectionReason::MalformedExistingTag {
                prefix: "MLE-42".to_string()
            }
        );
    }

    #[test]
    fn test_tag_later_in_message_is_accepted() {
        let result = format_message("fix bug [MLE-42]", "MLE-42-login", &jira()).unwrap();
        assert_eq!(result.message, "fix bug [MLE-42]");
        assert!(!result.is_changed());
    }

    #[test]
    fn test_jira_format_is_idempotent() {
        let policy = jira().with_allowed_projects(["MLE"]);
        let cases = [
            ("fix bug", "MLE-42-login"),
            ("fix bug", "feature/MLE-42-login"),
            ("[MLE-42] fix bug", "develop"),
        ];

        for (message, branch) in cases {
            let first = format_message(message, branch, &policy).unwrap();
            let second = format_message(&first.message, branch, &policy).unwrap();
            assert_eq!(second.message, first.message);
            assert!(!second.is_changed());
        }
    }

    #[test]
    fn test_formatter_exposes_policy() {
        let policy = jira().with_allowed_projects(["MLE"]);
        let formatter = Formatter::new(policy.clone());
        assert_eq!(formatter.policy(), &policy);
    }
}
