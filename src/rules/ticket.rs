// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ticket identifier extraction.
//!
//! `regex` has no look-around, so the trailing `(?=\s|-)(.+)` of each pattern
//! is written `[\s-].*`: the character after the tag must be whitespace or a
//! dash, and something must follow the tag.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[KEY-123] subject` at the start of a commit message.
    static ref MESSAGE_TICKET_REGEX: Regex = Regex::new(
        r"^\[(?P<key>[A-Z]{2,10})-(?P<number>[0-9]{1,10})\][\s-].*$"
    ).unwrap();

    /// `KEY-123-summary`, optionally behind a gitflow prefix like `feature/`.
    static ref BRANCH_TICKET_REGEX: Regex = Regex::new(
        r"^(?P<gitflow>.*/)?(?P<key>[A-Z]{2,10})-(?P<number>[0-9]{1,10})[\s-].*$"
    ).unwrap();

    /// `[WORD] subject` where WORD may be a bypass word.
    static ref BYPASS_REGEX: Regex = Regex::new(
        r"^\[(?P<word>[A-Z ]{2,10})\][\s-].*$"
    ).unwrap();

    static ref PROJECT_KEY_REGEX: Regex = Regex::new(r"^[A-Z]{2,10}$").unwrap();
}

/// A Jira ticket reference, `KEY-NUMBER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketIdentifier {
    /// Project key, 2 to 10 uppercase letters.
    pub key: String,
    /// Ticket number, 1 to 10 digits.
    pub number: String,
}

impl TicketIdentifier {
    pub fn new(key: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            number: number.into(),
        }
    }

    /// The bracketed form expected at the start of a message, `[KEY-NUMBER]`.
    pub fn tag(&self) -> String {
        format!("[{}]", self)
    }
}

impl std::fmt::Display for TicketIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.key, self.number)
    }
}

/// Find a ticket tag at the start of a commit message.
pub fn ticket_in_message(message: &str) -> Option<TicketIdentifier> {
    capture_ticket(&MESSAGE_TICKET_REGEX, message)
}

/// Find a ticket in a branch name.
pub fn ticket_in_branch(branch: &str) -> Option<TicketIdentifier> {
    capture_ticket(&BRANCH_TICKET_REGEX, branch)
}

/// The bracketed word at the start of a commit message, if any.
///
/// Whether the word actually bypasses tagging is up to the policy.
pub fn bypass_word(message: &str) -> Option<&str> {
    BYPASS_REGEX
        .captures(message)
        .and_then(|caps| caps.name("word"))
        .map(|m| m.as_str())
}

/// Whether `key` has the shape of a project key.
pub fn is_valid_project_key(key: &str) -> bool {
    PROJECT_KEY_REGEX.is_match(key)
}

/// Whether `word` could ever be matched by the bypass pattern.
pub fn is_valid_bypass_word(word: &str) -> bool {
    (2..=10).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase() || c == ' ')
}

fn capture_ticket(regex: &Regex, text: &str) -> Option<TicketIdentifier> {
    let caps = regex.captures(text)?;
    let key = caps.name("key")?.as_str();
    let number = caps.name("number")?.as_str();
    Some(TicketIdentifier::new(key, number))
}
