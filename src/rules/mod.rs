// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message formatting.
//!
//! This module decides how a commit message is prefixed: with the branch
//! name, or with a Jira ticket found in the message or the branch, subject
//! to bypass words and a project allow-list.

mod formatter;
mod policy;
pub mod ticket;

pub use formatter::{format_message, Decision, Formatted, Formatter, TicketSource};
pub use policy::Policy;
pub use ticket::TicketIdentifier;
