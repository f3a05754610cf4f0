// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message module.
//!
//! Reads the message file prepared by git and writes the formatted message
//! back.

mod message;

pub use message::{join_lines, CommitMessageFile};
