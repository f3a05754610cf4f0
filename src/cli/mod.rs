// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for prepare-commit-message.
//!
//! This module handles command-line argument parsing and runs the hook.

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::run;
