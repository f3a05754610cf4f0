// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for prepare-commit-message.
//!
//! This module handles loading and parsing configuration files and merging
//! command-line overrides on top of them.

mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, merge_overrides, parse_config,
    ConfigOverrides,
};
pub use schema::*;
