// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Resolves the branch the commit is being made on.

mod repo;

pub use repo::{get_branch_name, Repository};
