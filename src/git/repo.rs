// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, PcmError, Result};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Prefix of local branch references.
const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open the repository git is committing to.
    ///
    /// Honors `GIT_DIR` when git sets it for the hook, otherwise discovers
    /// the repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let repo = Git2Repo::open_from_env().map_err(open_error)?;
        Ok(Self { inner: repo })
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(open_error)?;
        Ok(Self { inner: repo })
    }

    /// Get the short name of the checked-out branch.
    ///
    /// Reads the symbolic target of `HEAD`, so a branch without commits yet
    /// resolves too.
    pub fn branch_name(&self) -> Result<String> {
        let head = self.inner.find_reference("HEAD").map_err(|e| {
            PcmError::Git(GitError::BranchFailed {
                message: e.message().to_string(),
            })
        })?;

        let target = match head.symbolic_target_bytes() {
            Some(target) => std::str::from_utf8(target).map_err(|_| {
                PcmError::Git(GitError::BranchFailed {
                    message: "Invalid branch name encoding".to_string(),
                })
            })?,
            None => return Err(PcmError::Git(GitError::DetachedHead)),
        };

        target
            .strip_prefix(BRANCH_REF_PREFIX)
            .map(str::to_string)
            .ok_or(PcmError::Git(GitError::DetachedHead))
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }
}

fn open_error(e: git2::Error) -> PcmError {
    if e.code() == git2::ErrorCode::NotFound {
        PcmError::Git(GitError::NotARepository)
    } else {
        PcmError::Git(e.into())
    }
}

/// Get the current branch name.
pub fn get_branch_name() -> Result<String> {
    let repo = Repository::open_current()?;
    tracing::debug!("Resolving branch in {:?}", repo.git_dir());
    repo.branch_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo_on(branch: &str) -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        repo.set_head(&format!("refs/heads/{}", branch)).unwrap();
        (dir, repo)
    }

    fn commit_empty_tree(repo: &Git2Repo) -> git2::Oid {
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap()
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(PcmError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_branch_name_on_unborn_branch() {
        let (dir, _repo) = init_repo_on("MLE-42-login");
        let repo = Repository::open(dir.path()).unwrap();
        assert_eq!(repo.branch_name().unwrap(), "MLE-42-login");
    }

    #[test]
    fn test_branch_name_keeps_gitflow_prefix() {
        let (dir, raw) = init_repo_on("feature/MLE-42-login");
        commit_empty_tree(&raw);

        let repo = Repository::open(dir.path()).unwrap();
        assert_eq!(repo.branch_name().unwrap(), "feature/MLE-42-login");
    }

    #[test]
    fn test_detached_head() {
        let (dir, raw) = init_repo_on("main");
        let oid = commit_empty_tree(&raw);
        raw.set_head_detached(oid).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert!(matches!(
            repo.branch_name(),
            Err(PcmError::Git(GitError::DetachedHead))
        ));
    }

    #[test]
    fn test_open_from_subdirectory() {
        let (dir, _repo) = init_repo_on("develop");
        let nested = dir.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = Repository::open(&nested).unwrap();
        assert_eq!(repo.branch_name().unwrap(), "develop");
    }
}
