//! Loose branch refs and HEAD.
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::hash::ObjectHash;

/// Branch used when HEAD or a branch name gives nothing better.
pub const DEFAULT_BRANCH: &str = "master";

/// A branch under `refs/heads`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    /// Whether HEAD points at this branch.
    pub is_current: bool,
}

/// Name of the branch HEAD points at: whatever follows the last `/` in HEAD, or `master` if
/// that is empty.
pub fn current_branch(git_dir: &Path) -> Result<String> {
    let path = git_dir.join("HEAD");
    let head = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let name = head.rsplit('/').next().unwrap_or_default().trim();
    Ok(if name.is_empty() {
        DEFAULT_BRANCH.to_owned()
    } else {
        name.to_owned()
    })
}

/// All loose branches sorted by name, with the one HEAD points at marked current.
pub fn list_branches(git_dir: &Path) -> Result<Vec<Branch>> {
    let heads = git_dir.join("refs").join("heads");
    let current = current_branch(git_dir)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(&heads).map_err(|e| Error::io(&heads, e))? {
        let entry = entry.map_err(|e| Error::io(&heads, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort_unstable();
    tracing::debug!(count = names.len(), %current, "listed branches");

    Ok(names
        .into_iter()
        .map(|name| Branch {
            is_current: name == current,
            name,
        })
        .collect())
}

/// Commit a branch points at. An empty name means `master`.
pub fn branch_tip(git_dir: &Path, branch: &str) -> Result<ObjectHash> {
    let branch = match branch.trim() {
        "" => DEFAULT_BRANCH,
        name => name,
    };
    let path = git_dir.join("refs").join("heads").join(branch);
    fs::read_to_string(&path)
        .map_err(|e| Error::io(&path, e))?
        .parse()
}
