//! The `list-branches` command.
use anyhow::Context;
use git_internals::list_branches;
use std::path::Path;

/// Invoke the `list-branches` command.
pub(crate) fn invoke(git_dir: &Path) -> anyhow::Result<()> {
    let branches = list_branches(git_dir).context("list branches in refs/heads")?;
    for branch in branches {
        let marker = if branch.is_current { '*' } else { ' ' };
        println!("{marker} {}", branch.name);
    }
    Ok(())
}
