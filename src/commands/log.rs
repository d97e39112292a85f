//! The `log` command.
//!
//! See: <https://git-scm.com/docs/git-log>
use anyhow::Context;
use git_internals::{refs, render_log};
use std::path::Path;

/// Invoke the `log` command. Only first parents are followed.
pub(crate) fn invoke(git_dir: &Path, branch: &str) -> anyhow::Result<()> {
    let tip = refs::branch_tip(git_dir, branch)
        .with_context(|| format!("resolve branch '{branch}'"))?;
    let log = render_log(git_dir, tip).with_context(|| format!("walk history from {tip}"))?;
    println!("{log}");
    Ok(())
}
