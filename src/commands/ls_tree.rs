//! The `ls-tree` command.
//!
//! See <https://git-scm.com/docs/git-ls-tree>
use anyhow::Context;
use git_internals::{resolve_object, Object, ObjectHash};
use std::io::Write;
use std::path::Path;

/// Invoke the `ls-tree` command.
pub(crate) fn invoke(git_dir: &Path, name_only: bool, tree_sha: &str) -> anyhow::Result<()> {
    let hash: ObjectHash = tree_sha.parse()?;
    let object = resolve_object(git_dir, &hash).context("parse out tree object file")?;
    let entries = match object {
        Object::Tree(entries) => entries,
        other => anyhow::bail!("cannot ls kind: {}", other.kind()),
    };

    let mut stdout = std::io::stdout().lock();
    for entry in entries {
        if name_only {
            writeln!(stdout, "{}", entry.name).context("write tree entry name to stdout")?;
        } else {
            writeln!(
                stdout,
                "{:0>6} {} {}\t{}",
                entry.mode,
                entry.kind(),
                entry.hash,
                entry.name
            )
            .context("write tree entry to stdout")?;
        }
    }

    Ok(())
}
