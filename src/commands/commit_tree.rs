//! The `commit-tree` command: every file path in a commit's tree, one per line.
use anyhow::Context;
use git_internals::{flatten_tree, ObjectHash};
use std::io::Write;
use std::path::Path;

pub(crate) fn invoke(git_dir: &Path, object_hash: &str) -> anyhow::Result<()> {
    let hash: ObjectHash = object_hash.parse()?;
    let paths = flatten_tree(git_dir, hash).with_context(|| format!("flatten tree of {hash}"))?;

    let mut stdout = std::io::stdout().lock();
    for path in paths {
        writeln!(stdout, "{path}").context("write path to stdout")?;
    }
    Ok(())
}
