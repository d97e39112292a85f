//! The `cat-file` command.
//!
//! Prints a banner naming the object kind followed by its decoded content.
use anyhow::Context;
use git_internals::{resolve_object, ObjectHash};
use std::path::Path;

/// Invoke the `cat-file` command.
pub(crate) fn invoke(git_dir: &Path, object_hash: &str) -> anyhow::Result<()> {
    let hash: ObjectHash = object_hash.parse()?;
    let object =
        resolve_object(git_dir, &hash).with_context(|| format!("read object {hash}"))?;
    println!("{object}");
    Ok(())
}
