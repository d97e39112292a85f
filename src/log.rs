//! First-parent history.
use std::path::Path;

use crate::commit::Commit;
use crate::error::{Error, Result};
use crate::hash::ObjectHash;
use crate::objects::{Kind, Object};

/// Read the commit `hash`, failing if it is some other kind of object.
pub fn read_commit(git_dir: &Path, hash: &ObjectHash) -> Result<Commit> {
    match Object::read(git_dir, hash)? {
        Object::Commit(commit) => Ok(commit),
        other => Err(Error::TypeMismatch {
            hash: *hash,
            expected: Kind::Commit,
            found: other.kind(),
        }),
    }
}

/// Walks from a commit to the root following only first parents.
///
/// Merge parents other than the first are never visited. Iteration stops after the first error.
pub struct History<'a> {
    git_dir: &'a Path,
    next: Option<ObjectHash>,
}

impl<'a> History<'a> {
    pub fn new(git_dir: &'a Path, start: ObjectHash) -> Self {
        Self {
            git_dir,
            next: Some(start),
        }
    }
}

impl Iterator for History<'_> {
    type Item = Result<(ObjectHash, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let hash = self.next.take()?;
        tracing::debug!(%hash, "walking commit");
        match read_commit(self.git_dir, &hash) {
            Ok(commit) => {
                self.next = commit.parents.first().copied();
                Some(Ok((hash, commit)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Render the first-parent log starting at `start`, one block per commit separated by a blank
/// line.
pub fn render_log(git_dir: &Path, start: ObjectHash) -> Result<String> {
    let mut blocks = Vec::new();
    for entry in History::new(git_dir, start) {
        let (hash, commit) = entry?;
        blocks.push(format!(
            "Commit: {hash}\n{}\n{}",
            commit.committer, commit.message
        ));
    }
    Ok(blocks.join("\n\n"))
}
