//! Flatten a commit's tree into file paths.
use std::path::Path;

use crate::error::Result;
use crate::hash::ObjectHash;
use crate::objects::Object;
use crate::tree::TreeEntry;

/// A tree being listed: its entries, the next one to visit, and the path it lives under.
struct Frame {
    entries: Vec<TreeEntry>,
    next: usize,
    prefix: String,
}

/// Resolve `hash` to tree entries, looking through commits to their root tree.
///
/// Blobs have no entries and give `None`.
fn tree_entries(git_dir: &Path, hash: ObjectHash) -> Result<Option<Vec<TreeEntry>>> {
    let mut hash = hash;
    loop {
        match Object::read(git_dir, &hash)? {
            Object::Commit(commit) => hash = commit.tree,
            Object::Tree(entries) => return Ok(Some(entries)),
            Object::Blob(_) => return Ok(None),
        }
    }
}

/// Every file path reachable from the commit or tree `start`, depth first, in entry order.
///
/// Subdirectories (mode `40000`) are expanded in place, so their files appear between the
/// siblings that surround them. A blob as `start` yields no paths.
pub fn flatten_tree(git_dir: &Path, start: ObjectHash) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    let mut stack = Vec::new();
    if let Some(entries) = tree_entries(git_dir, start)? {
        stack.push(Frame {
            entries,
            next: 0,
            prefix: String::new(),
        });
    }

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.entries.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let path = format!("{}{}", frame.prefix, entry.name);
        if !entry.is_directory() {
            paths.push(path);
            continue;
        }

        let hash = entry.hash;
        tracing::debug!(%path, %hash, "descending into directory");
        if let Some(entries) = tree_entries(git_dir, hash)? {
            stack.push(Frame {
                entries,
                next: 0,
                prefix: path + "/",
            });
        }
    }

    Ok(paths)
}
