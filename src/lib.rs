//! Read-only access to a Git repository's loose objects.
//!
//! Objects are looked up as `<git-dir>/objects/aa/bbbb...`, inflated, and decoded into an
//! [`Object`]. On top of that sit a first-parent [`render_log`], a [`flatten_tree`] that lists every
//! file path of a commit, and [`list_branches`] for the loose refs under `refs/heads`.
//!
//! ```no_run
//! use std::path::Path;
//! use git_internals::{list_branches, refs, render_log};
//!
//! let git_dir = Path::new(".git");
//! for branch in list_branches(git_dir)? {
//!     println!("{} {}", if branch.is_current { "*" } else { " " }, branch.name);
//! }
//! let tip = refs::branch_tip(git_dir, "master")?;
//! println!("{}", render_log(git_dir, tip)?);
//! # Ok::<(), git_internals::Error>(())
//! ```

pub mod commit;
pub mod error;
pub mod flatten;
pub mod hash;
pub mod log;
pub mod objects;
pub mod person;
pub mod refs;
pub mod tree;

use std::path::Path;

pub use commit::Commit;
pub use error::{Error, Result};
pub use flatten::flatten_tree;
pub use hash::ObjectHash;
pub use log::{render_log, History};
pub use objects::{Kind, Object};
pub use person::{PersonInfo, Role};
pub use refs::{list_branches, Branch};
pub use tree::TreeEntry;

/// Read and decode the object `hash` from the repository at `git_dir`.
pub fn resolve_object(git_dir: &Path, hash: &ObjectHash) -> Result<Object> {
    Object::read(git_dir, hash)
}
