pub(crate) mod cat_file;
pub(crate) mod commit_tree;
pub(crate) mod list_branches;
pub(crate) mod log;
pub(crate) mod ls_tree;
