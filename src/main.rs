use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the repository's `.git` directory
    #[arg(long, global = true, env = "GIT_DIR", default_value = ".git")]
    git_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List local branches, marking the one HEAD points at
    ListBranches,
    /// See the contents of a Git object
    CatFile { object_hash: String },
    /// Show the first-parent history of a branch
    Log {
        /// Branch name; defaults to master
        branch: Option<String>,
    },
    /// List every file path in a commit or tree
    CommitTree { object_hash: String },
    /// List the entries of a tree object
    LsTree {
        #[clap(long)]
        name_only: bool,

        tree_hash: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    tracing::debug!(git_dir = %args.git_dir.display(), command = ?args.command, "starting");

    match args.command {
        Command::ListBranches => commands::list_branches::invoke(&args.git_dir),
        Command::CatFile { object_hash } => {
            commands::cat_file::invoke(&args.git_dir, &object_hash)
        }
        Command::Log { branch } => {
            commands::log::invoke(&args.git_dir, branch.as_deref().unwrap_or_default())
        }
        Command::CommitTree { object_hash } => {
            commands::commit_tree::invoke(&args.git_dir, &object_hash)
        }
        Command::LsTree {
            name_only,
            tree_hash,
        } => commands::ls_tree::invoke(&args.git_dir, name_only, &tree_hash),
    }
}
