use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mini-git", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub root: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty repository
    Init,

    /// Store a file as a blob and print its id
    HashObject {
        /// File to store
        path: PathBuf,
    },

    /// Print the payload of a stored object
    CatFile {
        /// Object id
        oid: String,
    },

    /// Snapshot a directory and print the tree id
    Tree {
        /// Directory to snapshot
        path: PathBuf,
    },

    /// Snapshot the repository root into a commit
    Commit {
        /// Commit message
        message: String,
    },
}
