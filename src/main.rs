use std::{
    env,
    io::{self, Write},
};

use anyhow::Context;
use clap::Parser;
use cmd::Commands;
use repository::Repository;
use tracing::Level;

mod cmd;
mod error;
mod oid;
mod repository;

fn main() -> Result<(), anyhow::Error> {
    let cli = cmd::Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().with_context(|| "Can't get current working directory")?,
    };
    let repo = Repository::open(root);

    match &cli.command {
        Commands::Init => {
            repo.init()
                .with_context(|| "Error initializing repository")?;
            println!("Initialized mini-git repository in: {}", repo.root().display());
        }
        Commands::HashObject { path } => {
            let oid = repo
                .hash_object(path)
                .with_context(|| format!("Error hashing object {}", path.display()))?;
            println!("{oid}");
        }
        Commands::CatFile { oid } => {
            let (_, payload) = repo
                .cat_file(oid)
                .with_context(|| format!("Error reading object {oid}"))?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&payload)?;
            stdout.flush()?;
        }
        Commands::Tree { path } => {
            let oid = repo
                .write_tree(path)
                .with_context(|| "Error writing tree")?;
            println!("Tree object: {oid}");
        }
        Commands::Commit { message } => {
            let oid = repo
                .commit(message)
                .with_context(|| "Error writing commit")?;
            println!("Commit object: {oid}");
        }
    }

    Ok(())
}
