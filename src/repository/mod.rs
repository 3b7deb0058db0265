use std::{
    fs,
    path::{Path, PathBuf},
};

use bstr::ByteSlice;
use db::Db;
use filter::PathFilter;
use object::{blob::Blob, commit::Commit, tree::Tree, ObjectKind};
use tracing::{debug, info};
use workspace::{EntryKind, Workspace};

use crate::{
    error::{Error, Result},
    oid::Oid,
};

pub mod db;
pub mod filter;
pub mod object;
pub mod workspace;

/// Name of the metadata directory at the repository root.
pub const DB_DIR: &str = ".mini-git";

pub struct Repository {
    root: PathBuf,
    workspace: Workspace,
    db: Db,
    filter: PathFilter,
}

impl Repository {
    pub fn open(path: PathBuf) -> Self {
        let workspace_path = path.clone();
        let root_path = path.join(DB_DIR);

        Self {
            root: path,
            workspace: Workspace::new(workspace_path),
            db: Db::new(root_path),
            filter: PathFilter::new(DB_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn init(&self) -> Result<()> {
        let db_path = self.root.join(DB_DIR);
        if let Ok(true) = fs::exists(&db_path) {
            return Err(Error::AlreadyInitialized(db_path));
        }

        fs::create_dir(&db_path)?;
        self.db.init()?;
        info!(path = %db_path.display(), "initialized repository");
        Ok(())
    }

    pub fn hash_object(&self, path: &Path) -> Result<Oid> {
        let data = self.workspace.read_file(path)?;
        self.db.store_object(&Blob::new(data))
    }

    pub fn cat_file(&self, oid: &str) -> Result<(ObjectKind, Vec<u8>)> {
        self.db.read_object(oid)
    }

    /// Snapshots `dir` bottom-up. Empty subdirectories are left out of the
    /// parent; a directory with nothing to store fails with `EmptyTree`.
    pub fn write_tree(&self, dir: &Path) -> Result<Oid> {
        if !self.workspace.is_dir(dir)? {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }

        let mut tree = Tree::new();

        for entry in self.workspace.list_dir(dir)? {
            if self.filter.is_excluded(&entry.path) {
                debug!(path = %entry.path.display(), "excluded");
                continue;
            }

            let name = <[u8]>::from_os_str(&entry.name)
                .ok_or_else(|| Error::NonUnicodeName(entry.path.clone()))?
                .into();

            match entry.kind {
                EntryKind::File => {
                    let oid = self.hash_object(&entry.path)?;
                    tree.add_entry(name, ObjectKind::Blob, oid);
                }
                EntryKind::Dir => match self.write_tree(&entry.path) {
                    Ok(oid) => tree.add_entry(name, ObjectKind::Tree, oid),
                    Err(Error::EmptyTree(path)) => {
                        debug!(path = %path.display(), "pruned empty directory");
                    }
                    Err(e) => return Err(e),
                },
                EntryKind::Symlink | EntryKind::Other => {
                    debug!(path = %entry.path.display(), kind = ?entry.kind, "skipped");
                }
            }
        }

        if tree.is_empty() {
            return Err(Error::EmptyTree(dir.to_path_buf()));
        }

        let oid = self.db.store_object(&tree)?;
        debug!(%oid, path = %dir.display(), entries = tree.len(), "wrote tree");
        Ok(oid)
    }

    /// Snapshots the repository root and wraps it with `message`.
    pub fn commit(&self, message: &str) -> Result<Oid> {
        let tree_oid = self.write_tree(&self.workspace.root)?;
        let commit_oid = self
            .db
            .store_object(&Commit::new(tree_oid, message.to_owned()))?;

        info!(commit = %commit_oid, tree = %tree_oid, "created commit");
        Ok(commit_oid)
    }
}
