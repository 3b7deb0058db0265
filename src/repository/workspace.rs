use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    /// Sockets, FIFOs, device nodes.
    Other,
}

#[derive(Debug)]
pub struct WorkspaceEntry {
    pub path: PathBuf,
    pub name: OsString,
    pub kind: EntryKind,
}

pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(path: PathBuf) -> Self {
        Self { root: path }
    }

    /// Immediate children of `dir`, sorted by file name. Symbolic links are
    /// reported as such and never followed.
    pub fn list_dir(&self, dir: &Path) -> Result<Vec<WorkspaceEntry>, walkdir::Error> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            let file_type = entry.file_type();
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(WorkspaceEntry {
                name: entry.file_name().to_owned(),
                path: entry.into_path(),
                kind,
            });
        }

        Ok(entries)
    }

    pub fn is_dir(&self, path: &Path) -> Result<bool, io::Error> {
        Ok(fs::metadata(path)?.is_dir())
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<u8>, io::Error> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_children_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();
        fs::write(dir.path().join("c/nested.txt"), b"n").unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf());
        let entries = workspace.list_dir(dir.path()).unwrap();

        let listed: Vec<_> = entries
            .iter()
            .map(|e| (e.name.to_str().unwrap(), e.kind))
            .collect();
        assert_eq!(
            listed,
            [
                ("a.txt", EntryKind::File),
                ("b.txt", EntryKind::File),
                ("c", EntryKind::Dir)
            ]
        );
        assert_eq!(entries[2].path, dir.path().join("c"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf());
        let entries = workspace.list_dir(dir.path()).unwrap();

        assert_eq!(entries[0].name, "link");
        assert_eq!(entries[0].kind, EntryKind::Symlink);
        assert_eq!(entries[1].kind, EntryKind::Dir);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf());

        assert!(workspace.list_dir(&dir.path().join("nope")).is_err());
    }
}
