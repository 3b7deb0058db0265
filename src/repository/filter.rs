use std::path::{Component, Path};

/// Directory names that are never part of a snapshot.
pub struct PathFilter {
    excluded: Vec<String>,
}

impl PathFilter {
    pub fn new(db_dir: &str) -> Self {
        Self {
            excluded: vec![db_dir.to_owned(), ".git".to_owned()],
        }
    }

    /// True if any component of `path` is an excluded directory name.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(segment) => self.excluded.iter().any(|name| segment == name.as_str()),
            _ => false,
        })
    }
}
