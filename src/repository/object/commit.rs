use super::{Object, ObjectKind};
use crate::oid::Oid;

/// A root tree plus a free-text message. No parents, no author lines.
#[derive(Debug, Clone)]
pub struct Commit {
    tree: Oid,
    message: String,
}

impl Commit {
    pub fn new(tree_oid: Oid, message: String) -> Self {
        Self {
            tree: tree_oid,
            message,
        }
    }
}

impl Object for Commit {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Commit
    }

    fn to_bytes(&self) -> Vec<u8> {
        format!("tree {}\n\n{}", self.tree, self.message).into()
    }
}
