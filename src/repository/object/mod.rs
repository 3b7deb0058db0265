use std::fmt::{self, Display, Formatter};

pub mod blob;
pub mod commit;
pub mod tree;

/// The three object types. Called `kind` to stay clear of the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

impl ObjectKind {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            ObjectKind::Blob => b"blob",
            ObjectKind::Tree => b"tree",
            ObjectKind::Commit => b"commit",
        }
    }

    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        match name {
            b"blob" => Some(ObjectKind::Blob),
            b"tree" => Some(ObjectKind::Tree),
            b"commit" => Some(ObjectKind::Commit),
            _ => None,
        }
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ObjectKind::Blob => write!(f, "blob"),
            ObjectKind::Tree => write!(f, "tree"),
            ObjectKind::Commit => write!(f, "commit"),
        }
    }
}

/// Anything that can be written to the object database.
pub trait Object {
    fn kind(&self) -> ObjectKind;

    /// Payload bytes, without the `<kind> <len>\0` header.
    fn to_bytes(&self) -> Vec<u8>;
}
