use std::collections::BTreeMap;

use bstr::BString;

use super::{Object, ObjectKind};
use crate::oid::Oid;

#[derive(Debug, Clone, Copy)]
struct TreeEntry {
    kind: ObjectKind,
    oid: Oid,
}

/// One directory level. Entries are keyed by base name, so they serialize
/// in byte order of the name regardless of how they were added.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: BTreeMap<BString, TreeEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn serialize(name: &BString, entry: &TreeEntry) -> Vec<u8> {
        let mut serialized = Vec::new();
        serialized.extend_from_slice(entry.kind.as_bytes());
        serialized.push(b' ');
        serialized.extend_from_slice(entry.oid.to_string().as_bytes());
        serialized.push(b' ');
        serialized.extend_from_slice(name);
        serialized.push(b'\n');
        serialized
    }

    /// Names come from a single directory listing, so they are unique.
    pub fn add_entry(&mut self, name: BString, kind: ObjectKind, oid: Oid) {
        self.entries.insert(name, TreeEntry { kind, oid });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Object for Tree {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Tree
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|(name, entry)| Tree::serialize(name, entry))
            .collect()
    }
}
