use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use bstr::ByteSlice;
use rand::distributions::{Alphanumeric, DistString};
use tracing::debug;

use crate::{
    error::{Error, Result},
    oid::Oid,
};

use super::object::{Object, ObjectKind};

/// Loose object storage under `<db>/objects/<2 hex>/<38 hex>`.
pub struct Db {
    root: PathBuf,
}

impl Db {
    fn objects_path(&self) -> PathBuf {
        self.root.join("objects")
    }

    pub fn new(db_path: PathBuf) -> Self {
        Self { root: db_path }
    }

    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.objects_path())?;
        Ok(())
    }

    /// Hashes `object` and writes it unless an object with the same id is
    /// already stored. Existing files are trusted, not re-read.
    pub fn store_object(&self, object: &impl Object) -> Result<Oid> {
        let serialized_object = object.to_bytes();
        let mut content: Vec<u8> = vec![];
        content.extend_from_slice(object.kind().as_bytes());
        content.push(b' ');
        content.extend_from_slice(serialized_object.len().to_string().as_bytes());
        content.push(0);
        content.extend_from_slice(&serialized_object);

        let oid = Oid::new(&content);

        self.write_object(&oid.to_string(), &content)?;

        Ok(oid)
    }

    fn write_object(&self, oid: &str, content: &[u8]) -> Result<()> {
        let object_path = self.object_path(oid)?;

        if let Ok(true) = fs::exists(&object_path) {
            debug!(%oid, "object already stored");
            return Ok(());
        }

        let group_path = self.objects_path().join(&oid[..2]);
        fs::create_dir_all(&group_path)?;

        let temp_path = group_path.join(generate_temp_name());
        let mut file = File::create_new(&temp_path)?;
        if let Err(e) = file.write_all(content) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        drop(file);

        persist(&temp_path, &object_path)?;
        debug!(%oid, size = content.len(), "wrote object");

        Ok(())
    }

    /// Reads an object back as its kind and payload. The length in the
    /// header is not checked against the payload.
    pub fn read_object(&self, oid: &str) -> Result<(ObjectKind, Vec<u8>)> {
        let object_path = self.object_path(oid)?;

        // A bare fan-out directory is not an object.
        if object_path.is_dir() {
            return Err(Error::NotFound(oid.to_owned()));
        }

        let mut content = match fs::read(&object_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(oid.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };

        let malformed = |reason: &str| Error::MalformedObject {
            id: oid.to_owned(),
            reason: reason.to_owned(),
        };

        let nul = content
            .find_byte(0)
            .ok_or_else(|| malformed("missing null byte separator"))?;

        let header = &content[..nul];
        let kind_name = match header.find_byte(b' ') {
            Some(space) => &header[..space],
            None => header,
        };
        let kind = ObjectKind::from_bytes(kind_name).ok_or_else(|| {
            malformed(&format!("unknown object kind {:?}", kind_name.as_bstr()))
        })?;

        let payload = content.split_off(nul + 1);

        Ok((kind, payload))
    }

    fn object_path(&self, oid: &str) -> Result<PathBuf> {
        if oid.len() < 2 || !oid.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(Error::InvalidId(oid.to_owned()));
        }

        let (group, rest) = oid.split_at(2);
        Ok(self.objects_path().join(group).join(rest))
    }
}

fn persist(temp_path: &Path, object_path: &Path) -> Result<()> {
    if let Err(e) = fs::rename(temp_path, object_path) {
        let _ = fs::remove_file(temp_path);
        return Err(e.into());
    }
    Ok(())
}

fn generate_temp_name() -> String {
    let suffix = Alphanumeric.sample_string(&mut rand::thread_rng(), 6);
    format!("tmp_obj_{suffix}")
}
