//! Content-addressable object store
//!
//! Every object lives in its own file under `.git/objects`, addressed by its
//! identifier split as `xx/yyyy...` and holding the zlib-compressed framed bytes.
//! Objects are write-once: storing an identifier that is already present is a
//! no-op.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use crate::artifacts::objects::tree::Tree;
use crate::errors::GitError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read packfiles so repositories cloned by git can be inspected
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Read the framed bytes of an object
    ///
    /// A missing object is `None`; compressed data that cannot be inflated is
    /// [`GitError::StoreCorruption`].
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            tracing::debug!(oid = %object_id, "object not found");
            return Ok(None);
        }

        let object_content = self.read_object(object_id, object_path)?;

        Ok(Some(object_content))
    }

    /// Write framed bytes and return their identifier
    pub fn put(&self, framed: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::hash(framed);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        // otherwise, create the object directory
        if self.contains(&object_id) {
            tracing::debug!(oid = %object_id, "object already stored, skipping write");
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, framed)?;
        tracing::debug!(oid = %object_id, size = framed.len(), "object stored");

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.put(&object.frame()?)
    }

    /// Load and decode an object that must exist
    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let framed = self
            .load(object_id)?
            .ok_or_else(|| GitError::NotFound(format!("object {object_id}")))?;

        ObjectBox::decode(&framed).with_context(|| format!("Unable to decode object {object_id}"))
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        Ok(self.parse_object(object_id)?.into_blob())
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Option<Tree>> {
        Ok(self.parse_object(object_id)?.into_tree())
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        Ok(self.parse_object(object_id)?.into_commit())
    }

    pub fn parse_object_as_tag(&self, object_id: &ObjectId) -> anyhow::Result<Option<Tag>> {
        Ok(self.parse_object(object_id)?.into_tag())
    }

    /// Kind of a stored object, read from its frame header only
    pub fn get_object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        let framed = self
            .load(object_id)?
            .ok_or_else(|| GitError::NotFound(format!("object {object_id}")))?;
        let (object_type, _) = ObjectBox::split_frame(&framed)?;

        Ok(object_type)
    }

    /// Find all objects whose OID starts with the given prefix.
    ///
    /// Only the `xx/` directory named by the first two characters is scanned.
    /// Prefixes shorter than two characters scan every directory.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let dir_names = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        let mut matches = Vec::new();
        for dir_name in dir_names {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let full_oid = format!("{}{}", dir_name, entry.file_name().to_string_lossy());

                if full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> anyhow::Result<Bytes> {
        // read the object file
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        // decompress the object content
        Self::decompress(&object_content).map_err(|source| {
            GitError::StoreCorruption {
                oid: object_id.to_string(),
                source,
            }
            .into()
        })
    }

    fn write_object(&self, object_path: PathBuf, framed: &[u8]) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(framed)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
