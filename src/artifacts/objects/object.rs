//! Object framing
//!
//! Every stored object is framed as `<type> SP <decimal payload length> NUL <payload>`.
//! The object ID is the SHA-1 of the whole frame, not of the payload alone.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use crate::artifacts::objects::tree::Tree;
use crate::errors::GitError;
use anyhow::Result;
use bytes::Bytes;

/// Encodes an object's payload (the bytes after the frame header)
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Decodes an object from its payload
pub trait Unpackable {
    fn deserialize(payload: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Payload prefixed with the frame header
    fn frame(&self) -> Result<Bytes> {
        let payload = self.serialize()?;
        let header = format!("{} {}\0", self.object_type().as_str(), payload.len());

        let mut framed = Vec::with_capacity(header.len() + payload.len());
        framed.extend_from_slice(header.as_bytes());
        framed.extend_from_slice(&payload);

        Ok(Bytes::from(framed))
    }

    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::hash(&self.frame()?))
    }
}

/// Any of the four stored object kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
    Tag(Box<Tag>),
}

impl ObjectBox {
    /// Decode a payload of the given kind
    pub fn from_payload(object_type: ObjectType, payload: &[u8]) -> Result<Self> {
        Ok(match object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(payload)?)),
            ObjectType::Tree => ObjectBox::Tree(Box::new(Tree::deserialize(payload)?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(payload)?)),
            ObjectType::Tag => ObjectBox::Tag(Box::new(Tag::deserialize(payload)?)),
        })
    }

    /// Split a frame into its kind and payload, validating the declared length
    pub fn split_frame(framed: &[u8]) -> Result<(ObjectType, &[u8])> {
        let space = framed
            .iter()
            .position(|&b| b == b' ')
            .ok_or_else(|| GitError::MalformedObject("missing type terminator".to_string()))?;
        let nul = framed[space..]
            .iter()
            .position(|&b| b == b'\0')
            .map(|offset| space + offset)
            .ok_or_else(|| GitError::MalformedObject("missing size terminator".to_string()))?;

        let size = std::str::from_utf8(&framed[space + 1..nul])
            .ok()
            .and_then(|size| size.parse::<usize>().ok())
            .ok_or_else(|| {
                GitError::MalformedObject(format!(
                    "invalid size {:?}",
                    String::from_utf8_lossy(&framed[space + 1..nul])
                ))
            })?;

        let payload = &framed[nul + 1..];
        if size != payload.len() {
            return Err(GitError::MalformedObject(format!(
                "bad length: declared {size}, found {}",
                payload.len()
            ))
            .into());
        }

        let object_type = ObjectType::from_keyword(&framed[..space])?;

        Ok((object_type, payload))
    }

    pub fn decode(framed: &[u8]) -> Result<Self> {
        let (object_type, payload) = Self::split_frame(framed)?;
        Self::from_payload(object_type, payload)
    }

    pub fn encode(&self) -> Result<Bytes> {
        self.frame()
    }

    pub fn into_blob(self) -> Option<Blob> {
        match self {
            ObjectBox::Blob(blob) => Some(*blob),
            _ => None,
        }
    }

    pub fn into_tree(self) -> Option<Tree> {
        match self {
            ObjectBox::Tree(tree) => Some(*tree),
            _ => None,
        }
    }

    pub fn into_commit(self) -> Option<Commit> {
        match self {
            ObjectBox::Commit(commit) => Some(*commit),
            _ => None,
        }
    }

    pub fn into_tag(self) -> Option<Tag> {
        match self {
            ObjectBox::Tag(tag) => Some(*tag),
            _ => None,
        }
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> Result<Bytes> {
        match self {
            ObjectBox::Blob(blob) => blob.serialize(),
            ObjectBox::Tree(tree) => tree.serialize(),
            ObjectBox::Commit(commit) => commit.serialize(),
            ObjectBox::Tag(tag) => tag.serialize(),
        }
    }
}

impl Object for ObjectBox {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
            ObjectBox::Tag(_) => ObjectType::Tag,
        }
    }
}
