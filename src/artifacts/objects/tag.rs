//! Git annotated tag object
//!
//! ## Format
//!
//! ```text
//! tag <size>\0
//! object <target-sha>
//! type <target-type>
//! tag <name>
//! tagger <name> <email> <timestamp> <timezone>
//!
//! <message>
//! ```
//!
//! Parsed with the same key-value-list reader as commits.

use crate::artifacts::objects::commit::{Author, parse_oid_value};
use crate::artifacts::objects::kvlm::Kvlm;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitError;
use bytes::Bytes;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    kvlm: Kvlm,
}

impl Tag {
    /// Build an annotated tag pointing at `target`
    ///
    /// The message is terminated with a newline if it is not already.
    pub fn create(
        target: &ObjectId,
        target_type: ObjectType,
        name: &str,
        tagger: &Author,
        message: &str,
    ) -> Self {
        let mut message = message.to_string();
        if !message.ends_with('\n') {
            message.push('\n');
        }

        let mut kvlm = Kvlm::new(Bytes::from(message));
        kvlm.append("object", target.to_string());
        kvlm.append("type", target_type.as_str());
        kvlm.append("tag", name.to_string());
        kvlm.append("tagger", tagger.display());

        Tag { kvlm }
    }

    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    /// The tagged object
    pub fn object(&self) -> anyhow::Result<ObjectId> {
        let object = self
            .kvlm
            .get(b"object")
            .ok_or_else(|| GitError::MalformedObject("tag has no object".to_string()))?;

        parse_oid_value(object.first())
    }

    pub fn target_type(&self) -> anyhow::Result<ObjectType> {
        let target_type = self
            .kvlm
            .get(b"type")
            .ok_or_else(|| GitError::MalformedObject("tag has no type".to_string()))?;

        ObjectType::from_keyword(target_type.first())
    }

    pub fn name(&self) -> Option<String> {
        self.kvlm
            .get(b"tag")
            .map(|name| String::from_utf8_lossy(name.first()).into_owned())
    }

    pub fn message(&self) -> &Bytes {
        self.kvlm.message()
    }
}

impl Packable for Tag {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.kvlm.serialize())
    }
}

impl Unpackable for Tag {
    fn deserialize(payload: &[u8]) -> anyhow::Result<Self> {
        Ok(Tag {
            kvlm: Kvlm::parse(payload)?,
        })
    }
}

impl Object for Tag {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tag
    }
}
