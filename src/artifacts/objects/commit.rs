//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The payload is held as a [`Kvlm`] record so unknown headers (`gpgsig`,
//! `encoding`, `mergetag`, ...) survive a decode/encode cycle byte for byte.

use crate::artifacts::objects::kvlm::Kvlm;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitError;
use anyhow::Context;
use bytes::Bytes;

/// Author, committer or tagger identity
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new author with the current timestamp
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Format complete identity as stored in objects
    ///
    /// # Returns
    ///
    /// String in format "Name <email> timestamp timezone"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Load identity from environment variables
    ///
    /// Reads GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL, and optionally GIT_AUTHOR_DATE.
    /// If no date is provided, uses current time.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let name = std::env::var("GIT_AUTHOR_NAME").context("GIT_AUTHOR_NAME not set")?;
        let email = std::env::var("GIT_AUTHOR_EMAIL").context("GIT_AUTHOR_EMAIL not set")?;
        let timestamp = std::env::var("GIT_AUTHOR_DATE").ok().and_then(|date_str| {
            chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        });

        match timestamp {
            Some(ts) => Ok(Author::new_with_timestamp(name, email, ts)),
            None => Ok(Author::new(name, email)),
        }
    }
}

/// Git commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    kvlm: Kvlm,
}

impl Commit {
    pub fn new(kvlm: Kvlm) -> Self {
        Commit { kvlm }
    }

    /// Build a commit authored and committed by `author`
    pub fn create(tree: &ObjectId, parents: &[ObjectId], author: &Author, message: &str) -> Self {
        let mut message = message.to_string();
        if !message.ends_with('\n') {
            message.push('\n');
        }

        let mut kvlm = Kvlm::new(Bytes::from(message));
        kvlm.append("tree", tree.to_string());
        for parent in parents {
            kvlm.append("parent", parent.to_string());
        }
        kvlm.append("author", author.display());
        kvlm.append("committer", author.display());

        Commit { kvlm }
    }

    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    /// Get the tree object ID
    pub fn tree_oid(&self) -> anyhow::Result<ObjectId> {
        let tree = self
            .kvlm
            .get(b"tree")
            .ok_or_else(|| GitError::MalformedObject("commit has no tree".to_string()))?;

        parse_oid_value(tree.first())
    }

    /// Parent commit IDs: empty for a root commit, several for a merge
    pub fn parents(&self) -> anyhow::Result<Vec<ObjectId>> {
        self.kvlm
            .get(b"parent")
            .map(|parents| parents.values().iter().map(|p| parse_oid_value(p)).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    pub fn parent(&self) -> anyhow::Result<Option<ObjectId>> {
        Ok(self.parents()?.into_iter().next())
    }

    pub fn message(&self) -> &Bytes {
        self.kvlm.message()
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        String::from_utf8_lossy(self.message())
            .lines()
            .next()
            .unwrap_or("")
            .to_string()
    }
}

pub(crate) fn parse_oid_value(value: &[u8]) -> anyhow::Result<ObjectId> {
    ObjectId::try_parse(String::from_utf8_lossy(value).into_owned())
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.kvlm.serialize())
    }
}

impl Unpackable for Commit {
    fn deserialize(payload: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::new(Kvlm::parse(payload)?))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
