//! Git tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs),
//! subdirectories (other trees), symbolic links and submodules, along with
//! their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are written in canonical order: byte order of names, where a
//! subtree's name compares as if it ended with `/`. Trees written in any other
//! order hash differently from the ones Git produces.

use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitError;
use bytes::Bytes;
use derive_new::new;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// One directory record: `(mode, name, target)`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    /// Canonical ordering key
    pub fn sort_key(&self) -> Cow<'_, str> {
        if self.is_tree() {
            Cow::Owned(format!("{}/", self.name))
        } else {
            Cow::Borrowed(&self.name)
        }
    }

    fn check_name(name: &str) -> anyhow::Result<()> {
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(
                GitError::MalformedObject(format!("invalid tree entry name {name:?}")).into(),
            );
        }

        Ok(())
    }
}

/// Git tree object representing a directory snapshot
///
/// Entries are kept in the order they were parsed or given; serialization
/// always writes them in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    /// Entries sorted by their canonical key
    pub fn canonical_entries(&self) -> Vec<&TreeEntry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        entries
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut tree_bytes = Vec::new();

        for entry in self.canonical_entries() {
            let header = format!("{} {}", entry.mode.as_str(), entry.name);
            tree_bytes.write_all(header.as_bytes())?;
            tree_bytes.push(0);
            entry.oid.write_h40_to(&mut tree_bytes)?;
        }

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: &[u8]) -> anyhow::Result<Self> {
        let mut entries = Vec::new();
        let mut reader = payload;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(GitError::MalformedObject("unexpected EOF in mode".to_string()).into());
            }
            let mode = EntryMode::from_octal_bytes(&mode_bytes)?;

            // Read "name\0"
            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(GitError::MalformedObject("unexpected EOF in name".to_string()).into());
            }
            let name = String::from_utf8(name_bytes.clone()).map_err(|_| {
                GitError::MalformedObject("tree entry name is not UTF-8".to_string())
            })?;
            TreeEntry::check_name(&name)?;

            let oid = ObjectId::read_h40_from(&mut reader).map_err(|_| {
                GitError::MalformedObject(format!("unexpected EOF in object id of {name}"))
            })?;

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
