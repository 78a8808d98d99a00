//! Git references (HEAD, branches, tags)
//!
//! References are human-readable names pointing to objects. A reference file
//! under `.git` holds either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` pointing at another reference file (symbolic reference)
//!
//! A chain that ends at a file which does not exist yet (an unborn branch in a
//! fresh repository) resolves to nothing rather than failing.

use crate::artifacts::branch::ref_name::SymRefName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::collections::HashSet;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Git references manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the `.git` directory
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            let oid = ObjectId::try_parse(content.to_string())
                .with_context(|| format!("invalid ref file at {:?}", path))?;
            Ok(Some(SymRefOrOid::Oid(oid)))
        }
    }
}

impl Refs {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Follow a reference to the object it finally names
    ///
    /// `None` when the chain ends at a missing reference. A chain that comes
    /// back to a reference it already passed through is [`GitError::RefCycle`].
    pub fn resolve(&self, sym_ref_name: &SymRefName) -> anyhow::Result<Option<ObjectId>> {
        let mut current = sym_ref_name.clone();
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current.clone()) {
                return Err(GitError::RefCycle(current.to_string()).into());
            }

            let ref_path = self.path.join(current.as_ref_path());
            match SymRefOrOid::read_symref_or_oid(&ref_path)? {
                Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                    tracing::debug!(from = %current, to = %sym_ref_name, "following symbolic ref");
                    current = sym_ref_name;
                }
                Some(SymRefOrOid::Oid(oid)) => return Ok(Some(oid)),
                None => {
                    tracing::debug!(reference = %current, "reference is unborn");
                    return Ok(None);
                }
            }
        }
    }

    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.resolve(&SymRefName::new(HEAD_REF_NAME.to_string()))
    }

    pub fn exists(&self, sym_ref_name: &SymRefName) -> bool {
        self.path.join(sym_ref_name.as_ref_path()).is_file()
    }

    /// Write `raw_ref` to a reference file under an exclusive lock
    pub fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        Self::create_parent_dirs(&path)?;

        // truncated only once the lock is held
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.clone())
            .with_context(|| format!("failed to open ref file at {:?}", path))?;

        Self::write_locked(&mut ref_file, &raw_ref, true)
    }

    /// Point HEAD at `target` symbolically
    pub fn set_head(&self, target: &SymRefName) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), format!("ref: {}", target.as_ref_path()))
    }

    /// Create a new direct reference; an existing one is left untouched
    ///
    /// The file is created exclusively, so of two writers racing for the same
    /// name only one succeeds.
    pub fn create_ref(&self, sym_ref_name: &SymRefName, oid: &ObjectId) -> anyhow::Result<()> {
        let ref_path = self.path.join(sym_ref_name.as_ref_path());
        Self::create_parent_dirs(&ref_path)?;

        let mut ref_file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&ref_path)
        {
            Ok(ref_file) => ref_file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                anyhow::bail!("reference {} already exists", sym_ref_name)
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to create ref file at {:?}", ref_path));
            }
        };

        Self::write_locked(&mut ref_file, &oid.to_string(), false)?;
        tracing::debug!(reference = %sym_ref_name, oid = %oid, "reference created");

        Ok(())
    }

    fn create_parent_dirs(path: &Path) -> anyhow::Result<()> {
        let parent = path
            .parent()
            .with_context(|| format!("ref file at {:?} has no parent directory", path))?;

        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent directories for {:?}", path))
    }

    fn write_locked(
        ref_file: &mut std::fs::File,
        raw_ref: &str,
        truncate: bool,
    ) -> anyhow::Result<()> {
        let mut lock = file_guard::lock(ref_file, Lock::Exclusive, 0, 1)?;
        if truncate {
            lock.deref_mut().set_len(0)?;
        }
        lock.deref_mut().write_all(raw_ref.as_bytes())?;
        lock.deref_mut().write_all(b"\n")?;

        Ok(())
    }

    /// Every reference file below `path`, depth first and sorted by name
    pub fn list_refs(&self, path: &Path) -> anyhow::Result<Vec<SymRefName>> {
        Ok(WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.file_type().is_file() {
                    let relative_path = entry.path().strip_prefix(self.path.as_ref()).ok()?;
                    Some(SymRefName::new(relative_path.to_string_lossy().to_string()))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>())
    }

    pub fn list_all_refs(&self) -> anyhow::Result<Vec<SymRefName>> {
        self.list_refs(self.refs_path().as_ref())
    }

    /// Short names of all tags, sorted
    pub fn list_tags(&self) -> anyhow::Result<Vec<String>> {
        let tags_path = self.tags_path();

        Ok(self
            .list_refs(tags_path.as_ref())?
            .into_iter()
            .filter_map(|sym_ref| {
                sym_ref
                    .as_ref_path()
                    .strip_prefix("refs/tags/")
                    .map(str::to_string)
            })
            .collect())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    pub fn tags_path(&self) -> Box<Path> {
        self.refs_path().join("tags").into_boxed_path()
    }
}
