use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::entry_mode::EntryKind;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitError;
use std::path::{Path, PathBuf};

/// Writes the contents of a tree into a destination directory
///
/// Every blob becomes a plain file holding its raw content, whatever its mode;
/// no permission bits or symbolic links are created. Submodule entries point
/// at commits of another repository and are skipped.
pub struct Materializer<'r> {
    database: &'r Database,
    workspace: Workspace,
}

impl<'r> Materializer<'r> {
    pub fn new(database: &'r Database, destination: &Path) -> Self {
        Materializer {
            database,
            workspace: Workspace::new(destination.into()),
        }
    }

    /// Fails with [`GitError::NotADirectory`] or [`GitError::NotEmpty`] before
    /// writing anything if the destination is not an empty directory.
    pub fn checkout(&self, tree_oid: &ObjectId) -> anyhow::Result<()> {
        self.workspace.ensure_empty()?;

        let mut pending = vec![(tree_oid.clone(), PathBuf::new())];

        while let Some((oid, dir_path)) = pending.pop() {
            let tree = self
                .database
                .parse_object_as_tree(&oid)?
                .ok_or_else(|| GitError::MalformedObject(format!("object {oid} is not a tree")))?;

            for entry in tree.into_entries() {
                let path = dir_path.join(&entry.name);

                if entry.mode.kind() == EntryKind::Submodule {
                    tracing::warn!(path = %path.display(), oid = %entry.oid, "skipping submodule");
                    continue;
                }

                match self.database.parse_object(&entry.oid)? {
                    ObjectBox::Tree(_) => {
                        self.workspace.make_directory(&path)?;
                        pending.push((entry.oid, path));
                    }
                    ObjectBox::Blob(blob) => {
                        self.workspace.write_file(&path, blob.content())?;
                        tracing::debug!(path = %path.display(), "file written");
                    }
                    ObjectBox::Commit(_) | ObjectBox::Tag(_) => {
                        tracing::warn!(
                            path = %path.display(),
                            oid = %entry.oid,
                            "skipping entry that is neither a tree nor a blob"
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
