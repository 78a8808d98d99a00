use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::materializer::Materializer;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Write the tree of `target` (a commit or a tree) into `destination`
    ///
    /// The destination is created when absent; an existing one must be an
    /// empty directory.
    pub fn checkout(&self, target: &str, destination: &Path) -> anyhow::Result<()> {
        let tree_oid = Revision::try_parse(target)?.resolve_as(self, Some(ObjectType::Tree))?;

        if !destination.exists() {
            std::fs::create_dir_all(destination)
                .with_context(|| format!("Failed to create directory {:?}", destination))?;
        }

        Materializer::new(self.database(), destination).checkout(&tree_oid)
    }
}
