use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::TreeEntry;
use crate::errors::GitError;

impl Repository {
    /// List the entries of a tree as `<mode> <kind> <id>\t<path>`
    ///
    /// With `recursive`, subtrees are replaced by their own entries in place.
    pub fn ls_tree(&self, name: &str, recursive: bool) -> anyhow::Result<()> {
        let tree_oid = Revision::try_parse(name)?.resolve_as(self, Some(ObjectType::Tree))?;

        let mut output = String::new();
        let mut stack = vec![(self.tree_entries(&tree_oid)?.into_iter(), String::new())];

        while let Some((entries, prefix)) = stack.last_mut() {
            let Some(entry) = entries.next() else {
                stack.pop();
                continue;
            };

            let path = if prefix.is_empty() {
                entry.name.clone()
            } else {
                format!("{prefix}/{}", entry.name)
            };

            if recursive && entry.is_tree() {
                stack.push((self.tree_entries(&entry.oid)?.into_iter(), path));
            } else {
                output.push_str(&format!(
                    "{} {} {}\t{}\n",
                    entry.mode.padded(),
                    entry.mode.object_type(),
                    entry.oid,
                    path
                ));
            }
        }

        write!(self.writer(), "{output}")?;

        Ok(())
    }

    fn tree_entries(&self, tree_oid: &ObjectId) -> anyhow::Result<Vec<TreeEntry>> {
        Ok(self
            .database()
            .parse_object_as_tree(tree_oid)?
            .ok_or_else(|| GitError::MalformedObject(format!("object {tree_oid} is not a tree")))?
            .into_entries())
    }
}
