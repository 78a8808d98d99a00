use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Lazy pre-order walk of the commits reachable from a starting commit
///
/// Yields `(id, commit)` pairs. An unreadable or non-commit object ends the
/// walk with an error item.
pub struct RevList<'r> {
    repository: &'r Repository,
    pending: Vec<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(repository: &'r Repository, start: ObjectId) -> Self {
        RevList {
            repository,
            pending: vec![start],
            visited: HashSet::new(),
        }
    }

    fn visit(&mut self, commit_oid: &ObjectId) -> anyhow::Result<Commit> {
        let commit = self
            .repository
            .database()
            .parse_object_as_commit(commit_oid)?
            .ok_or_else(|| anyhow::anyhow!("object {} is not a commit", commit_oid))?;

        // reversed so that the first parent is popped first
        for parent in commit.parents()?.into_iter().rev() {
            if !self.visited.contains(&parent) {
                self.pending.push(parent);
            }
        }

        Ok(commit)
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let commit_oid = self.pending.pop()?;
            if !self.visited.insert(commit_oid.clone()) {
                continue;
            }

            tracing::debug!(oid = %commit_oid, "visiting commit");

            return match self.visit(&commit_oid) {
                Ok(commit) => Some(Ok((commit_oid, commit))),
                Err(err) => {
                    self.pending.clear();
                    Some(Err(err))
                }
            };
        }
    }
}
