use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::{RefName, SymRefName};
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES, REF_NAMESPACES};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitError;
use anyhow::Context;

/// Minimum number of hex digits accepted as an abbreviated object id
const MIN_OID_PREFIX_LENGTH: usize = 4;

/// A name that identifies an object
///
/// Supports:
/// - Reference names: `HEAD`, `master`, `v1.0`, `refs/heads/feature`
/// - Aliases: `@` (resolves to `HEAD`)
/// - Full or abbreviated object ids (4-40 hex characters)
/// - Parent notation: `<revision>^`
/// - Ancestor notation: `<revision>~<n>`
///
/// A plain name is matched against every object id prefix and every reference
/// namespace at once; more than one distinct match is an error rather than a
/// silent preference.
#[derive(Debug, Clone)]
pub enum Revision {
    /// A reference or object id prefix (told apart during resolution)
    Ref(RefName),
    /// The Nth first-parent ancestor of a revision (e.g., HEAD~3)
    Ancestor(Box<Revision>, usize),
    /// The first parent of a revision (e.g., HEAD^)
    Parent(Box<Revision>),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_regex = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_regex = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_regex.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_regex.captures(revision) {
            let generations: usize = caps[2]
                .parse()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
            let ref_name = RefName::try_parse(resolved_name.to_string())?;
            Ok(Revision::Ref(ref_name))
        }
    }

    /// Object id this revision names
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Ref(ref_name) => Self::resolve_name(ref_name.as_ref(), repository),
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    /// Resolve, then peel the result toward `object_type`
    ///
    /// A result that cannot be peeled to the requested kind is not found.
    pub fn resolve_as(
        &self,
        repository: &Repository,
        object_type: Option<ObjectType>,
    ) -> anyhow::Result<ObjectId> {
        let oid = self.resolve(repository)?;

        match object_type {
            None => Ok(oid),
            Some(object_type) => Self::peel(oid.clone(), object_type, repository)?.ok_or_else(
                || GitError::NotFound(format!("{object_type} for object {oid}")).into(),
            ),
        }
    }

    /// Follow annotated tags to their object, and commits to their tree when a
    /// tree is asked for, until an object of `object_type` is reached
    pub fn peel(
        oid: ObjectId,
        object_type: ObjectType,
        repository: &Repository,
    ) -> anyhow::Result<Option<ObjectId>> {
        let database = repository.database();
        let mut current = oid;

        loop {
            let current_type = database.get_object_type(&current)?;
            if current_type == object_type {
                return Ok(Some(current));
            }

            current = match current_type {
                ObjectType::Tag => database
                    .parse_object_as_tag(&current)?
                    .ok_or_else(|| GitError::MalformedObject(format!("tag {current}")))?
                    .object()?,
                ObjectType::Commit if object_type == ObjectType::Tree => database
                    .parse_object_as_commit(&current)?
                    .ok_or_else(|| GitError::MalformedObject(format!("commit {current}")))?
                    .tree_oid()?,
                _ => return Ok(None),
            };
        }
    }

    fn resolve_name(name: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        let mut candidates = Self::candidates(name, repository)?;
        candidates.sort();
        candidates.dedup();

        match candidates.len() {
            0 => Err(GitError::NotFound(format!("revision {name}")).into()),
            1 => Ok(candidates.remove(0)),
            _ => Err(GitError::AmbiguousName {
                name: name.to_string(),
                candidates: candidates.iter().map(ToString::to_string).collect(),
            }
            .into()),
        }
    }

    fn candidates(name: &str, repository: &Repository) -> anyhow::Result<Vec<ObjectId>> {
        let refs = repository.refs();

        if name == HEAD_REF_NAME {
            return Ok(refs.read_head()?.into_iter().collect());
        }

        let mut candidates = Vec::new();

        if Self::looks_like_oid(name) {
            candidates.extend(repository.database().find_objects_by_prefix(name)?);
        }

        let mut sym_refs = REF_NAMESPACES
            .iter()
            .map(|namespace| SymRefName::new(format!("{namespace}/{name}")))
            .collect::<Vec<_>>();
        if name.starts_with("refs/") {
            sym_refs.push(SymRefName::new(name.to_string()));
        }

        for sym_ref in sym_refs {
            if refs.exists(&sym_ref)
                && let Some(oid) = refs.resolve(&sym_ref)?
            {
                candidates.push(oid);
            }
        }

        tracing::debug!(name, count = candidates.len(), "revision candidates");

        Ok(candidates)
    }

    fn resolve_commit_parent(oid: ObjectId, repository: &Repository) -> anyhow::Result<ObjectId> {
        let commit_oid = Self::peel(oid.clone(), ObjectType::Commit, repository)?
            .ok_or_else(|| anyhow::anyhow!("object {} is not a commit", oid))?;
        let commit = repository
            .database()
            .parse_object_as_commit(&commit_oid)?
            .ok_or_else(|| anyhow::anyhow!("object {} is not a commit", commit_oid))?;

        commit
            .parent()?
            .ok_or_else(|| GitError::NotFound(format!("parent of commit {commit_oid}")).into())
    }

    fn looks_like_oid(s: &str) -> bool {
        s.len() >= MIN_OID_PREFIX_LENGTH
            && s.len() <= OBJECT_ID_LENGTH
            && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}
