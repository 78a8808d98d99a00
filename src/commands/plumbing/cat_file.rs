use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitError;

impl Repository {
    /// Print the raw payload of the object `name` refers to
    ///
    /// Tags and commits are peeled toward `object_type` when possible; anything
    /// else is printed as stored.
    pub fn cat_file(&self, object_type: ObjectType, name: &str) -> anyhow::Result<()> {
        let oid = Revision::try_parse(name)?.resolve(self)?;

        let oid = match Revision::peel(oid.clone(), object_type, self)? {
            Some(peeled) => peeled,
            None => {
                tracing::warn!(
                    oid = %oid,
                    requested = %object_type,
                    "object kind differs from the requested one"
                );
                oid
            }
        };

        let framed = self
            .database()
            .load(&oid)?
            .ok_or_else(|| GitError::NotFound(format!("object {oid}")))?;
        let (_, payload) = ObjectBox::split_frame(&framed)?;

        self.writer().write_all(payload)?;

        Ok(())
    }
}
