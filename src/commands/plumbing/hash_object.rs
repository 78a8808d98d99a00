use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_type::ObjectType;
use std::path::Path;

impl Repository {
    /// Print the id of the file at `object_path` read as a payload of `object_type`
    ///
    /// The payload is decoded and encoded again, so trees come out canonically
    /// sorted and malformed trees, commits or tags are rejected.
    pub fn hash_object(
        &self,
        object_path: &Path,
        object_type: ObjectType,
        write: bool,
    ) -> anyhow::Result<()> {
        let data = self.workspace().read_file(object_path)?;
        let object = ObjectBox::from_payload(object_type, &data)?;

        let object_id = if write {
            self.database().store(&object)?
        } else {
            object.object_id()?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
