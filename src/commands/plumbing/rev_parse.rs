use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_type::ObjectType;

impl Repository {
    pub fn rev_parse(&self, name: &str, object_type: Option<ObjectType>) -> anyhow::Result<()> {
        let oid = Revision::try_parse(name)?.resolve_as(self, object_type)?;

        writeln!(self.writer(), "{oid}")?;

        Ok(())
    }
}
