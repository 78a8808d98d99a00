use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::commit::Author;
use crate::artifacts::objects::tag::Tag;

const TAGS_NAMESPACE: &str = "refs/tags";

impl Repository {
    pub fn list_tags(&self) -> anyhow::Result<()> {
        let mut output = String::new();
        for tag_name in self.refs().list_tags()? {
            output.push_str(&format!("{tag_name}\n"));
        }

        write!(self.writer(), "{output}")?;

        Ok(())
    }

    /// Point `refs/tags/<name>` at `target`
    ///
    /// With a message, an annotated tag object is stored first and the
    /// reference points at it instead.
    pub fn create_tag(
        &self,
        name: &str,
        target: &str,
        message: Option<&str>,
    ) -> anyhow::Result<()> {
        let tag_name = RefName::try_parse(name.to_string())?;
        let tag_ref = tag_name.in_namespace(TAGS_NAMESPACE);

        if self.refs().exists(&tag_ref) {
            anyhow::bail!("tag '{}' already exists", tag_name);
        }

        let target_oid = Revision::try_parse(target)?.resolve(self)?;

        let tag_oid = match message {
            Some(message) => {
                let target_type = self.database().get_object_type(&target_oid)?;
                let tagger = Author::load_from_env()?;
                let tag = Tag::create(&target_oid, target_type, name, &tagger, message);

                self.database().store(&tag)?
            }
            None => target_oid,
        };

        self.refs().create_ref(&tag_ref, &tag_oid)
    }
}
