use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::graphviz;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_type::ObjectType;

impl Repository {
    /// Print the ancestry of `start` as a Graphviz digraph
    pub fn log(&self, start: &str) -> anyhow::Result<()> {
        let start_oid = Revision::try_parse(start)?.resolve_as(self, Some(ObjectType::Commit))?;

        let mut output = graphviz::header();
        for item in RevList::new(self, start_oid) {
            let (commit_oid, commit) = item?;
            output.push_str(&graphviz::commit_lines(&commit_oid, &commit)?);
        }
        output.push_str(&graphviz::footer());

        write!(self.writer(), "{output}")?;

        Ok(())
    }
}
