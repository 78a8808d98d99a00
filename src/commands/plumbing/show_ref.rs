use crate::areas::repository::Repository;

impl Repository {
    /// Print `<id> <ref path>` for every reference under `refs/` that resolves
    pub fn show_ref(&self) -> anyhow::Result<()> {
        let mut output = String::new();

        for sym_ref in self.refs().list_all_refs()? {
            match self.refs().resolve(&sym_ref)? {
                Some(oid) => output.push_str(&format!("{oid} {sym_ref}\n")),
                None => tracing::debug!(reference = %sym_ref, "skipping unborn reference"),
            }
        }

        write!(self.writer(), "{output}")?;

        Ok(())
    }
}
