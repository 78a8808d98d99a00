use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::ref_name::SymRefName;
use anyhow::Context;
use std::fs;

const DEFAULT_BRANCH: &str = "master";
const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        let git_path = self.git_path();

        // an existing .git is only reused when it is an empty directory
        if git_path.exists() {
            Workspace::new(git_path.clone()).ensure_empty()?;
        }

        fs::create_dir_all(git_path.join("branches"))
            .context("Failed to create .git/branches directory")?;

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        fs::create_dir_all(self.refs().tags_path())
            .context("Failed to create .git/refs/tags directory")?;

        fs::write(git_path.join("description"), DESCRIPTION)
            .context("Failed to create .git/description file")?;

        self.refs()
            .set_head(&SymRefName::new(format!("refs/heads/{DEFAULT_BRANCH}")))
            .context("Failed to create initial HEAD reference")?;

        self.config()
            .write_default()
            .context("Failed to create .git/config file")?;

        writeln!(
            self.writer(),
            "Initialized empty Git repository in {}/",
            git_path.display()
        )?;

        Ok(())
    }
}
