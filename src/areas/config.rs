//! Repository configuration file (`.git/config`)
//!
//! Only `core.repositoryformatversion` is ever read back; the rest of the file
//! is written once by `init` and left to other tools.

use crate::errors::GitError;
use anyhow::Context;
use std::path::Path;

const FORMAT_VERSION_REGEX: &str = r"(?m)^\s*repositoryformatversion\s*=\s*(\S+)\s*$";

pub const SUPPORTED_FORMAT_VERSION: &str = "0";

#[derive(Debug)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn new(path: Box<Path>) -> Self {
        Config { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_contents() -> String {
        format!(
            r#"[core]
	repositoryformatversion = {SUPPORTED_FORMAT_VERSION}
	filemode = false
	bare = false
"#
        )
    }

    pub fn write_default(&self) -> anyhow::Result<()> {
        std::fs::write(&self.path, Self::default_contents())
            .with_context(|| format!("failed to write config file at {:?}", self.path))
    }

    pub fn format_version(&self) -> anyhow::Result<Option<String>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("configuration file missing at {:?}", self.path))?;

        let version = regex::Regex::new(FORMAT_VERSION_REGEX)
            .with_context(|| format!("invalid format version regex: {FORMAT_VERSION_REGEX}"))?
            .captures(&content)
            .map(|caps| caps[1].to_string());

        Ok(version)
    }

    /// Refuse repositories written in a layout this crate does not understand
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.format_version()? {
            Some(version) if version == SUPPORTED_FORMAT_VERSION => Ok(()),
            Some(version) => Err(GitError::ConfigMismatch(version).into()),
            None => Err(GitError::ConfigMismatch("<missing>".to_string()).into()),
        }
    }
}
