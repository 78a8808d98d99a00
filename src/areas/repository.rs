use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::GitError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub const GIT_DIR: &str = ".git";

/// A working tree with its `.git` directory
///
/// Owns the object database, the reference namespace and the configuration,
/// and the writer every command prints to.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    /// Lay out the repository rooted at `path` without checking what is on disk
    ///
    /// The directory is created when absent.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if path.exists() && !path.is_dir() {
            return Err(GitError::NotADirectory(path.to_path_buf()).into());
        }

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory {:?}", path))?;
        }

        let path = path.canonicalize()?;
        let git_path = path.join(GIT_DIR);

        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.clone().into_boxed_path());
        let config = Config::new(git_path.join("config").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
            config,
        })
    }

    /// Open an existing repository whose working tree is `path`
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.join(GIT_DIR).is_dir() {
            return Err(GitError::NotARepository(path.to_path_buf()).into());
        }

        let repository = Self::new(path, writer)?;
        repository.config.validate()?;
        tracing::debug!(path = %repository.path.display(), "repository opened");

        Ok(repository)
    }

    /// Open the nearest repository containing `start`
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Failed to resolve path {:?}", start))?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR).is_dir())
            .ok_or_else(|| GitError::NotARepository(start.clone()))?;

        Self::open(root, writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(GIT_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
